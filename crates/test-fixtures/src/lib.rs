//! Test fixture loader for VeraMate knowledge trees and calibration artifacts.
//!
//! Fixture data lives under `crates/test-fixtures/data/`. Helpers panic on
//! missing or malformed fixtures; they are only used from tests.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// The curated knowledge tree (`scientific/`, `ayurvedic/`).
pub fn knowledge_root() -> PathBuf {
    fixtures_root().join("knowledge")
}

/// Copy the curated knowledge tree into `dest`, so a test can mutate it.
///
/// Creates `dest/scientific` and `dest/ayurvedic`.
pub fn copy_knowledge_tree(dest: &Path) {
    for mode in ["scientific", "ayurvedic"] {
        let target = dest.join(mode);
        std::fs::create_dir_all(&target)
            .unwrap_or_else(|e| panic!("Failed to create {}: {}", target.display(), e));
        for file in list_fixtures(&format!("knowledge/{mode}")) {
            let Some(name) = file.file_name() else { continue };
            std::fs::copy(&file, target.join(name))
                .unwrap_or_else(|e| panic!("Failed to copy {}: {}", file.display(), e));
        }
    }
}

/// Overwrite one knowledge file in a copied tree with a JSON value.
pub fn write_knowledge_file(root: &Path, mode: &str, category: &str, value: &serde_json::Value) {
    let path = root.join(mode).join(format!("{category}.json"));
    let content = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| panic!("Failed to serialize {}: {}", path.display(), e));
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knowledge_tree_has_both_modes() {
        assert_eq!(list_fixtures("knowledge/scientific").len(), 3);
        assert_eq!(list_fixtures("knowledge/ayurvedic").len(), 3);
    }

    #[test]
    fn calibration_fixtures_present() {
        assert!(fixture_exists("calibration/stage_a.json"));
        assert!(fixture_exists("calibration/stage_b.json"));
    }

    #[test]
    fn fixture_values_parse() {
        let value = load_fixture_value("knowledge/scientific/fungal.json");
        assert_eq!(value["category"], "fungal");
    }
}
