use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Curated knowledge base location and completeness requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// Root directory holding `scientific/` and `ayurvedic/`.
    pub root: PathBuf,
    /// Files that must exist, as `<mode>/<category>` (e.g. `scientific/fungal`).
    pub required_categories: Vec<String>,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(defaults::DEFAULT_KNOWLEDGE_ROOT),
            required_categories: Vec::new(),
        }
    }
}
