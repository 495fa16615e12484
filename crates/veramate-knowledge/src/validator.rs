//! Scans every (mode × category) file under the knowledge
//! root and accumulates every violation into one report.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use veramate_core::config::KnowledgeConfig;
use veramate_core::models::{GuidanceMode, KnowledgeEntry, ValidationReport};

use crate::checks::{check_document, FileContext};
use crate::schema::RawKnowledgeDocument;

/// A file that passed every check, converted to its typed entry.
#[derive(Debug, Clone)]
pub struct ValidatedDocument {
    pub mode: GuidanceMode,
    /// File stem, e.g. `fungal`.
    pub category: String,
    pub entry: KnowledgeEntry,
}

/// Everything one scan produced.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub report: ValidationReport,
    /// Documents that passed. Only servable when `report` is clean.
    pub documents: Vec<ValidatedDocument>,
    pub files_scanned: usize,
}

/// Validates the curated knowledge tree. Reads files only; no network access.
#[derive(Debug, Clone)]
pub struct KnowledgeValidator {
    root: PathBuf,
    required_categories: Vec<String>,
}

impl KnowledgeValidator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            required_categories: Vec::new(),
        }
    }

    pub fn from_config(config: &KnowledgeConfig) -> Self {
        Self::new(config.root.clone())
            .with_required_categories(config.required_categories.iter().cloned())
    }

    /// Files that must exist, as `<mode>/<category>`.
    pub fn with_required_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate against today's local date.
    pub fn validate_all(&self) -> ValidationReport {
        self.validate_all_as_of(chrono::Local::now().date_naive())
    }

    /// Validate with an explicit "today" for the future-date and citation-year checks.
    pub fn validate_all_as_of(&self, today: NaiveDate) -> ValidationReport {
        self.scan(today).report
    }

    /// Full scan: the report plus every document that passed.
    pub fn scan(&self, today: NaiveDate) -> ScanOutcome {
        let _span =
            tracing::info_span!("veramate.knowledge.validate", root = %self.root.display()).entered();

        let mut outcome = ScanOutcome::default();

        for mode in GuidanceMode::ALL {
            let dir = self.root.join(mode.dir_name());
            let dir_id = format!("{}/", mode.dir_name());

            if !dir.is_dir() {
                FileContext::new(&dir_id, today, &mut outcome.report)
                    .violation("directory", format!("{mode} knowledge directory does not exist"));
                continue;
            }

            let files = match list_json_files(&dir) {
                Ok(files) => files,
                Err(e) => {
                    FileContext::new(&dir_id, today, &mut outcome.report)
                        .violation("directory", format!("directory unreadable: {e}"));
                    continue;
                }
            };

            for path in files {
                outcome.files_scanned += 1;
                if let Some(doc) = validate_file(mode, &path, today, &mut outcome.report) {
                    outcome.documents.push(doc);
                }
            }
        }

        self.check_required(today, &mut outcome.report);

        tracing::info!(
            files = outcome.files_scanned,
            valid = outcome.documents.len(),
            violations = outcome.report.len(),
            "knowledge validation complete"
        );

        outcome
    }

    fn check_required(&self, today: NaiveDate, report: &mut ValidationReport) {
        for required in &self.required_categories {
            let Some((mode_label, category)) = required.split_once('/') else {
                FileContext::new(required, today, report)
                    .violation("required_categories", "expected <mode>/<category>");
                continue;
            };
            let mode = match mode_label.parse::<GuidanceMode>() {
                Ok(mode) => mode,
                Err(e) => {
                    FileContext::new(required, today, report)
                        .violation("required_categories", e.to_string());
                    continue;
                }
            };

            let path = self.root.join(mode.dir_name()).join(format!("{category}.json"));
            if !path.is_file() {
                let file_id = format!("{}/{category}.json", mode.dir_name());
                FileContext::new(&file_id, today, report)
                    .violation("file", "required knowledge file is missing");
            }
        }
    }
}

/// `*.json` files directly inside `dir`, sorted by name.
fn list_json_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn validate_file(
    mode: GuidanceMode,
    path: &Path,
    today: NaiveDate,
    report: &mut ValidationReport,
) -> Option<ValidatedDocument> {
    let file_name = path.file_name()?.to_string_lossy().into_owned();
    let stem = path.file_stem()?.to_string_lossy().into_owned();
    let file_id = format!("{}/{file_name}", mode.dir_name());

    let before = report.len();
    let mut ctx = FileContext::new(&file_id, today, report);

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            ctx.violation("document", format!("unreadable: {e}"));
            return None;
        }
    };

    let doc = match RawKnowledgeDocument::parse(&content) {
        Ok(doc) => doc,
        Err(e) => {
            ctx.violation("document", format!("invalid knowledge document: {e}"));
            return None;
        }
    };

    check_document(&doc, &mut ctx);

    if let Some(category) = doc.category.as_deref().filter(|c| !c.trim().is_empty()) {
        if category.trim() != stem {
            ctx.violation(
                "category",
                format!("'{category}' does not match file name '{stem}'"),
            );
        }
    }

    if report.len() > before {
        return None;
    }

    match doc.to_entry() {
        Some(entry) => {
            tracing::debug!(file = %file_id, disease_id = %entry.disease_id, "knowledge file valid");
            Some(ValidatedDocument {
                mode,
                category: stem,
                entry,
            })
        }
        None => {
            report.push(file_id, "document", "document could not be converted to an entry");
            None
        }
    }
}
