//! In-memory knowledge base. Built once from a clean validation pass,
//! read-only afterwards.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::NaiveDate;
use veramate_core::config::KnowledgeConfig;
use veramate_core::errors::{KnowledgeError, ValidationError, VeraMateResult};
use veramate_core::models::{GuidanceMode, KnowledgeEntry};

use crate::validator::{KnowledgeValidator, ScanOutcome};

/// Validated entries keyed by (mode, category).
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: HashMap<(GuidanceMode, String), Arc<KnowledgeEntry>>,
}

impl KnowledgeBase {
    /// Validate the configured tree and load it. Any violation is fatal.
    pub fn load(config: &KnowledgeConfig) -> VeraMateResult<Self> {
        Self::load_as_of(config, chrono::Local::now().date_naive())
    }

    pub fn load_as_of(config: &KnowledgeConfig, today: NaiveDate) -> VeraMateResult<Self> {
        if !config.root.is_dir() {
            return Err(KnowledgeError::Io {
                path: config.root.display().to_string(),
                message: "knowledge root is not a directory".to_string(),
            }
            .into());
        }

        let outcome = KnowledgeValidator::from_config(config).scan(today);
        Self::from_scan(outcome).map_err(Into::into)
    }

    /// Build from a finished scan. Refuses unless the report is clean.
    pub fn from_scan(outcome: ScanOutcome) -> Result<Self, ValidationError> {
        if !outcome.report.is_clean() {
            tracing::error!(
                violations = outcome.report.len(),
                "knowledge base rejected, refusing to serve"
            );
            return Err(ValidationError::KnowledgeRejected {
                report: outcome.report,
            });
        }

        let entries = outcome
            .documents
            .into_iter()
            .map(|doc| ((doc.mode, doc.category), Arc::new(doc.entry)))
            .collect::<HashMap<_, _>>();

        tracing::info!(entries = entries.len(), "knowledge base loaded");
        Ok(Self { entries })
    }

    /// Validated entry for one (mode, category), shared without copying.
    pub fn get(&self, mode: GuidanceMode, category: &str) -> Option<Arc<KnowledgeEntry>> {
        self.entries.get(&(mode, category.to_string())).cloned()
    }

    pub fn contains(&self, mode: GuidanceMode, category: &str) -> bool {
        self.entries.contains_key(&(mode, category.to_string()))
    }

    /// Validated categories per mode, sorted.
    pub fn available(&self) -> BTreeMap<GuidanceMode, Vec<String>> {
        let mut available: BTreeMap<GuidanceMode, Vec<String>> =
            GuidanceMode::ALL.iter().map(|m| (*m, Vec::new())).collect();
        for (mode, category) in self.entries.keys() {
            available.entry(*mode).or_default().push(category.clone());
        }
        for categories in available.values_mut() {
            categories.sort();
        }
        available
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
