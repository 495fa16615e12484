//! Treatment lookup: a curated entry or the safe fallback, never anything in between.

use std::sync::Arc;

use veramate_core::models::{GuidanceMode, SafeFallbackResponse, TreatmentGuidance};

use crate::categories::category_for;
use crate::knowledge_base::KnowledgeBase;

/// Read-only; clone freely across requests.
#[derive(Debug, Clone)]
pub struct TreatmentRouter {
    knowledge: Arc<KnowledgeBase>,
}

impl TreatmentRouter {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Curated entry for the disease's category in `mode`, served verbatim,
    /// or the safe fallback when there is no mapping or no validated file.
    pub fn retrieve(&self, disease_id: &str, mode: GuidanceMode) -> TreatmentGuidance {
        let _span = tracing::info_span!("veramate.retrieve", disease_id, %mode).entered();

        let Some(category) = category_for(disease_id) else {
            tracing::info!("no category mapping, serving safe fallback");
            return TreatmentGuidance::Fallback(SafeFallbackResponse::new(disease_id, mode.label()));
        };

        match self.knowledge.get(mode, category) {
            Some(entry) => {
                tracing::debug!(category, "serving curated guidance");
                TreatmentGuidance::Curated(entry)
            }
            None => {
                tracing::info!(category, "no validated knowledge file, serving safe fallback");
                TreatmentGuidance::Fallback(SafeFallbackResponse::new(disease_id, mode.label()))
            }
        }
    }

    /// Like [`retrieve`](Self::retrieve) with a caller-supplied mode label.
    /// An unknown label gets the fallback, parameterized by the label as given.
    pub fn retrieve_by_label(&self, disease_id: &str, mode_label: &str) -> TreatmentGuidance {
        match mode_label.parse::<GuidanceMode>() {
            Ok(mode) => self.retrieve(disease_id, mode),
            Err(e) => {
                tracing::warn!(disease_id, error = %e, "unknown guidance mode, serving safe fallback");
                TreatmentGuidance::Fallback(SafeFallbackResponse::new(disease_id, mode_label))
            }
        }
    }
}
