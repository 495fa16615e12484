use serde::Serialize;
use uuid::Uuid;
use veramate_core::models::{AggregatedPrediction, ClassProbability, DiagnosisDecision};

/// Everything a diagnosis request returns: the decision plus the fused
/// distribution for display. No prediction when no image survived screening.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisOutcome {
    pub request_id: Uuid,
    pub decision: DiagnosisDecision,
    pub prediction: Option<AggregatedPrediction>,
}

impl DiagnosisOutcome {
    /// The `k` most likely classes, highest first.
    pub fn top_classes(&self, k: usize) -> Vec<ClassProbability> {
        self.prediction
            .as_ref()
            .map(|p| p.top_k(k))
            .unwrap_or_default()
    }
}
