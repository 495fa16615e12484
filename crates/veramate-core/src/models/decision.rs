use serde::{Deserialize, Serialize};

/// Discretized reliability tier of the top fused probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceStatus {
    High,
    Medium,
    Low,
}

/// Recommended next action for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NextStep {
    ShowTreatment,
    RetakePhotos,
    ConsultExpert,
}

/// Per-request outcome of the confidence router. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisDecision {
    /// Top class id; `None` when no image survived screening.
    pub disease_id: Option<String>,
    /// Probability of `disease_id`.
    pub probability: Option<f64>,
    pub status: ConfidenceStatus,
    pub next_step: NextStep,
    /// Present when the status is LOW.
    pub retake_message: Option<String>,
    pub valid_images: usize,
    pub total_images: usize,
}

impl DiagnosisDecision {
    pub fn shows_treatment(&self) -> bool {
        self.next_step == NextStep::ShowTreatment
    }

    /// MEDIUM decisions show guidance under a caution banner.
    pub fn needs_caution_banner(&self) -> bool {
        self.status == ConfidenceStatus::Medium
    }
}
