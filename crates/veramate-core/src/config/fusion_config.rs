use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::DEFAULT_DISEASE_LABELS;

/// Two-stage fusion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Calibrated Stage A healthy probability at or above which Stage B is skipped.
    /// `None` means Stage B always runs.
    pub stage_b_bypass_threshold: Option<f64>,
    /// Index of the healthy class in the Stage A output vector.
    pub healthy_index: usize,
    /// Stage B disease labels, in model output order.
    pub disease_labels: Vec<String>,
}

impl FusionConfig {
    /// Whether a calibrated healthy probability skips Stage B.
    pub fn bypasses_stage_b(&self, healthy_probability: f64) -> bool {
        self.stage_b_bypass_threshold
            .is_some_and(|threshold| healthy_probability >= threshold)
    }
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            stage_b_bypass_threshold: None,
            healthy_index: defaults::DEFAULT_HEALTHY_INDEX,
            disease_labels: DEFAULT_DISEASE_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
