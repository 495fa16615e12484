use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Where the per-stage temperature artifacts live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    /// Stage A (healthy/unhealthy) calibration artifact.
    pub stage_a_artifact: PathBuf,
    /// Stage B (disease type) calibration artifact.
    pub stage_b_artifact: PathBuf,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            stage_a_artifact: PathBuf::from(defaults::DEFAULT_STAGE_A_ARTIFACT),
            stage_b_artifact: PathBuf::from(defaults::DEFAULT_STAGE_B_ARTIFACT),
        }
    }
}
