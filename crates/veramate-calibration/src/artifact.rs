//! Persisted per-stage calibration artifact.

use std::path::Path;

use serde::{Deserialize, Serialize};
use veramate_core::errors::CalibrationError;

/// JSON written by the offline calibration job.
///
/// Only `temperature` is consumed; the rest is carried for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationArtifact {
    pub temperature: f64,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub num_classes: Option<usize>,
    #[serde(default)]
    pub class_names: Option<Vec<String>>,
    #[serde(default)]
    pub metrics: Option<serde_json::Value>,
}

impl CalibrationArtifact {
    /// Read and check an artifact. The temperature must be finite and positive.
    pub fn read(path: &Path) -> Result<Self, CalibrationError> {
        if !path.exists() {
            return Err(CalibrationError::ArtifactMissing {
                path: path.display().to_string(),
            });
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| CalibrationError::ArtifactUnreadable {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::parse(&content, path)
    }

    /// Parse artifact JSON; `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, CalibrationError> {
        let artifact: CalibrationArtifact =
            serde_json::from_str(content).map_err(|e| CalibrationError::ArtifactUnreadable {
                path: origin.display().to_string(),
                message: e.to_string(),
            })?;

        if !artifact.temperature.is_finite() || artifact.temperature <= 0.0 {
            return Err(CalibrationError::InvalidTemperature {
                path: origin.display().to_string(),
                value: artifact.temperature,
            });
        }

        Ok(artifact)
    }
}
