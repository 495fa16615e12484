//! Temperature scaling of a single score vector.

use std::fmt;
use std::path::{Path, PathBuf};

use veramate_core::errors::CalibrationError;
use veramate_core::models::{RawScores, Stage};

use crate::artifact::CalibrationArtifact;

/// Where a stage's temperature came from.
#[derive(Debug, Clone, PartialEq)]
pub enum TemperatureSource {
    /// Loaded from a calibration artifact.
    Artifact(PathBuf),
    /// Set directly (tests, embedding).
    Explicit,
    /// Artifact missing or unusable; scaling disabled.
    Fallback,
}

impl fmt::Display for TemperatureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Artifact(path) => write!(f, "artifact:{}", path.display()),
            Self::Explicit => f.write_str("explicit"),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}

/// A stage's temperature. `T > 0` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureScaler {
    temperature: f64,
    source: TemperatureSource,
}

impl TemperatureScaler {
    /// Scaling disabled (`T = 1`).
    pub fn identity() -> Self {
        Self {
            temperature: 1.0,
            source: TemperatureSource::Fallback,
        }
    }

    pub fn new(temperature: f64) -> Result<Self, CalibrationError> {
        if !temperature.is_finite() || temperature <= 0.0 {
            return Err(CalibrationError::InvalidTemperature {
                path: "<explicit>".to_string(),
                value: temperature,
            });
        }
        Ok(Self {
            temperature,
            source: TemperatureSource::Explicit,
        })
    }

    /// Load from an artifact, degrading to `T = 1` with a warning on any failure.
    pub fn from_artifact(path: &Path, stage: Stage) -> Self {
        match CalibrationArtifact::read(path) {
            Ok(artifact) => {
                tracing::info!(
                    %stage,
                    path = %path.display(),
                    temperature = artifact.temperature,
                    "loaded calibration temperature"
                );
                Self {
                    temperature: artifact.temperature,
                    source: TemperatureSource::Artifact(path.to_path_buf()),
                }
            }
            Err(e) => {
                tracing::warn!(
                    %stage,
                    error = %e,
                    "calibration artifact unusable, temperature scaling disabled (T = 1)"
                );
                Self::identity()
            }
        }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn source(&self) -> &TemperatureSource {
        &self.source
    }

    /// Whether this scaler changes its input.
    pub fn is_scaling(&self) -> bool {
        self.temperature != 1.0
    }

    /// Rescale `scores` into a calibrated probability distribution of `expected_len` classes.
    pub fn apply(
        &self,
        stage: Stage,
        scores: &RawScores,
        expected_len: usize,
    ) -> Result<Vec<f64>, CalibrationError> {
        let values = scores.values();
        if values.len() != expected_len {
            return Err(CalibrationError::WrongLength {
                stage,
                expected: expected_len,
                actual: values.len(),
            });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(CalibrationError::NonFinite { stage, index });
        }

        match scores {
            RawScores::Logits(logits) => {
                let scaled: Vec<f64> = logits.iter().map(|l| l / self.temperature).collect();
                Ok(softmax(&scaled))
            }
            RawScores::Probabilities(probs) => {
                if let Some(index) = probs.iter().position(|p| *p < 0.0) {
                    return Err(CalibrationError::Negative { stage, index });
                }
                if probs.iter().all(|p| *p == 0.0) {
                    return Err(CalibrationError::ZeroMass { stage });
                }
                // p^(1/T) / sum == softmax(ln(p) / T); zero-probability classes stay at zero.
                let scaled: Vec<f64> = probs
                    .iter()
                    .map(|p| {
                        if *p > 0.0 {
                            p.ln() / self.temperature
                        } else {
                            f64::NEG_INFINITY
                        }
                    })
                    .collect();
                Ok(softmax(&scaled))
            }
        }
    }
}

/// Numerically stable softmax. `-inf` entries map to exactly zero.
/// Requires at least one finite entry.
fn softmax(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = values.iter().map(|v| (v - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
