//! Calibration errors: unusable temperature artifacts and malformed score vectors.

use super::error_code::{self, VeraMateErrorCode};
use crate::models::Stage;

/// Errors raised while loading temperatures or rescaling a score vector.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalibrationError {
    #[error("calibration artifact not found: {path}")]
    ArtifactMissing { path: String },

    #[error("calibration artifact {path} unreadable: {message}")]
    ArtifactUnreadable { path: String, message: String },

    #[error("calibration artifact {path} has invalid temperature {value}")]
    InvalidTemperature { path: String, value: f64 },

    #[error("{stage} vector has {actual} entries, expected {expected}")]
    WrongLength {
        stage: Stage,
        expected: usize,
        actual: usize,
    },

    #[error("{stage} vector has a non-finite value at index {index}")]
    NonFinite { stage: Stage, index: usize },

    #[error("{stage} probability at index {index} is negative")]
    Negative { stage: Stage, index: usize },

    #[error("{stage} probabilities carry no mass")]
    ZeroMass { stage: Stage },
}

impl CalibrationError {
    /// Whether this error describes a malformed score vector (as opposed to an artifact problem).
    pub fn is_malformed_vector(&self) -> bool {
        matches!(
            self,
            Self::WrongLength { .. } | Self::NonFinite { .. } | Self::Negative { .. } | Self::ZeroMass { .. }
        )
    }
}

impl VeraMateErrorCode for CalibrationError {
    fn error_code(&self) -> &'static str {
        if self.is_malformed_vector() {
            error_code::MALFORMED_VECTOR
        } else {
            error_code::CALIBRATION_ERROR
        }
    }
}
