use super::error_code::VeraMateErrorCode;
use super::{CalibrationError, ConfigError, InferenceError, KnowledgeError, ValidationError};

/// Top-level error type. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum VeraMateError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("calibration error: {0}")]
    Calibration(#[from] CalibrationError),

    #[error("inference error: {0}")]
    Inference(#[from] InferenceError),

    #[error("knowledge validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("knowledge error: {0}")]
    Knowledge(#[from] KnowledgeError),
}

impl VeraMateErrorCode for VeraMateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Calibration(e) => e.error_code(),
            Self::Inference(e) => e.error_code(),
            Self::Validation(e) => e.error_code(),
            Self::Knowledge(e) => e.error_code(),
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type VeraMateResult<T> = Result<T, VeraMateError>;
