//! Per-request inference errors. A request that fails with one of these
//! produces no decision and no partial prediction.

use super::error_code::{self, VeraMateErrorCode};
use crate::models::Stage;

/// Errors surfaced to the caller of a diagnosis request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error("diagnosis requires at least one image")]
    EmptyBatch,

    #[error("{count} images supplied, at most {max} accepted")]
    TooManyImages { count: usize, max: usize },

    #[error("{stage} classifier timed out after {timeout_ms}ms on image {image_id}")]
    Timeout {
        stage: Stage,
        image_id: String,
        timeout_ms: u64,
    },

    #[error("{stage} classifier failed on image {image_id}: {reason}")]
    ClassifierFailed {
        stage: Stage,
        image_id: String,
        reason: String,
    },

    #[error("classifier produced malformed output for all {count} quality-approved images")]
    AllOutputsMalformed { count: usize },

    #[error("classifier task aborted: {reason}")]
    Aborted { reason: String },

    #[error("no classifier attached to this runtime")]
    ClassifierUnavailable,
}

impl VeraMateErrorCode for InferenceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyBatch | Self::TooManyImages { .. } => error_code::INVALID_BATCH,
            Self::Timeout { .. } => error_code::INFERENCE_TIMEOUT,
            Self::AllOutputsMalformed { .. } => error_code::MALFORMED_VECTOR,
            Self::ClassifierFailed { .. } | Self::Aborted { .. } | Self::ClassifierUnavailable => {
                error_code::INFERENCE_FAILED
            }
        }
    }
}
