//! Startup knowledge validation failure. Always fatal.

use super::error_code::{self, VeraMateErrorCode};
use crate::models::ValidationReport;

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("knowledge base rejected with {} violation(s)", report.len())]
    KnowledgeRejected { report: ValidationReport },
}

impl ValidationError {
    /// The full report behind the rejection.
    pub fn report(&self) -> &ValidationReport {
        match self {
            Self::KnowledgeRejected { report } => report,
        }
    }
}

impl VeraMateErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::KNOWLEDGE_VALIDATION_FAILED
    }
}
