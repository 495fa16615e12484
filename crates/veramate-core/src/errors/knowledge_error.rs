//! Knowledge access errors outside of content validation.

use super::error_code::{self, VeraMateErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("knowledge I/O error at {path}: {message}")]
    Io { path: String, message: String },

    #[error("unknown guidance mode '{label}'")]
    UnknownMode { label: String },
}

impl VeraMateErrorCode for KnowledgeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::KNOWLEDGE_IO_ERROR,
            Self::UnknownMode { .. } => error_code::UNKNOWN_MODE,
        }
    }
}
