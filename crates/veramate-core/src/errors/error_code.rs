//! Stable error codes handed to the serving layer.

/// Every error enum implements this to expose a structured code string.
pub trait VeraMateErrorCode {
    /// Returns the error code string (e.g., "INFERENCE_TIMEOUT").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CALIBRATION_ERROR: &str = "CALIBRATION_ERROR";
pub const MALFORMED_VECTOR: &str = "MALFORMED_VECTOR";
pub const INVALID_BATCH: &str = "INVALID_BATCH";
pub const INFERENCE_TIMEOUT: &str = "INFERENCE_TIMEOUT";
pub const INFERENCE_FAILED: &str = "INFERENCE_FAILED";
pub const KNOWLEDGE_VALIDATION_FAILED: &str = "KNOWLEDGE_VALIDATION_FAILED";
pub const KNOWLEDGE_IO_ERROR: &str = "KNOWLEDGE_IO_ERROR";
pub const UNKNOWN_MODE: &str = "UNKNOWN_MODE";
