//! Error handling for VeraMate.
//! One error enum per subsystem, `thiserror` only.

pub mod calibration_error;
pub mod config_error;
pub mod error_code;
pub mod inference_error;
pub mod knowledge_error;
pub mod validation_error;
pub mod veramate_error;

pub use calibration_error::CalibrationError;
pub use config_error::ConfigError;
pub use error_code::VeraMateErrorCode;
pub use inference_error::InferenceError;
pub use knowledge_error::KnowledgeError;
pub use validation_error::ValidationError;
pub use veramate_error::{VeraMateError, VeraMateResult};
