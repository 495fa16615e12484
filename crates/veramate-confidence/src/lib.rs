//! # veramate-confidence
//!
//! Maps an aggregated prediction (or the zero-valid-images condition) to a
//! `DiagnosisDecision`: HIGH / MEDIUM / LOW, the next step, and retake guidance.

pub mod retake;
pub mod router;

pub use retake::build_retake_message;
pub use router::ConfidenceRouter;
