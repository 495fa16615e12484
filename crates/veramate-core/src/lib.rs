//! # veramate-core
//!
//! Foundation crate for the VeraMate diagnosis core.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VeraMateConfig;
pub use errors::{VeraMateError, VeraMateResult};
pub use models::{
    AggregatedPrediction, CalibratedSample, ConfidenceStatus, DiagnosisDecision, GuidanceMode,
    ImageSample, KnowledgeEntry, NextStep, RawScores, SafeFallbackResponse, Stage,
    TreatmentGuidance, ValidationReport,
};
