//! Data model shared by every crate in the workspace.

pub mod batch;
pub mod calibrated_sample;
pub mod decision;
pub mod guidance;
pub mod image_sample;
pub mod knowledge_entry;
pub mod prediction;
pub mod quality;
pub mod stage;
pub mod validation_report;

pub use batch::{AggregationOutcome, BatchSummary, MalformedImage};
pub use calibrated_sample::CalibratedSample;
pub use decision::{ConfidenceStatus, DiagnosisDecision, NextStep};
pub use guidance::{GuidanceMode, SafeFallbackResponse, TreatmentGuidance};
pub use image_sample::{ImageInput, ImageSample, RawScores};
pub use knowledge_entry::{Citation, KnowledgeEntry, TreatmentStep};
pub use prediction::{AggregatedPrediction, ClassProbability};
pub use quality::{QualityVerdict, RejectionReason};
pub use stage::Stage;
pub use validation_report::{ValidationReport, Violation};
