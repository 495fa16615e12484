//! # veramate-diagnosis
//!
//! Wires the decision core together:
//!
//! image batch → Quality Gate → Stage A/B → Calibrator → Fusion & Aggregation
//! → Confidence Router → (SHOW_TREATMENT) Treatment Retrieval Router.
//!
//! [`VeraMate`] is the process-wide handle. It refuses to start unless the
//! curated knowledge base validates cleanly.

pub mod engine;
pub mod outcome;
pub mod pipeline;
pub mod runtime;
pub mod tracing_setup;

pub use engine::DiagnosisEngine;
pub use outcome::DiagnosisOutcome;
pub use pipeline::ClassificationPipeline;
pub use runtime::VeraMate;
