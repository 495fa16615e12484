//! Seams to the external collaborators of the diagnosis core.

pub mod classifier;
pub mod quality_gate;

pub use classifier::Classifier;
pub use quality_gate::{AcceptAllGate, QualityGate};
