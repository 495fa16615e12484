//! # veramate-fusion
//!
//! Turns per-image classifier outputs into one fused disease distribution.
//!
//! - **Screening**: drops Quality Gate rejections and malformed vectors, calibrates the rest.
//! - **Fusion**: `P(healthy) = pA_healthy`, `P(disease_i) = (1 - pA_healthy) * pB_i`.
//! - **Aggregation**: unweighted mean across valid images, renormalized.

pub mod aggregation;
pub mod engine;
pub mod fuse;
pub mod layout;
pub mod screening;

pub use aggregation::mean_distribution;
pub use engine::{FusionEngine, FusionOutput};
pub use fuse::fuse;
pub use layout::ClassLayout;
pub use screening::{screen_batch, ScreenedBatch};
