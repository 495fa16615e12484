//! # veramate-calibration
//!
//! Temperature scaling for Stage A and Stage B classifier outputs.
//!
//! - Logits: `softmax(logits / T)`
//! - Probabilities: `p^(1/T)` renormalized (computed in log space)
//!
//! Both preserve the arg-max class. A missing or unusable calibration
//! artifact degrades to `T = 1` with a warning; it never fails a request.

pub mod artifact;
pub mod calibrator;
pub mod scaler;

pub use artifact::CalibrationArtifact;
pub use calibrator::{CalibrationSummary, Calibrator, StageCalibration};
pub use scaler::{TemperatureScaler, TemperatureSource};
