use serde::{Deserialize, Serialize};

/// An image's score vectors after temperature scaling.
/// Every present vector sums to 1 within `PROBABILITY_TOLERANCE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibratedSample {
    pub image_id: String,
    pub stage_a: Vec<f64>,
    pub stage_b: Option<Vec<f64>>,
}

impl CalibratedSample {
    /// Calibrated Stage A probability of the healthy class.
    pub fn healthy_probability(&self, healthy_index: usize) -> f64 {
        self.stage_a.get(healthy_index).copied().unwrap_or(0.0)
    }
}
