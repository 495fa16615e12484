use serde::{Deserialize, Serialize};

use super::defaults;

/// Confidence tier thresholds. Both bounds are inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Top probability at or above this is HIGH.
    pub high_threshold: f64,
    /// Top probability at or above this (and below `high_threshold`) is MEDIUM.
    pub medium_threshold: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            high_threshold: defaults::DEFAULT_HIGH_THRESHOLD,
            medium_threshold: defaults::DEFAULT_MEDIUM_THRESHOLD,
        }
    }
}
