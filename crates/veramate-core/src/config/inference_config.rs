use serde::{Deserialize, Serialize};

use super::defaults;

/// Bounds on a single diagnosis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Timeout applied to each external classifier call (milliseconds).
    pub timeout_ms: u64,
    /// Maximum number of images accepted per request.
    pub max_images: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            timeout_ms: defaults::DEFAULT_INFERENCE_TIMEOUT_MS,
            max_images: defaults::DEFAULT_MAX_IMAGES,
        }
    }
}
