//! Compiled defaults for every config section.

pub const DEFAULT_STAGE_A_ARTIFACT: &str = "artifacts/stage_a/calibration.json";
pub const DEFAULT_STAGE_B_ARTIFACT: &str = "artifacts/stage_b/calibration.json";

pub const DEFAULT_HEALTHY_INDEX: usize = 0;

pub const DEFAULT_HIGH_THRESHOLD: f64 = 0.80;
pub const DEFAULT_MEDIUM_THRESHOLD: f64 = 0.60;

pub const DEFAULT_KNOWLEDGE_ROOT: &str = "data/knowledge";

pub const DEFAULT_INFERENCE_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_MAX_IMAGES: usize = 3;

pub const DEFAULT_LOG_LEVEL: &str = "info";
