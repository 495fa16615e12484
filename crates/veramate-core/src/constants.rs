/// VeraMate core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Class id used for the healthy outcome in every fused distribution.
pub const HEALTHY_CLASS_ID: &str = "healthy";

/// Class id carrying the unhealthy mass of images whose Stage B run was bypassed.
/// It names no disease, so retrieval for it always resolves to the safe fallback.
pub const UNATTRIBUTED_CLASS_ID: &str = "unhealthy_unspecified";

/// Stage A is always binary: healthy vs unhealthy.
pub const STAGE_A_CLASS_COUNT: usize = 2;

/// Stage B disease labels in model output order.
pub const DEFAULT_DISEASE_LABELS: [&str; 5] =
    ["aloe_rot", "aloe_rust", "anthracnose", "leaf_spot", "sunburn"];

/// Tolerance for "sums to one" checks on probability vectors.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Error code carried by every safe fallback payload.
pub const CURATED_KNOWLEDGE_NOT_AVAILABLE: &str = "CURATED_KNOWLEDGE_NOT_AVAILABLE";

/// Knowledge safety minimums.
pub const MIN_SAFETY_WARNINGS: usize = 3;
pub const MIN_EXPERT_TRIGGERS: usize = 3;
pub const MIN_CITATIONS: usize = 2;
pub const MIN_TREATMENT_STEPS: usize = 3;
pub const MIN_STEP_DESCRIPTION_CHARS: usize = 50;

/// Earliest citation year accepted as plausible.
pub const MIN_CITATION_YEAR: i32 = 1900;

/// Date format for `last_updated` in knowledge files.
pub const KNOWLEDGE_DATE_FORMAT: &str = "%Y-%m-%d";
