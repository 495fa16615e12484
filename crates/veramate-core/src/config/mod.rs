//! Configuration system for VeraMate.
//! TOML-based, 3-layer resolution: env > file > defaults.
//! Built once at startup and shared read-only afterwards.

pub mod calibration_config;
pub mod confidence_config;
pub mod defaults;
pub mod fusion_config;
pub mod inference_config;
pub mod knowledge_config;
pub mod observability_config;
pub mod veramate_config;

pub use calibration_config::CalibrationConfig;
pub use confidence_config::ConfidenceConfig;
pub use fusion_config::FusionConfig;
pub use inference_config::InferenceConfig;
pub use knowledge_config::KnowledgeConfig;
pub use observability_config::ObservabilityConfig;
pub use veramate_config::VeraMateConfig;
