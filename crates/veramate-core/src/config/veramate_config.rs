//! Top-level VeraMate configuration with 3-layer resolution.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{
    CalibrationConfig, ConfidenceConfig, FusionConfig, InferenceConfig, KnowledgeConfig,
    ObservabilityConfig,
};
use crate::constants::{HEALTHY_CLASS_ID, UNATTRIBUTED_CLASS_ID};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`VERAMATE_*`)
/// 2. Config file (`veramate.toml` or an explicit path)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VeraMateConfig {
    pub calibration: CalibrationConfig,
    pub fusion: FusionConfig,
    pub confidence: ConfidenceConfig,
    pub knowledge: KnowledgeConfig,
    pub inference: InferenceConfig,
    pub observability: ObservabilityConfig,
}

impl VeraMateConfig {
    /// Load configuration with 3-layer resolution.
    ///
    /// A `path` that was given but does not exist is an error; with no path the
    /// compiled defaults are the base layer.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Parse a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `VERAMATE_*` environment variables.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    /// Values that fail to parse are ignored and the previous layer wins.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("VERAMATE_KNOWLEDGE_ROOT") {
            self.knowledge.root = PathBuf::from(val);
        }
        if let Some(val) = lookup("VERAMATE_STAGE_A_CALIBRATION") {
            self.calibration.stage_a_artifact = PathBuf::from(val);
        }
        if let Some(val) = lookup("VERAMATE_STAGE_B_CALIBRATION") {
            self.calibration.stage_b_artifact = PathBuf::from(val);
        }
        if let Some(val) = lookup("VERAMATE_STAGE_B_BYPASS_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                self.fusion.stage_b_bypass_threshold = Some(v);
            }
        }
        if let Some(val) = lookup("VERAMATE_INFERENCE_TIMEOUT_MS") {
            if let Ok(v) = val.parse::<u64>() {
                self.inference.timeout_ms = v;
            }
        }
        if let Some(val) = lookup("VERAMATE_MAX_IMAGES") {
            if let Ok(v) = val.parse::<usize>() {
                self.inference.max_images = v;
            }
        }
        if let Some(val) = lookup("VERAMATE_LOG_LEVEL") {
            self.observability.log_level = val;
        }
        if let Some(val) = lookup("VERAMATE_LOG_JSON") {
            if let Ok(v) = val.parse() {
                self.observability.json = v;
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let confidence = &self.confidence;
        for (field, value) in [
            ("confidence.high_threshold", confidence.high_threshold),
            ("confidence.medium_threshold", confidence.medium_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if confidence.medium_threshold >= confidence.high_threshold {
            return Err(ConfigError::ValidationFailed {
                field: "confidence.medium_threshold".to_string(),
                message: "must be lower than confidence.high_threshold".to_string(),
            });
        }

        if let Some(threshold) = self.fusion.stage_b_bypass_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::ValidationFailed {
                    field: "fusion.stage_b_bypass_threshold".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if self.fusion.healthy_index > 1 {
            return Err(ConfigError::ValidationFailed {
                field: "fusion.healthy_index".to_string(),
                message: "stage A is binary, index must be 0 or 1".to_string(),
            });
        }
        if self.fusion.disease_labels.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "fusion.disease_labels".to_string(),
                message: "at least one disease label is required".to_string(),
            });
        }
        let mut seen = HashSet::new();
        for label in &self.fusion.disease_labels {
            if label.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "fusion.disease_labels".to_string(),
                    message: "labels must not be blank".to_string(),
                });
            }
            if label == HEALTHY_CLASS_ID || label == UNATTRIBUTED_CLASS_ID {
                return Err(ConfigError::InvalidValue {
                    field: "fusion.disease_labels".to_string(),
                    message: format!("'{label}' is a reserved class id"),
                });
            }
            if !seen.insert(label.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "fusion.disease_labels".to_string(),
                    message: format!("duplicate label '{label}'"),
                });
            }
        }

        if self.inference.timeout_ms == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "inference.timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.inference.max_images == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "inference.max_images".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        for entry in &self.knowledge.required_categories {
            let valid = entry
                .split_once('/')
                .is_some_and(|(mode, category)| !mode.is_empty() && !category.is_empty());
            if !valid {
                return Err(ConfigError::InvalidValue {
                    field: "knowledge.required_categories".to_string(),
                    message: format!("'{entry}' is not of the form <mode>/<category>"),
                });
            }
        }

        Ok(())
    }
}
