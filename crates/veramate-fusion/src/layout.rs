//! Class order of every fused vector.

use veramate_core::config::FusionConfig;
use veramate_core::constants::{HEALTHY_CLASS_ID, UNATTRIBUTED_CLASS_ID};

/// `[healthy, disease labels..., unhealthy_unspecified]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassLayout {
    class_ids: Vec<String>,
}

impl ClassLayout {
    pub fn from_config(config: &FusionConfig) -> Self {
        let mut class_ids = Vec::with_capacity(config.disease_labels.len() + 2);
        class_ids.push(HEALTHY_CLASS_ID.to_string());
        class_ids.extend(config.disease_labels.iter().cloned());
        class_ids.push(UNATTRIBUTED_CLASS_ID.to_string());
        Self { class_ids }
    }

    pub fn class_ids(&self) -> &[String] {
        &self.class_ids
    }

    pub fn len(&self) -> usize {
        self.class_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.class_ids.is_empty()
    }

    pub fn disease_count(&self) -> usize {
        self.class_ids.len() - 2
    }

    pub fn healthy_slot(&self) -> usize {
        0
    }

    pub fn unattributed_slot(&self) -> usize {
        self.class_ids.len() - 1
    }
}
