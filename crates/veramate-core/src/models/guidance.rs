use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::KnowledgeEntry;
use crate::constants::CURATED_KNOWLEDGE_NOT_AVAILABLE;
use crate::errors::KnowledgeError;

/// Which curated knowledge tree guidance is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuidanceMode {
    Scientific,
    Ayurvedic,
}

impl GuidanceMode {
    pub const ALL: [GuidanceMode; 2] = [GuidanceMode::Scientific, GuidanceMode::Ayurvedic];

    /// Directory name under the knowledge root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Scientific => "scientific",
            Self::Ayurvedic => "ayurvedic",
        }
    }

    /// Wire label, as accepted from callers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Scientific => "SCIENTIFIC",
            Self::Ayurvedic => "AYURVEDIC",
        }
    }
}

impl fmt::Display for GuidanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GuidanceMode {
    type Err = KnowledgeError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scientific" => Ok(Self::Scientific),
            "ayurvedic" => Ok(Self::Ayurvedic),
            _ => Err(KnowledgeError::UnknownMode {
                label: s.to_string(),
            }),
        }
    }
}

/// Fixed-shape payload returned when no curated guidance exists.
///
/// Content depends on `(disease_id, mode)` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeFallbackResponse {
    pub error_code: String,
    pub disease_id: String,
    pub mode: String,
    pub message: String,
    pub recommendation: String,
    pub rationale: String,
    pub actionable_steps: Vec<String>,
    pub escalation_resources: Vec<String>,
}

const FALLBACK_RECOMMENDATION: &str = "Please consult with a plant disease specialist or horticulturist for accurate diagnosis and treatment recommendations.";

const FALLBACK_RATIONALE: &str = "To protect you and your plants, we only provide treatment advice that has been reviewed by experts and backed by scientific research or validated traditional knowledge.";

const FALLBACK_ACTIONABLE_STEPS: [&str; 5] = [
    "Take clear, well-lit photos of the affected plant",
    "Note any recent changes in care, watering, or environment",
    "Consult with a local nursery or agricultural extension office",
    "Search for peer-reviewed literature on the specific disease",
    "Consider isolating the affected plant to prevent spread",
];

const FALLBACK_ESCALATION_RESOURCES: [&str; 4] = [
    "Local agricultural extension offices",
    "Certified plant disease specialists",
    "University horticulture departments",
    "Professional plant pathology labs",
];

impl SafeFallbackResponse {
    /// Substitute `disease_id` and `mode` into the fixed template.
    pub fn new(disease_id: &str, mode: &str) -> Self {
        Self {
            error_code: CURATED_KNOWLEDGE_NOT_AVAILABLE.to_string(),
            disease_id: disease_id.to_string(),
            mode: mode.to_string(),
            message: format!(
                "We do not have expert-reviewed treatment guidance for '{disease_id}' in {mode} mode."
            ),
            recommendation: FALLBACK_RECOMMENDATION.to_string(),
            rationale: FALLBACK_RATIONALE.to_string(),
            actionable_steps: FALLBACK_ACTIONABLE_STEPS.iter().map(|s| s.to_string()).collect(),
            escalation_resources: FALLBACK_ESCALATION_RESOURCES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Result of a treatment lookup: curated content or the safe fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum TreatmentGuidance {
    Curated(Arc<KnowledgeEntry>),
    Fallback(SafeFallbackResponse),
}

impl TreatmentGuidance {
    pub fn is_curated(&self) -> bool {
        matches!(self, Self::Curated(_))
    }

    pub fn entry(&self) -> Option<&KnowledgeEntry> {
        match self {
            Self::Curated(entry) => Some(&**entry),
            Self::Fallback(_) => None,
        }
    }

    pub fn fallback(&self) -> Option<&SafeFallbackResponse> {
        match self {
            Self::Curated(_) => None,
            Self::Fallback(fallback) => Some(fallback),
        }
    }
}
