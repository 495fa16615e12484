use std::fmt;

use serde::{Deserialize, Serialize};

/// Why the external Quality Gate rejected an image.
///
/// Ordering is the order retake guidance is listed in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    LowResolution,
    Blurry,
    TooDark,
    TooBright,
    Other(String),
}

impl RejectionReason {
    /// Map a free-form gate label onto a known reason.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
            "blurry" | "blur" | "out_of_focus" => Self::Blurry,
            "too_dark" | "dark" | "underexposed" | "poor_lighting" => Self::TooDark,
            "too_bright" | "bright" | "overexposed" | "exposure" => Self::TooBright,
            "low_resolution" | "resolution" | "too_small" => Self::LowResolution,
            _ => Self::Other(label.trim().to_string()),
        }
    }

    /// User-facing guidance for this reason.
    pub fn user_message(&self) -> String {
        match self {
            Self::Blurry => "Image is too blurry. Please ensure the camera is focused and hold steady while taking the photo.".to_string(),
            Self::TooDark => "Image is too dark. Please take the photo in better lighting conditions.".to_string(),
            Self::TooBright => "Image is overexposed. Please reduce lighting or move away from direct light sources.".to_string(),
            Self::LowResolution => "Image resolution is too low. Please take a clearer photo from a closer distance.".to_string(),
            Self::Other(label) => format!("An image was rejected by the quality check ({label}). Please retake it."),
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowResolution => f.write_str("low_resolution"),
            Self::Blurry => f.write_str("blurry"),
            Self::TooDark => f.write_str("too_dark"),
            Self::TooBright => f.write_str("too_bright"),
            Self::Other(label) => f.write_str(label),
        }
    }
}

/// Quality Gate output for one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityVerdict {
    pub valid: bool,
    pub reason: Option<RejectionReason>,
}

impl QualityVerdict {
    pub fn accepted() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    pub fn rejected(reason: RejectionReason) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }

    /// Build from the gate's raw `{valid, reason}` shape.
    pub fn from_gate(valid: bool, reason: Option<&str>) -> Self {
        Self {
            valid,
            reason: reason
                .filter(|r| !r.trim().is_empty())
                .map(RejectionReason::from_label),
        }
    }
}

impl Default for QualityVerdict {
    fn default() -> Self {
        Self::accepted()
    }
}
