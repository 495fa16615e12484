use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{QualityVerdict, RejectionReason};

/// Raw classifier output for one stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum RawScores {
    /// Already-normalized class probabilities.
    Probabilities(Vec<f64>),
    /// Pre-softmax logits.
    Logits(Vec<f64>),
}

impl RawScores {
    pub fn values(&self) -> &[f64] {
        match self {
            Self::Probabilities(v) | Self::Logits(v) => v,
        }
    }

    pub fn len(&self) -> usize {
        self.values().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }
}

/// One classified image. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSample {
    id: String,
    stage_a: Option<RawScores>,
    stage_b: Option<RawScores>,
    quality: QualityVerdict,
}

impl ImageSample {
    /// A quality-approved image with its Stage A output.
    pub fn new(id: impl Into<String>, stage_a: RawScores) -> Self {
        Self {
            id: id.into(),
            stage_a: Some(stage_a),
            stage_b: None,
            quality: QualityVerdict::accepted(),
        }
    }

    /// An image the Quality Gate rejected before classification.
    pub fn rejected(id: impl Into<String>, reason: RejectionReason) -> Self {
        Self {
            id: id.into(),
            stage_a: None,
            stage_b: None,
            quality: QualityVerdict::rejected(reason),
        }
    }

    /// A sample carrying the gate's verdict as given, before any classification.
    pub fn from_verdict(id: impl Into<String>, quality: QualityVerdict) -> Self {
        Self {
            id: id.into(),
            stage_a: None,
            stage_b: None,
            quality,
        }
    }

    pub fn with_stage_b(mut self, stage_b: RawScores) -> Self {
        self.stage_b = Some(stage_b);
        self
    }

    pub fn with_quality(mut self, quality: QualityVerdict) -> Self {
        self.quality = quality;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn stage_a(&self) -> Option<&RawScores> {
        self.stage_a.as_ref()
    }

    pub fn stage_b(&self) -> Option<&RawScores> {
        self.stage_b.as_ref()
    }

    pub fn quality(&self) -> &QualityVerdict {
        &self.quality
    }

    pub fn is_valid(&self) -> bool {
        self.quality.valid
    }
}

/// Encoded image bytes handed to the Quality Gate and classifiers.
#[derive(Debug, Clone)]
pub struct ImageInput {
    pub id: String,
    pub bytes: Arc<[u8]>,
}

impl ImageInput {
    pub fn new(id: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            id: id.into(),
            bytes: bytes.into(),
        }
    }
}
