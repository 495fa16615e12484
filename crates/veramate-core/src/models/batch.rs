use std::collections::BTreeSet;

use serde::Serialize;

use super::{AggregatedPrediction, RejectionReason};
use crate::errors::CalibrationError;

/// A quality-approved image whose classifier output could not be used.
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedImage {
    pub image_id: String,
    pub error: CalibrationError,
}

/// What happened to each image of a batch on its way into aggregation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub total_images: usize,
    /// Images averaged into the prediction.
    pub valid_images: usize,
    /// Distinct Quality Gate rejection reasons, in guidance order.
    pub rejection_reasons: BTreeSet<RejectionReason>,
    /// Images rejected by the Quality Gate.
    pub rejected_images: usize,
    pub malformed: Vec<MalformedImage>,
}

impl BatchSummary {
    /// Images that passed the Quality Gate, usable or not.
    pub fn approved_images(&self) -> usize {
        self.total_images - self.rejected_images
    }
}

/// Result of cross-image aggregation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "prediction", rename_all = "snake_case")]
pub enum AggregationOutcome {
    Aggregated(AggregatedPrediction),
    /// No image survived screening.
    NoValidImages,
}

impl AggregationOutcome {
    pub fn prediction(&self) -> Option<&AggregatedPrediction> {
        match self {
            Self::Aggregated(p) => Some(p),
            Self::NoValidImages => None,
        }
    }

    pub fn into_prediction(self) -> Option<AggregatedPrediction> {
        match self {
            Self::Aggregated(p) => Some(p),
            Self::NoValidImages => None,
        }
    }
}
