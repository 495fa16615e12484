//! Maps an aggregated prediction to a decision. One transition per request, no retries.

use veramate_core::config::{ConfidenceConfig, VeraMateConfig};
use veramate_core::constants::UNATTRIBUTED_CLASS_ID;
use veramate_core::models::{
    AggregationOutcome, BatchSummary, ConfidenceStatus, DiagnosisDecision, NextStep,
};

use crate::retake::build_retake_message;

/// Routes aggregated predictions to a decision. Pure; thresholds fixed at construction.
#[derive(Debug, Clone)]
pub struct ConfidenceRouter {
    config: ConfidenceConfig,
    recommended_images: usize,
}

impl ConfidenceRouter {
    pub fn new(config: ConfidenceConfig, recommended_images: usize) -> Self {
        Self {
            config,
            recommended_images,
        }
    }

    pub fn from_config(config: &VeraMateConfig) -> Self {
        Self::new(config.confidence.clone(), config.inference.max_images)
    }

    /// Tier for a top probability. Lower bounds are inclusive.
    pub fn status_for(&self, probability: f64) -> ConfidenceStatus {
        if probability >= self.config.high_threshold {
            ConfidenceStatus::High
        } else if probability >= self.config.medium_threshold {
            ConfidenceStatus::Medium
        } else {
            ConfidenceStatus::Low
        }
    }

    /// Decide the next step for one batch.
    ///
    /// HIGH and MEDIUM show treatment, except when the top class is the
    /// unattributed unhealthy mass, which names no disease and routes to an expert.
    pub fn route(&self, outcome: &AggregationOutcome, summary: &BatchSummary) -> DiagnosisDecision {
        let Some(top) = outcome.prediction().and_then(|p| p.top()) else {
            tracing::info!(
                total = summary.total_images,
                rejected = summary.rejected_images,
                "no valid images, requesting retake"
            );
            return DiagnosisDecision {
                disease_id: None,
                probability: None,
                status: ConfidenceStatus::Low,
                next_step: NextStep::RetakePhotos,
                retake_message: Some(self.retake_message(summary)),
                valid_images: summary.valid_images,
                total_images: summary.total_images,
            };
        };

        let status = self.status_for(top.probability);
        let (next_step, retake_message) = match status {
            ConfidenceStatus::Low => (NextStep::RetakePhotos, Some(self.retake_message(summary))),
            _ if top.class_id == UNATTRIBUTED_CLASS_ID => (NextStep::ConsultExpert, None),
            _ => (NextStep::ShowTreatment, None),
        };

        tracing::info!(
            disease_id = %top.class_id,
            probability = top.probability,
            ?status,
            ?next_step,
            "diagnosis routed"
        );

        DiagnosisDecision {
            disease_id: Some(top.class_id.clone()),
            probability: Some(top.probability),
            status,
            next_step,
            retake_message,
            valid_images: summary.valid_images,
            total_images: summary.total_images,
        }
    }

    fn retake_message(&self, summary: &BatchSummary) -> String {
        build_retake_message(
            &summary.rejection_reasons,
            summary.total_images,
            self.recommended_images,
        )
    }
}
