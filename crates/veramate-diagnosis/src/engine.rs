//! Synchronous decision core over already-classified samples.

use uuid::Uuid;
use veramate_confidence::ConfidenceRouter;
use veramate_core::config::VeraMateConfig;
use veramate_core::errors::InferenceError;
use veramate_core::models::ImageSample;
use veramate_fusion::FusionEngine;

use crate::outcome::DiagnosisOutcome;

/// Stateless per request; share one instance across all requests.
#[derive(Debug, Clone)]
pub struct DiagnosisEngine {
    fusion: FusionEngine,
    router: ConfidenceRouter,
    max_images: usize,
}

impl DiagnosisEngine {
    pub fn new(fusion: FusionEngine, router: ConfidenceRouter, max_images: usize) -> Self {
        Self {
            fusion,
            router,
            max_images,
        }
    }

    /// Load calibration and build every stage from config.
    pub fn from_config(config: &VeraMateConfig) -> Self {
        Self::new(
            FusionEngine::from_config(config),
            ConfidenceRouter::from_config(config),
            config.inference.max_images,
        )
    }

    pub fn fusion(&self) -> &FusionEngine {
        &self.fusion
    }

    pub fn max_images(&self) -> usize {
        self.max_images
    }

    /// Reject empty and oversized batches before any work is done.
    pub fn check_batch_size(&self, count: usize) -> Result<(), InferenceError> {
        if count == 0 {
            return Err(InferenceError::EmptyBatch);
        }
        if count > self.max_images {
            return Err(InferenceError::TooManyImages {
                count,
                max: self.max_images,
            });
        }
        Ok(())
    }

    /// Diagnose a batch of classified samples.
    ///
    /// Fails only when the batch size is out of bounds or when every
    /// quality-approved image produced a malformed vector; otherwise malformed
    /// images are dropped and the rest are diagnosed.
    pub fn diagnose(&self, samples: &[ImageSample]) -> Result<DiagnosisOutcome, InferenceError> {
        self.diagnose_with_id(Uuid::new_v4(), samples)
    }

    pub(crate) fn diagnose_with_id(
        &self,
        request_id: Uuid,
        samples: &[ImageSample],
    ) -> Result<DiagnosisOutcome, InferenceError> {
        let _span =
            tracing::info_span!("veramate.diagnose", %request_id, images = samples.len()).entered();

        self.check_batch_size(samples.len())?;

        let output = self.fusion.process(samples);
        let summary = &output.summary;

        let approved = summary.approved_images();
        if approved > 0 && summary.malformed.len() == approved {
            tracing::warn!(count = approved, "every approved image produced malformed output");
            return Err(InferenceError::AllOutputsMalformed { count: approved });
        }

        let decision = self.router.route(&output.outcome, summary);

        Ok(DiagnosisOutcome {
            request_id,
            decision,
            prediction: output.outcome.into_prediction(),
        })
    }
}
