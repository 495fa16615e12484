//! Live classification: Quality Gate, then Stage A, then Stage B only when needed.
//!
//! Every classifier call runs on the blocking pool under the configured
//! timeout. A timeout or classifier failure fails the whole request.

use std::sync::Arc;
use std::time::Duration;

use tracing::Instrument;
use veramate_core::errors::InferenceError;
use veramate_core::models::{ImageInput, ImageSample, RawScores, Stage};
use veramate_core::traits::{Classifier, QualityGate};
use veramate_fusion::FusionEngine;

#[derive(Clone)]
pub struct ClassificationPipeline {
    gate: Arc<dyn QualityGate>,
    classifier: Arc<dyn Classifier>,
    timeout: Duration,
}

impl std::fmt::Debug for ClassificationPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassificationPipeline")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ClassificationPipeline {
    pub fn new(
        gate: Arc<dyn QualityGate>,
        classifier: Arc<dyn Classifier>,
        timeout: Duration,
    ) -> Self {
        Self {
            gate,
            classifier,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Classify every image, in order. Images are processed one at a time.
    pub async fn classify_batch(
        &self,
        images: &[ImageInput],
        fusion: &FusionEngine,
    ) -> Result<Vec<ImageSample>, InferenceError> {
        let mut samples = Vec::with_capacity(images.len());
        for image in images {
            samples.push(self.classify_image(image, fusion).await?);
        }
        Ok(samples)
    }

    async fn classify_image(
        &self,
        image: &ImageInput,
        fusion: &FusionEngine,
    ) -> Result<ImageSample, InferenceError> {
        let verdict = self.gate.check_image(&image.bytes);
        if !verdict.valid {
            tracing::info!(image_id = %image.id, reason = ?verdict.reason, "quality gate rejected image");
            return Ok(ImageSample::from_verdict(image.id.clone(), verdict));
        }

        let stage_a = self.call(image, Stage::A).await?;
        let sample = ImageSample::new(image.id.clone(), stage_a.clone()).with_quality(verdict);

        match fusion.needs_stage_b(&stage_a) {
            Ok(true) => {
                let stage_b = self.call(image, Stage::B).await?;
                Ok(sample.with_stage_b(stage_b))
            }
            Ok(false) => {
                tracing::debug!(image_id = %image.id, "stage B bypassed");
                Ok(sample)
            }
            // Screening will exclude this image; no point running Stage B on it.
            Err(e) => {
                tracing::debug!(image_id = %image.id, error = %e, "stage A output unusable, skipping stage B");
                Ok(sample)
            }
        }
    }

    async fn call(&self, image: &ImageInput, stage: Stage) -> Result<RawScores, InferenceError> {
        let classifier = Arc::clone(&self.classifier);
        let bytes = Arc::clone(&image.bytes);
        let task = tokio::task::spawn_blocking(move || classifier.classify(&bytes, stage));

        let result = tokio::time::timeout(self.timeout, task)
            .instrument(tracing::debug_span!("veramate.classify", image_id = %image.id, %stage))
            .await;

        match result {
            Err(_) => {
                tracing::warn!(image_id = %image.id, %stage, timeout_ms = self.timeout.as_millis() as u64, "classifier timed out");
                Err(InferenceError::Timeout {
                    stage,
                    image_id: image.id.clone(),
                    timeout_ms: self.timeout.as_millis() as u64,
                })
            }
            Ok(Err(join_error)) => Err(InferenceError::Aborted {
                reason: join_error.to_string(),
            }),
            Ok(Ok(result)) => result,
        }
    }
}
