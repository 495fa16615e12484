//! The process-wide runtime handle.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;
use veramate_calibration::CalibrationSummary;
use veramate_core::config::VeraMateConfig;
use veramate_core::errors::{InferenceError, VeraMateResult};
use veramate_core::models::{GuidanceMode, ImageInput, ImageSample, TreatmentGuidance};
use veramate_core::traits::{Classifier, QualityGate};
use veramate_knowledge::{KnowledgeBase, TreatmentRouter};

use crate::engine::DiagnosisEngine;
use crate::outcome::DiagnosisOutcome;
use crate::pipeline::ClassificationPipeline;

/// Immutable after [`bootstrap`](Self::bootstrap); every method takes `&self`
/// and may be called from any number of threads.
#[derive(Debug, Clone)]
pub struct VeraMate {
    config: Arc<VeraMateConfig>,
    engine: DiagnosisEngine,
    treatments: TreatmentRouter,
    pipeline: Option<ClassificationPipeline>,
}

impl VeraMate {
    /// Validate config and knowledge, load calibration, and build the runtime.
    ///
    /// Fails closed: any knowledge violation returns an error and nothing is served.
    pub fn bootstrap(config: VeraMateConfig) -> VeraMateResult<Self> {
        config.validate()?;

        let knowledge = KnowledgeBase::load(&config.knowledge)?;
        let engine = DiagnosisEngine::from_config(&config);

        tracing::info!(
            version = veramate_core::constants::VERSION,
            knowledge_entries = knowledge.len(),
            "veramate ready"
        );

        Ok(Self {
            config: Arc::new(config),
            engine,
            treatments: TreatmentRouter::new(Arc::new(knowledge)),
            pipeline: None,
        })
    }

    /// Attach the external Quality Gate and classifier for [`diagnose_images`](Self::diagnose_images).
    pub fn with_classifier(
        mut self,
        gate: Arc<dyn QualityGate>,
        classifier: Arc<dyn Classifier>,
    ) -> Self {
        let timeout = Duration::from_millis(self.config.inference.timeout_ms);
        self.pipeline = Some(ClassificationPipeline::new(gate, classifier, timeout));
        self
    }

    pub fn config(&self) -> &VeraMateConfig {
        &self.config
    }

    pub fn engine(&self) -> &DiagnosisEngine {
        &self.engine
    }

    /// Diagnose samples that were already classified upstream.
    pub fn diagnose(&self, samples: &[ImageSample]) -> Result<DiagnosisOutcome, InferenceError> {
        self.engine.diagnose(samples)
    }

    /// Run the full pipeline on raw images: gate, classifiers, then diagnosis.
    pub async fn diagnose_images(
        &self,
        images: &[ImageInput],
    ) -> Result<DiagnosisOutcome, InferenceError> {
        let pipeline = self
            .pipeline
            .as_ref()
            .ok_or(InferenceError::ClassifierUnavailable)?;
        self.engine.check_batch_size(images.len())?;

        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, images = images.len(), "classifying batch");

        let samples = pipeline.classify_batch(images, self.engine.fusion()).await?;
        self.engine.diagnose_with_id(request_id, &samples)
    }

    /// Curated guidance for a disease, or the safe fallback.
    pub fn retrieve_treatment(&self, disease_id: &str, mode: GuidanceMode) -> TreatmentGuidance {
        self.treatments.retrieve(disease_id, mode)
    }

    /// As [`retrieve_treatment`](Self::retrieve_treatment), with a mode label from the caller.
    pub fn retrieve_treatment_by_label(&self, disease_id: &str, mode_label: &str) -> TreatmentGuidance {
        self.treatments.retrieve_by_label(disease_id, mode_label)
    }

    /// Validated categories per guidance mode.
    pub fn available_treatments(&self) -> BTreeMap<GuidanceMode, Vec<String>> {
        self.treatments.knowledge().available()
    }

    pub fn calibration_summary(&self) -> CalibrationSummary {
        self.engine.fusion().calibrator().summary()
    }
}
