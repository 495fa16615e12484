//! Screening, fusion and aggregation for one batch.

use veramate_calibration::Calibrator;
use veramate_core::config::{FusionConfig, VeraMateConfig};
use veramate_core::errors::CalibrationError;
use veramate_core::models::{
    AggregatedPrediction, AggregationOutcome, BatchSummary, ImageSample, RawScores, Stage,
};

use crate::aggregation::mean_distribution;
use crate::fuse::fuse;
use crate::layout::ClassLayout;
use crate::screening::screen_batch;

/// Aggregated distribution (if any image survived) plus the batch account.
#[derive(Debug, Clone)]
pub struct FusionOutput {
    pub outcome: AggregationOutcome,
    pub summary: BatchSummary,
}

/// Stateless after construction; safe to share across requests.
#[derive(Debug, Clone)]
pub struct FusionEngine {
    calibrator: Calibrator,
    config: FusionConfig,
    layout: ClassLayout,
}

impl FusionEngine {
    pub fn new(calibrator: Calibrator, config: FusionConfig) -> Self {
        let layout = ClassLayout::from_config(&config);
        Self {
            calibrator,
            config,
            layout,
        }
    }

    /// Load calibration artifacts and build the engine from the full config.
    pub fn from_config(config: &VeraMateConfig) -> Self {
        Self::new(Calibrator::load(config), config.fusion.clone())
    }

    pub fn calibrator(&self) -> &Calibrator {
        &self.calibrator
    }

    pub fn config(&self) -> &FusionConfig {
        &self.config
    }

    pub fn layout(&self) -> &ClassLayout {
        &self.layout
    }

    /// Whether Stage B should be run for an image with this Stage A output.
    pub fn needs_stage_b(&self, stage_a: &RawScores) -> Result<bool, CalibrationError> {
        let calibrated = self.calibrator.calibrate(Stage::A, stage_a)?;
        let healthy = calibrated
            .get(self.config.healthy_index)
            .copied()
            .unwrap_or(0.0);
        Ok(!self.config.bypasses_stage_b(healthy))
    }

    /// Screen, fuse and aggregate a batch.
    pub fn process(&self, samples: &[ImageSample]) -> FusionOutput {
        let screened = screen_batch(samples, &self.calibrator, &self.config);

        let fused: Vec<Vec<f64>> = screened
            .calibrated
            .iter()
            .map(|sample| fuse(sample, self.config.healthy_index, &self.layout))
            .collect();

        let outcome = match mean_distribution(&fused) {
            Some(mean) => AggregationOutcome::Aggregated(AggregatedPrediction::new(
                self.layout.class_ids().iter().cloned(),
                &mean,
                fused.len(),
            )),
            None => AggregationOutcome::NoValidImages,
        };

        tracing::debug!(
            total = screened.summary.total_images,
            valid = screened.summary.valid_images,
            rejected = screened.summary.rejected_images,
            malformed = screened.summary.malformed.len(),
            "batch aggregated"
        );

        FusionOutput {
            outcome,
            summary: screened.summary,
        }
    }
}
