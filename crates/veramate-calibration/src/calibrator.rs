//! Both stages' temperatures, loaded once at startup.

use serde::Serialize;
use veramate_core::config::VeraMateConfig;
use veramate_core::constants::STAGE_A_CLASS_COUNT;
use veramate_core::errors::CalibrationError;
use veramate_core::models::{RawScores, Stage};

use crate::scaler::TemperatureScaler;

/// Per-stage calibration state. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Calibrator {
    stage_a: TemperatureScaler,
    stage_b: TemperatureScaler,
    disease_count: usize,
}

impl Calibrator {
    /// Load both stages' artifacts from the configured paths.
    /// Never fails: an unusable artifact leaves that stage unscaled.
    pub fn load(config: &VeraMateConfig) -> Self {
        Self {
            stage_a: TemperatureScaler::from_artifact(&config.calibration.stage_a_artifact, Stage::A),
            stage_b: TemperatureScaler::from_artifact(&config.calibration.stage_b_artifact, Stage::B),
            disease_count: config.fusion.disease_labels.len(),
        }
    }

    /// Build from explicit scalers.
    pub fn new(stage_a: TemperatureScaler, stage_b: TemperatureScaler, disease_count: usize) -> Self {
        Self {
            stage_a,
            stage_b,
            disease_count,
        }
    }

    /// No scaling on either stage.
    pub fn identity(disease_count: usize) -> Self {
        Self::new(
            TemperatureScaler::identity(),
            TemperatureScaler::identity(),
            disease_count,
        )
    }

    pub fn scaler(&self, stage: Stage) -> &TemperatureScaler {
        match stage {
            Stage::A => &self.stage_a,
            Stage::B => &self.stage_b,
        }
    }

    /// Number of classes the stage's model emits.
    pub fn class_count(&self, stage: Stage) -> usize {
        match stage {
            Stage::A => STAGE_A_CLASS_COUNT,
            Stage::B => self.disease_count,
        }
    }

    /// Calibrate one stage's raw output.
    pub fn calibrate(&self, stage: Stage, scores: &RawScores) -> Result<Vec<f64>, CalibrationError> {
        self.scaler(stage)
            .apply(stage, scores, self.class_count(stage))
    }

    /// Reporting view of the loaded temperatures.
    pub fn summary(&self) -> CalibrationSummary {
        CalibrationSummary {
            stages: Stage::ALL
                .iter()
                .map(|&stage| {
                    let scaler = self.scaler(stage);
                    StageCalibration {
                        stage,
                        temperature: scaler.temperature(),
                        source: scaler.source().to_string(),
                        is_calibrated: scaler.is_scaling(),
                    }
                })
                .collect(),
        }
    }
}

/// Calibration block of the model info report.
#[derive(Debug, Clone, Serialize)]
pub struct CalibrationSummary {
    pub stages: Vec<StageCalibration>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StageCalibration {
    pub stage: Stage,
    pub temperature: f64,
    pub source: String,
    pub is_calibrated: bool,
}
