//! Sample screening: Quality Gate rejections and malformed vectors never reach aggregation.

use veramate_calibration::Calibrator;
use veramate_core::config::FusionConfig;
use veramate_core::errors::CalibrationError;
use veramate_core::models::{BatchSummary, CalibratedSample, ImageSample, MalformedImage, Stage};

/// Calibrated survivors of a batch plus an account of everything dropped.
#[derive(Debug, Clone)]
pub struct ScreenedBatch {
    pub calibrated: Vec<CalibratedSample>,
    pub summary: BatchSummary,
}

/// Screen and calibrate every sample of a batch, in input order.
pub fn screen_batch(
    samples: &[ImageSample],
    calibrator: &Calibrator,
    config: &FusionConfig,
) -> ScreenedBatch {
    let mut calibrated = Vec::with_capacity(samples.len());
    let mut summary = BatchSummary {
        total_images: samples.len(),
        ..BatchSummary::default()
    };

    for sample in samples {
        if !sample.is_valid() {
            summary.rejected_images += 1;
            if let Some(reason) = &sample.quality().reason {
                summary.rejection_reasons.insert(reason.clone());
            }
            tracing::debug!(image_id = %sample.id(), reason = ?sample.quality().reason, "image rejected by quality gate");
            continue;
        }

        match calibrate_sample(sample, calibrator, config) {
            Ok(c) => calibrated.push(c),
            Err(error) => {
                tracing::warn!(image_id = %sample.id(), %error, "excluding malformed classifier output");
                summary.malformed.push(MalformedImage {
                    image_id: sample.id().to_string(),
                    error,
                });
            }
        }
    }

    summary.valid_images = calibrated.len();
    ScreenedBatch { calibrated, summary }
}

/// Calibrate one quality-approved sample.
///
/// Stage B output is dropped when the calibrated healthy probability meets
/// the bypass threshold.
pub fn calibrate_sample(
    sample: &ImageSample,
    calibrator: &Calibrator,
    config: &FusionConfig,
) -> Result<CalibratedSample, CalibrationError> {
    let raw_a = sample.stage_a().ok_or(CalibrationError::WrongLength {
        stage: Stage::A,
        expected: calibrator.class_count(Stage::A),
        actual: 0,
    })?;
    let stage_a = calibrator.calibrate(Stage::A, raw_a)?;

    let healthy = stage_a.get(config.healthy_index).copied().unwrap_or(0.0);
    let stage_b = if config.bypasses_stage_b(healthy) {
        if sample.stage_b().is_some() {
            tracing::debug!(image_id = %sample.id(), healthy, "stage B output ignored, bypass threshold met");
        }
        None
    } else {
        sample
            .stage_b()
            .map(|raw_b| calibrator.calibrate(Stage::B, raw_b))
            .transpose()?
    };

    Ok(CalibratedSample {
        image_id: sample.id().to_string(),
        stage_a,
        stage_b,
    })
}
