#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use veramate_core::config::VeraMateConfig;
use veramate_core::errors::InferenceError;
use veramate_core::models::{ImageSample, QualityVerdict, RawScores, Stage};
use veramate_core::traits::{Classifier, QualityGate};

/// Fixture knowledge, no calibration artifacts (T = 1), bypass at 0.85.
pub fn config() -> VeraMateConfig {
    let mut config = VeraMateConfig::default();
    config.knowledge.root = test_fixtures::knowledge_root();
    config.calibration.stage_a_artifact = PathBuf::from("no-such-dir/stage_a.json");
    config.calibration.stage_b_artifact = PathBuf::from("no-such-dir/stage_b.json");
    config.fusion.stage_b_bypass_threshold = Some(0.85);
    config
}

pub fn healthy(id: &str, p: f64) -> ImageSample {
    ImageSample::new(id, RawScores::Probabilities(vec![p, 1.0 - p]))
}

/// Stage B output dominated by leaf spot (label index 3).
pub fn leaf_spot_scores() -> RawScores {
    RawScores::Probabilities(vec![0.05, 0.05, 0.05, 0.8, 0.05])
}

/// Image bytes are `[healthy percent, brightness]`.
pub fn image_bytes(healthy_percent: u8, brightness: u8) -> Vec<u8> {
    vec![healthy_percent, brightness]
}

/// Stage A reads the healthy percentage from the first byte;
/// Stage B always answers leaf spot.
#[derive(Default)]
pub struct ByteClassifier {
    pub stage_a_calls: AtomicUsize,
    pub stage_b_calls: AtomicUsize,
}

impl Classifier for ByteClassifier {
    fn classify(&self, image: &[u8], stage: Stage) -> Result<RawScores, InferenceError> {
        match stage {
            Stage::A => {
                self.stage_a_calls.fetch_add(1, Ordering::SeqCst);
                let p = f64::from(image.first().copied().unwrap_or(0)) / 100.0;
                Ok(RawScores::Probabilities(vec![p, 1.0 - p]))
            }
            Stage::B => {
                self.stage_b_calls.fetch_add(1, Ordering::SeqCst);
                Ok(leaf_spot_scores())
            }
        }
    }
}

pub struct SlowClassifier(pub Duration);

impl Classifier for SlowClassifier {
    fn classify(&self, _image: &[u8], _stage: Stage) -> Result<RawScores, InferenceError> {
        std::thread::sleep(self.0);
        Ok(RawScores::Probabilities(vec![0.9, 0.1]))
    }
}

pub struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn classify(&self, _image: &[u8], stage: Stage) -> Result<RawScores, InferenceError> {
        Err(InferenceError::ClassifierFailed {
            stage,
            image_id: "unknown".to_string(),
            reason: "model not loaded".to_string(),
        })
    }
}

/// Rejects images whose brightness byte is below 10.
pub struct BrightnessGate;

impl QualityGate for BrightnessGate {
    fn check_image(&self, image: &[u8]) -> QualityVerdict {
        match image.get(1) {
            Some(b) if *b < 10 => QualityVerdict::from_gate(false, Some("too_dark")),
            _ => QualityVerdict::accepted(),
        }
    }
}
