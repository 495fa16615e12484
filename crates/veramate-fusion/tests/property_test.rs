//! Property tests for fusion and aggregation.

use proptest::prelude::*;
use veramate_calibration::Calibrator;
use veramate_core::config::FusionConfig;
use veramate_core::models::{CalibratedSample, ImageSample, RawScores};
use veramate_fusion::{fuse, mean_distribution, ClassLayout, FusionEngine};

fn normalized(raw: Vec<f64>) -> Vec<f64> {
    let sum: f64 = raw.iter().sum();
    raw.into_iter().map(|p| p / sum).collect()
}

proptest! {
    #[test]
    fn fused_distribution_sums_to_one(
        p_healthy in 0.0f64..=1.0,
        raw_b in prop::collection::vec(0.001f64..1.0, 5),
        with_stage_b in any::<bool>(),
    ) {
        let layout = ClassLayout::from_config(&FusionConfig::default());
        let sample = CalibratedSample {
            image_id: "p".to_string(),
            stage_a: vec![p_healthy, 1.0 - p_healthy],
            stage_b: with_stage_b.then(|| normalized(raw_b)),
        };
        let fused = fuse(&sample, 0, &layout);
        let sum: f64 = fused.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-6);
        prop_assert!(fused.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn identical_samples_aggregate_to_themselves(
        raw in prop::collection::vec(0.001f64..1.0, 7),
        n in 1usize..=6,
    ) {
        let dist = normalized(raw);
        let batch = vec![dist.clone(); n];
        let mean = mean_distribution(&batch).unwrap();
        for (m, d) in mean.iter().zip(&dist) {
            prop_assert!((m - d).abs() < 1e-9);
        }
    }

    #[test]
    fn aggregated_prediction_sums_to_one(
        healthy in prop::collection::vec(0.0f64..=1.0, 1..=3),
        raw_b in prop::collection::vec(0.001f64..1.0, 5),
    ) {
        let config = FusionConfig::default();
        let engine = FusionEngine::new(Calibrator::identity(5), config);
        let stage_b = normalized(raw_b);
        let samples: Vec<ImageSample> = healthy
            .iter()
            .enumerate()
            .map(|(i, p)| {
                ImageSample::new(format!("img-{i}"), RawScores::Probabilities(vec![*p, 1.0 - *p]))
                    .with_stage_b(RawScores::Probabilities(stage_b.clone()))
            })
            .collect();

        let output = engine.process(&samples);
        let prediction = output.outcome.prediction().unwrap();
        prop_assert!((prediction.total() - 1.0).abs() < 1e-6);
    }
}
