//! Per-image two-stage fusion.

use veramate_core::models::CalibratedSample;

use crate::layout::ClassLayout;

/// Fuse one calibrated image into a distribution over `layout`.
///
/// Without a Stage B vector (bypassed or never run) the unhealthy mass is
/// assigned to the unattributed slot, so the result still sums to 1.
pub fn fuse(sample: &CalibratedSample, healthy_index: usize, layout: &ClassLayout) -> Vec<f64> {
    let p_healthy = sample.healthy_probability(healthy_index).clamp(0.0, 1.0);
    let p_unhealthy = 1.0 - p_healthy;

    let mut fused = vec![0.0; layout.len()];
    fused[layout.healthy_slot()] = p_healthy;

    match sample.stage_b.as_deref() {
        Some(stage_b) => {
            for (slot, p_disease) in fused[1..=layout.disease_count()].iter_mut().zip(stage_b) {
                *slot = p_unhealthy * p_disease;
            }
        }
        None => fused[layout.unattributed_slot()] = p_unhealthy,
    }

    fused
}

#[cfg(test)]
mod tests {
    use super::*;
    use veramate_core::config::FusionConfig;

    fn sample(stage_a: Vec<f64>, stage_b: Option<Vec<f64>>) -> CalibratedSample {
        CalibratedSample {
            image_id: "img".to_string(),
            stage_a,
            stage_b,
        }
    }

    #[test]
    fn stage_b_splits_unhealthy_mass() {
        let layout = ClassLayout::from_config(&FusionConfig::default());
        let fused = fuse(
            &sample(vec![0.2, 0.8], Some(vec![0.5, 0.25, 0.25, 0.0, 0.0])),
            0,
            &layout,
        );
        let expected = [0.2, 0.4, 0.2, 0.2, 0.0, 0.0, 0.0];
        for (got, want) in fused.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "{fused:?}");
        }
    }

    #[test]
    fn bypassed_mass_goes_to_unattributed() {
        let layout = ClassLayout::from_config(&FusionConfig::default());
        let fused = fuse(&sample(vec![0.75, 0.25], None), 0, &layout);
        assert_eq!(fused[0], 0.75);
        assert_eq!(fused[layout.unattributed_slot()], 0.25);
        assert!(fused[1..=5].iter().all(|p| *p == 0.0));
    }

    #[test]
    fn healthy_index_one_reads_second_entry() {
        let layout = ClassLayout::from_config(&FusionConfig::default());
        let fused = fuse(&sample(vec![0.1, 0.9], None), 1, &layout);
        assert_eq!(fused[0], 0.9);
    }
}
