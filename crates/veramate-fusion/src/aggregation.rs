//! Cross-image aggregation.

/// Unweighted mean of equally-long distributions, renormalized to sum to 1.
/// `None` for an empty batch.
pub fn mean_distribution(distributions: &[Vec<f64>]) -> Option<Vec<f64>> {
    let first = distributions.first()?;
    let count = distributions.len() as f64;

    let mut mean = vec![0.0; first.len()];
    for dist in distributions {
        for (acc, p) in mean.iter_mut().zip(dist) {
            *acc += p;
        }
    }
    for acc in &mut mean {
        *acc /= count;
    }

    let total: f64 = mean.iter().sum();
    if total > 0.0 {
        for acc in &mut mean {
            *acc /= total;
        }
    }

    Some(mean)
}
