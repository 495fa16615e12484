use serde::{Deserialize, Serialize};

/// Probability assigned to one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProbability {
    pub class_id: String,
    pub probability: f64,
}

/// Fused distribution over `healthy`, every disease label, and the
/// unattributed unhealthy mass. Sums to 1. Owns no reference to source images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedPrediction {
    classes: Vec<ClassProbability>,
    /// Number of images averaged into this prediction.
    pub images_used: usize,
}

impl AggregatedPrediction {
    /// Build from class ids and probabilities in matching order.
    /// Extra entries on either side are dropped.
    pub fn new<I, S>(class_ids: I, probabilities: &[f64], images_used: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let classes = class_ids
            .into_iter()
            .zip(probabilities.iter().copied())
            .map(|(id, probability)| ClassProbability {
                class_id: id.into(),
                probability,
            })
            .collect();
        Self {
            classes,
            images_used,
        }
    }

    /// Probability of a class, if the class is part of the distribution.
    pub fn get(&self, class_id: &str) -> Option<f64> {
        self.classes
            .iter()
            .find(|c| c.class_id == class_id)
            .map(|c| c.probability)
    }

    /// Most likely class. Ties resolve to the earlier class in output order.
    pub fn top(&self) -> Option<&ClassProbability> {
        self.classes.iter().fold(None, |best, c| match best {
            Some(b) if b.probability >= c.probability => Some(b),
            _ => Some(c),
        })
    }

    /// The `k` most likely classes, highest first.
    pub fn top_k(&self, k: usize) -> Vec<ClassProbability> {
        let mut sorted = self.classes.clone();
        // Stable sort keeps output order among equal probabilities.
        sorted.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        sorted.truncate(k);
        sorted
    }

    pub fn classes(&self) -> &[ClassProbability] {
        &self.classes
    }

    pub fn probabilities(&self) -> Vec<f64> {
        self.classes.iter().map(|c| c.probability).collect()
    }

    pub fn total(&self) -> f64 {
        self.classes.iter().map(|c| c.probability).sum()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
