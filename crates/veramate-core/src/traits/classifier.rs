use crate::errors::InferenceError;
use crate::models::{RawScores, Stage};

/// External image classifier for both stages.
///
/// Implementations may block; callers run them off the async executor and
/// bound each call with the configured timeout.
pub trait Classifier: Send + Sync {
    /// Classify encoded image bytes with the given stage's model.
    fn classify(&self, image: &[u8], stage: Stage) -> Result<RawScores, InferenceError>;
}
