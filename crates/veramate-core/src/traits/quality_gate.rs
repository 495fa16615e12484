use crate::models::QualityVerdict;

/// External per-image quality check (blur, lighting, exposure, resolution).
pub trait QualityGate: Send + Sync {
    /// Inspect encoded image bytes and return a validity verdict.
    fn check_image(&self, image: &[u8]) -> QualityVerdict;
}

/// Gate that accepts every image. Used when screening already happened upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllGate;

impl QualityGate for AcceptAllGate {
    fn check_image(&self, _image: &[u8]) -> QualityVerdict {
        QualityVerdict::accepted()
    }
}
