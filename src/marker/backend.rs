//! Detection capability seam.
//!
//! The scanner depends only on this surface; the real decoder and the
//! disabled variant are interchangeable at construction time.

use nalgebra::Vector2;

/// 2D point in pixel coordinates of the reduced detection buffer.
pub type Point2f = Vector2<f32>;

/// One decoded fiducial in reduced-buffer coordinates.
#[derive(Clone, Debug)]
pub struct BackendDetection {
    /// Decoded tag identity.
    pub id: u64,
    pub center: Point2f,
    /// Ordered outline corners; empty when the decoder reports none.
    pub corners: Vec<Point2f>,
}

/// A fiducial decoder operating on a packed luma buffer.
pub trait FiducialBackend: Send {
    /// Identifier of the tag dictionary this backend decodes
    /// (e.g. "tag36h11").
    fn dictionary(&self) -> &str;

    /// Detects fiducials in a packed luma buffer of `width * height` bytes.
    fn detect(
        &mut self,
        luma: &[u8],
        width: usize,
        height: usize,
    ) -> Result<Vec<BackendDetection>, String>;
}

/// Backend that never reports detections; used when no decoder is available.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullBackend;

impl FiducialBackend for NullBackend {
    fn dictionary(&self) -> &str {
        "none"
    }

    fn detect(
        &mut self,
        _luma: &[u8],
        _width: usize,
        _height: usize,
    ) -> Result<Vec<BackendDetection>, String> {
        Ok(Vec::new())
    }
}
