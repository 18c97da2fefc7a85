use serde::{Deserialize, Serialize};

/// Knobs for the marker detection adapter.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkerParams {
    /// Centered ROI size as a fraction of each frame dimension.
    pub roi_fraction: f32,
    /// Minimum ROI side length in pixels.
    pub roi_min_px: usize,
    /// Integer subsampling step applied to ROI rows and columns before
    /// detection.
    pub downsample_step: usize,
    /// Detections must stay this fraction of width/height away from every
    /// frame edge for framing to be OK.
    pub edge_margin_fraction: f32,
}

impl Default for MarkerParams {
    fn default() -> Self {
        Self {
            roi_fraction: 0.6,
            roi_min_px: 160,
            downsample_step: 2,
            edge_margin_fraction: 0.10,
        }
    }
}
