use serde::{Deserialize, Serialize};

/// Knobs for the per-frame quality analysis.
///
/// Defaults aim for hand-held close-range capture at common mobile sensor
/// resolutions. Thresholds are configuration, not law.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QualityParams {
    /// Target analysis frequency; earlier frames are dropped, never queued.
    pub target_hz: f32,
    /// Centered ROI size as a fraction of each frame dimension.
    pub roi_fraction: f32,
    /// Minimum ROI side length in pixels.
    pub roi_min_px: usize,
    /// Sampling stride inside the ROI for all pixel statistics.
    pub sample_step: usize,
    /// Laplacian population variance below this is classified as blur.
    pub blur_threshold: f64,
    /// Luma at or above this counts as a clipped highlight.
    pub over_level: u8,
    /// Luma at or below this counts as a crushed shadow.
    pub under_level: u8,
    /// Clipped-highlight fraction above this triggers the over-exposure branch.
    pub over_fraction_limit: f32,
    /// Crushed-shadow fraction above this is classified as under-exposure.
    pub under_fraction_limit: f32,
    /// Clipped clusters are tolerated while fewer than this many exist.
    pub specular_max_clusters: usize,
    /// Clipped clusters are tolerated while the largest stays below this
    /// many sampled pixels.
    pub specular_max_cluster_px: usize,
}

impl Default for QualityParams {
    fn default() -> Self {
        Self {
            target_hz: 12.0,
            roi_fraction: 0.4,
            roi_min_px: 64,
            sample_step: 2,
            blur_threshold: 150.0,
            over_level: 245,
            under_level: 10,
            over_fraction_limit: 0.02,
            under_fraction_limit: 0.30,
            specular_max_clusters: 5,
            specular_max_cluster_px: 100,
        }
    }
}
