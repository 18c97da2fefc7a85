//! Per-frame quality scoring.
//!
//! Typical usage:
//! ```no_run
//! use capture_guide::image::FrameView;
//! use capture_guide::quality::{QualityAnalyzer, QualityParams};
//!
//! # fn example(frame: FrameView) {
//! let mut analyzer = QualityAnalyzer::new(QualityParams::default());
//! if let Some(result) = analyzer.analyze(&frame, Some(4.0)) {
//!     println!("status={:?} blur={:.1}", result.status, result.blur_score);
//! }
//! # }
//! ```
use super::clusters::label_clusters;
use super::params::QualityParams;
use crate::geom::centered_roi;
use crate::image::FrameView;
use crate::status::StatusCell;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Verdict for one analyzed frame, in gate priority order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QualityStatus {
    Ok,
    Blur,
    OverExposed,
    UnderExposed,
    Specular,
    #[default]
    Unknown,
}

impl QualityStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            QualityStatus::Ok => "ok",
            QualityStatus::Blur => "blur",
            QualityStatus::OverExposed => "overExposed",
            QualityStatus::UnderExposed => "underExposed",
            QualityStatus::Specular => "specular",
            QualityStatus::Unknown => "unknown",
        }
    }
}

/// Quality metrics for a single analyzed frame.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityResult {
    pub status: QualityStatus,
    /// Population variance of the sampled Laplacian response. Lower means
    /// blurrier.
    pub blur_score: f64,
    /// Fraction of sampled ROI pixels at or above the highlight clip level.
    pub over_fraction: f32,
    /// Fraction of sampled ROI pixels at or below the shadow clip level.
    pub under_fraction: f32,
    /// Number of 8-connected clipped-highlight clusters.
    pub cluster_count: usize,
    /// Size of the largest cluster in sampled pixels.
    pub largest_cluster: usize,
    /// Estimated subject distance in centimetres, when the focus signal is
    /// available.
    pub distance_cm: Option<f32>,
    pub timestamp_us: i64,
}

/// Throttled per-frame quality analyzer.
///
/// Holds no session-lifetime state besides the last-processed timestamp; each
/// produced result is also published through an atomic handoff for a
/// concurrent UI reader.
pub struct QualityAnalyzer {
    params: QualityParams,
    last_processed_us: Option<i64>,
    latest: StatusCell<QualityResult>,
}

impl QualityAnalyzer {
    pub fn new(params: QualityParams) -> Self {
        Self {
            params,
            last_processed_us: None,
            latest: StatusCell::default(),
        }
    }

    /// Most recently published result; safe to call from another thread.
    pub fn latest(&self) -> Arc<QualityResult> {
        self.latest.latest()
    }

    /// Clears the throttle clock so the next frame is analyzed immediately.
    pub fn reset(&mut self) {
        self.last_processed_us = None;
        self.latest.publish(QualityResult::default());
    }

    /// Analyzes one frame, or returns `None` when the frame is dropped
    /// (throttled) or its pixel layout is unsupported.
    pub fn analyze(
        &mut self,
        frame: &FrameView<'_>,
        focus_diopters: Option<f32>,
    ) -> Option<QualityResult> {
        if !frame.is_packed() {
            warn!(
                "QualityAnalyzer::analyze unsupported pixel layout pixel_stride={}",
                frame.pixel_stride
            );
            return None;
        }
        let min_interval_us = (1_000_000.0 / f64::from(self.params.target_hz.max(0.1))) as i64;
        if let Some(last) = self.last_processed_us {
            if frame.timestamp_us - last < min_interval_us {
                return None;
            }
        }
        self.last_processed_us = Some(frame.timestamp_us);

        let result = self.score_frame(frame, focus_diopters);
        debug!(
            "QualityAnalyzer::analyze ts={} status={:?} blur={:.1} over={:.4} under={:.4} clusters={}",
            frame.timestamp_us,
            result.status,
            result.blur_score,
            result.over_fraction,
            result.under_fraction,
            result.cluster_count
        );
        self.latest.publish(result.clone());
        Some(result)
    }

    fn score_frame(&self, frame: &FrameView<'_>, focus_diopters: Option<f32>) -> QualityResult {
        let p = &self.params;
        let (x0, y0, rw, rh) = centered_roi(frame.width, frame.height, p.roi_fraction, p.roi_min_px);
        let step = p.sample_step.max(1);

        // One pass over the ROI interior: Laplacian accumulation plus
        // exposure counts at the same sample positions.
        let mut lap_sum = 0.0f64;
        let mut lap_sq_sum = 0.0f64;
        let mut over = 0usize;
        let mut under = 0usize;
        let mut samples = 0usize;
        let mut over_coords: Vec<(u32, u32)> = Vec::new();

        let x_end = x0 + rw - 1;
        let y_end = y0 + rh - 1;
        let mut y = y0 + 1;
        while y < y_end {
            let row = frame.row(y);
            let up = frame.row(y - 1);
            let down = frame.row(y + 1);
            let mut x = x0 + 1;
            while x < x_end {
                let center = row[x] as i32;
                let lap = up[x] as i32 + down[x] as i32 + row[x - 1] as i32 + row[x + 1] as i32
                    - 4 * center;
                lap_sum += f64::from(lap);
                lap_sq_sum += f64::from(lap) * f64::from(lap);

                let v = row[x];
                if v >= p.over_level {
                    over += 1;
                    over_coords.push((((x - x0) / step) as u32, ((y - y0) / step) as u32));
                } else if v <= p.under_level {
                    under += 1;
                }
                samples += 1;
                x += step;
            }
            y += step;
        }

        let (blur_score, over_fraction, under_fraction) = if samples > 0 {
            let n = samples as f64;
            let mean = lap_sum / n;
            let variance = (lap_sq_sum / n - mean * mean).max(0.0);
            (
                variance,
                over as f32 / samples as f32,
                under as f32 / samples as f32,
            )
        } else {
            (0.0, 0.0, 0.0)
        };

        let clusters = label_clusters(&over_coords);
        let distance_cm = focus_diopters
            .filter(|d| *d > 0.0)
            .map(|d| 100.0 / d);

        let status = if samples == 0 {
            QualityStatus::Unknown
        } else if blur_score < p.blur_threshold {
            QualityStatus::Blur
        } else if over_fraction > p.over_fraction_limit {
            if clusters.count < p.specular_max_clusters
                && clusters.largest < p.specular_max_cluster_px
            {
                QualityStatus::Specular
            } else {
                QualityStatus::OverExposed
            }
        } else if under_fraction > p.under_fraction_limit {
            QualityStatus::UnderExposed
        } else {
            QualityStatus::Ok
        };

        QualityResult {
            status,
            blur_score,
            over_fraction,
            under_fraction,
            cluster_count: clusters.count,
            largest_cluster: clusters.largest,
            distance_cm,
            timestamp_us: frame.timestamp_us,
        }
    }
}
