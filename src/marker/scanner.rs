//! Scanner driving ROI extraction, detection and status publication.
//!
//! Typical usage:
//! ```no_run
//! use capture_guide::image::FrameView;
//! use capture_guide::marker::{DetectionMode, MarkerParams, MarkerScanner, NullBackend};
//!
//! # fn example(frame: FrameView) {
//! let mut scanner = MarkerScanner::new(MarkerParams::default(), Box::new(NullBackend));
//! scanner.set_mode(DetectionMode::Block);
//! scanner.set_required_identities(&[1, 2, 3, 4]);
//! let status = scanner.process(&frame);
//! println!("{}", status.guidance);
//! # }
//! ```
use super::backend::{FiducialBackend, Point2f};
use super::params::MarkerParams;
use super::types::{DetectionMode, MarkerSessionSummary, MarkerStatus, TagDetection};
use crate::geom::centered_roi;
use crate::image::FrameView;
use crate::status::StatusCell;
use log::{debug, warn};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Marker detection adapter around a pluggable [`FiducialBackend`].
pub struct MarkerScanner {
    params: MarkerParams,
    mode: DetectionMode,
    required: Vec<u64>,
    backend: Box<dyn FiducialBackend>,
    /// Reduced-ROI working buffer, reused across frames.
    work: Vec<u8>,
    summary: MarkerSessionSummary,
    latest: StatusCell<MarkerStatus>,
}

impl MarkerScanner {
    pub fn new(params: MarkerParams, backend: Box<dyn FiducialBackend>) -> Self {
        Self {
            params,
            mode: DetectionMode::Off,
            required: Vec::new(),
            backend,
            work: Vec::new(),
            summary: MarkerSessionSummary::default(),
            latest: StatusCell::default(),
        }
    }

    pub fn set_mode(&mut self, mode: DetectionMode) {
        self.mode = mode;
    }

    /// Stores the required identities deduplicated and sorted ascending.
    /// Session statistics are owned by the guidance tracker; changing the
    /// required set does not clear the visibility tally here.
    pub fn set_required_identities(&mut self, ids: &[u64]) {
        let mut v = ids.to_vec();
        v.sort_unstable();
        v.dedup();
        self.required = v;
    }

    /// Identifier of the backing tag dictionary, for sidecar records.
    pub fn dictionary(&self) -> String {
        self.backend.dictionary().to_string()
    }

    /// Clears session aggregates and the published status. Mode and required
    /// identities are configuration and survive the reset.
    pub fn reset(&mut self) {
        self.summary = MarkerSessionSummary::default();
        self.latest.publish(MarkerStatus::default());
    }

    /// Most recently published status; safe to call from another thread.
    pub fn latest(&self) -> Arc<MarkerStatus> {
        self.latest.latest()
    }

    pub fn session_summary(&self) -> MarkerSessionSummary {
        self.summary.clone()
    }

    /// Processes one frame and publishes the resulting status.
    pub fn process(&mut self, frame: &FrameView<'_>) -> Arc<MarkerStatus> {
        if self.mode == DetectionMode::Off {
            // Lightweight heartbeat so callers can observe the pipeline is
            // alive without paying for detection.
            return self.latest.publish(MarkerStatus {
                timestamp_us: frame.timestamp_us,
                mode: self.mode,
                frame_width: frame.width,
                frame_height: frame.height,
                required: self.required.clone(),
                guidance: "Marker detection is off.".to_string(),
                display: "detection off".to_string(),
                ..Default::default()
            });
        }
        if !frame.is_packed() {
            warn!(
                "MarkerScanner::process unsupported pixel layout pixel_stride={}",
                frame.pixel_stride
            );
            return self.latest.publish(MarkerStatus {
                timestamp_us: frame.timestamp_us,
                mode: self.mode,
                frame_width: frame.width,
                frame_height: frame.height,
                required: self.required.clone(),
                missing: self.required.clone(),
                guidance: "Unsupported frame format.".to_string(),
                display: "unsupported format".to_string(),
                ..Default::default()
            });
        }

        let detections = self.detect(frame);
        let status = self.build_status(frame, detections);
        self.record_frame(&status);
        debug!(
            "MarkerScanner::process ts={} detections={} missing={} framing_ok={}",
            status.timestamp_us,
            status.detections.len(),
            status.missing.len(),
            status.framing_ok
        );
        self.latest.publish(status)
    }

    /// ROI crop, integer-step downsample, backend call and full-frame remap.
    fn detect(&mut self, frame: &FrameView<'_>) -> Vec<TagDetection> {
        let p = &self.params;
        let (x0, y0, rw, rh) = centered_roi(frame.width, frame.height, p.roi_fraction, p.roi_min_px);
        let step = p.downsample_step.max(1);
        let reduced_w = rw.div_ceil(step);
        let reduced_h = rh.div_ceil(step);

        self.work.resize(reduced_w * reduced_h, 0);
        for (ry, y) in (y0..y0 + rh).step_by(step).enumerate() {
            let src = frame.row(y);
            let dst = &mut self.work[ry * reduced_w..(ry + 1) * reduced_w];
            for (rx, x) in (x0..x0 + rw).step_by(step).enumerate() {
                dst[rx] = src[x];
            }
        }

        let raw = match self.backend.detect(&self.work, reduced_w, reduced_h) {
            Ok(found) => found,
            Err(e) => {
                warn!("MarkerScanner::detect backend failed: {e}");
                Vec::new()
            }
        };

        let roi_area = (rw * rh) as f32;
        let remap = |p: &Point2f| -> [f32; 2] {
            [x0 as f32 + p.x * step as f32, y0 as f32 + p.y * step as f32]
        };
        raw.iter()
            .map(|d| {
                let corners: Vec<[f32; 2]> = d.corners.iter().map(&remap).collect();
                let quality = if corners.len() >= 3 {
                    Some((shoelace_area(&corners) / roi_area).clamp(0.0, 1.0))
                } else {
                    None
                };
                TagDetection {
                    id: d.id,
                    center: remap(&d.center),
                    corners: (corners.len() >= 4).then_some(corners),
                    quality,
                }
            })
            .collect()
    }

    fn build_status(&self, frame: &FrameView<'_>, detections: Vec<TagDetection>) -> MarkerStatus {
        let detected: BTreeSet<u64> = detections.iter().map(|d| d.id).collect();
        let missing: Vec<u64> = self
            .required
            .iter()
            .filter(|id| !detected.contains(id))
            .copied()
            .collect();
        let all_required_visible = if self.required.is_empty() {
            !detections.is_empty()
        } else {
            missing.is_empty()
        };
        let framing_ok = framing_ok(
            &detections,
            frame.width as f32,
            frame.height as f32,
            self.params.edge_margin_fraction,
        );
        let (guidance, display) =
            guidance_text(detections.len(), &self.required, &missing, framing_ok);

        MarkerStatus {
            timestamp_us: frame.timestamp_us,
            mode: self.mode,
            frame_width: frame.width,
            frame_height: frame.height,
            detections,
            required: self.required.clone(),
            missing,
            all_required_visible,
            framing_ok,
            guidance,
            display,
        }
    }

    fn record_frame(&mut self, status: &MarkerStatus) {
        self.summary.frames_processed += 1;
        if status.all_required_visible {
            self.summary.frames_all_required_visible += 1;
        }
        let seen: BTreeSet<u64> = status.detections.iter().map(|d| d.id).collect();
        for id in seen {
            *self.summary.visibility.entry(id).or_insert(0) += 1;
        }
    }
}

/// Polygon area via the shoelace formula.
fn shoelace_area(corners: &[[f32; 2]]) -> f32 {
    if corners.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0f32;
    for i in 0..corners.len() {
        let a = corners[i];
        let b = corners[(i + 1) % corners.len()];
        acc += a[0] * b[1] - b[0] * a[1];
    }
    0.5 * acc.abs()
}

/// Every detection must keep its corners (center when no corners) at least
/// the margin away from every frame edge.
fn framing_ok(
    detections: &[TagDetection],
    frame_width: f32,
    frame_height: f32,
    margin_fraction: f32,
) -> bool {
    let mx = frame_width * margin_fraction;
    let my = frame_height * margin_fraction;
    let in_bounds = |p: &[f32; 2]| {
        p[0] >= mx && p[0] <= frame_width - mx && p[1] >= my && p[1] <= frame_height - my
    };
    detections.iter().all(|d| match &d.corners {
        Some(corners) => corners.iter().all(in_bounds),
        None => in_bounds(&d.center),
    })
}

/// Operator guidance and display strings. A pure function of the four inputs
/// so the text is reproducible for any frame state.
fn guidance_text(
    total: usize,
    required: &[u64],
    missing: &[u64],
    framing_ok: bool,
) -> (String, String) {
    let display = if required.is_empty() {
        format!("{total} markers")
    } else {
        format!("{}/{} markers", required.len() - missing.len(), required.len())
    };
    if total == 0 {
        return (
            "No markers visible. Aim at the marked area.".to_string(),
            display,
        );
    }
    if !missing.is_empty() {
        let ids: Vec<String> = missing.iter().map(u64::to_string).collect();
        return (format!("Missing markers: {}", ids.join(", ")), display);
    }
    if !framing_ok {
        return (
            "Markers too close to the frame edge. Adjust framing.".to_string(),
            display,
        );
    }
    ("All markers visible.".to_string(), display)
}
