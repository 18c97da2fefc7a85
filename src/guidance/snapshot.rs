//! Frozen capture-time copies of the live analyzer outputs.
//!
//! Taken strictly at the moment the operator commits a capture, so tracker
//! updates never race the next frame's in-flight status mutation.

use crate::marker::{DetectionMode, MarkerStatus, TagDetection};
use crate::quality::{QualityResult, QualityStatus};

/// Fully owned marker state at capture time.
#[derive(Clone, Debug)]
pub struct MarkerSnapshot {
    pub frame_width: usize,
    pub frame_height: usize,
    pub mode: DetectionMode,
    pub detections: Vec<TagDetection>,
    pub required: Vec<u64>,
    pub missing: Vec<u64>,
    pub framing_ok: bool,
}

impl MarkerSnapshot {
    pub fn from_status(status: &MarkerStatus) -> Self {
        Self {
            frame_width: status.frame_width,
            frame_height: status.frame_height,
            mode: status.mode,
            detections: status.detections.clone(),
            required: status.required.clone(),
            missing: status.missing.clone(),
            framing_ok: status.framing_ok,
        }
    }
}

/// Fully owned quality verdict at capture time.
#[derive(Clone, Debug)]
pub struct QualitySnapshot {
    pub status: QualityStatus,
    pub blur_score: f64,
    pub distance_cm: Option<f32>,
}

impl QualitySnapshot {
    pub fn from_result(result: &QualityResult) -> Self {
        Self {
            status: result.status,
            blur_score: result.blur_score,
            distance_cm: result.distance_cm,
        }
    }
}
