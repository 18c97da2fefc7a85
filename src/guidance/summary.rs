//! Summary records persisted by the caller.
//!
//! Field names, the camelCase wire form and the 0–8 row-major grid indexing
//! (`row = cell / 3`, `col = cell % 3`) are a stable contract consumed by
//! downstream tooling; do not reorder or rename.

use super::phase::CapturePhase;
use crate::geom::{HeightBin, LateralBin};
use crate::marker::DetectionMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sufficiency targets echoed into the manifest.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSummary {
    pub good_captures: u32,
    pub grid_cells: usize,
    pub per_identity: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorProgress {
    pub center_mid: u32,
    pub left_mid: u32,
    pub right_mid: u32,
    pub high: u32,
    pub low: u32,
    pub complete: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepProgress {
    pub mid: u32,
    pub high: u32,
    pub low: u32,
    pub complete: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossArchProgress {
    pub total: u32,
    pub high: u32,
    pub low: u32,
    pub complete: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseBreakdown {
    pub anchor: AnchorProgress,
    pub left_sweep: SweepProgress,
    pub right_sweep: SweepProgress,
    pub cross_arch: CrossArchProgress,
}

/// Session-level summary for the capture manifest.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestSummary {
    pub version: u32,
    pub tracked_identities: Vec<u64>,
    pub min_distance_cm: f32,
    pub max_distance_cm: f32,
    pub edge_margin_fraction: f32,
    pub good_captures: u32,
    pub targets: TargetSummary,
    /// Good captures per grid cell, keyed "0".."8" row-major.
    pub grid_counts: BTreeMap<String, u32>,
    pub filled_cells: usize,
    pub identity_counts: BTreeMap<u64, u32>,
    pub phases: PhaseBreakdown,
    pub current_phase: CapturePhase,
    pub enough: bool,
    pub reasons_if_not_enough: Vec<String>,
}

/// One detection in a per-capture sidecar, deterministically ordered by
/// identity, then x, then y.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidecarDetection {
    pub id: u64,
    pub center_px: [f32; 2],
    pub center_norm: [f32; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corners_px: Option<Vec<[f32; 2]>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<f32>,
}

/// Per-capture sidecar record persisted next to each committed photo.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidecarSummary {
    pub mode: DetectionMode,
    pub dictionary: String,
    pub frame_width: usize,
    pub frame_height: usize,
    pub required_identities: Vec<u64>,
    pub tracked_identities: Vec<u64>,
    pub missing_identities: Vec<u64>,
    /// Detected identities, sorted ascending.
    pub detected_identities: Vec<u64>,
    pub framing_ok: bool,
    pub distance_ok: bool,
    pub phase: CapturePhase,
    pub grid_cell: Option<usize>,
    pub lateral_bin: Option<LateralBin>,
    pub height_bin: Option<HeightBin>,
    pub cross_arch: bool,
    pub detections: Vec<SidecarDetection>,
}

/// Session-level summary for a calibration session.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationSummary {
    pub version: u32,
    pub good_captures: u32,
    pub target_good_captures: u32,
    pub target_grid_cells: usize,
    /// Good captures per grid cell, keyed "0".."8" row-major.
    pub grid_counts: BTreeMap<String, u32>,
    pub filled_cells: usize,
    pub enough: bool,
    pub reasons_if_not_enough: Vec<String>,
}
