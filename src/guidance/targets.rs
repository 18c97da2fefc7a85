use serde::{Deserialize, Serialize};

/// Per-phase completion thresholds for capture sessions.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhaseTargets {
    /// Anchor: captures centered at mid height.
    pub anchor_center_mid: u32,
    /// Anchor: captures on each side at mid height.
    pub anchor_side_mid: u32,
    /// Anchor: captures in the high row, any side.
    pub anchor_high: u32,
    /// Anchor: captures in the low row, any side.
    pub anchor_low: u32,
    /// Sweep: mid-height captures on the swept side.
    pub sweep_mid: u32,
    pub sweep_high: u32,
    pub sweep_low: u32,
    /// Cross-arch: total wide-baseline captures.
    pub cross_total: u32,
    pub cross_high: u32,
    pub cross_low: u32,
    /// Minimum detection spread (fraction of frame width) for a capture to
    /// count as cross-arch; detections must also be present on both sides.
    pub cross_spread_fraction: f32,
}

impl Default for PhaseTargets {
    fn default() -> Self {
        Self {
            anchor_center_mid: 2,
            anchor_side_mid: 2,
            anchor_high: 2,
            anchor_low: 2,
            sweep_mid: 5,
            sweep_high: 3,
            sweep_low: 3,
            cross_total: 6,
            cross_high: 2,
            cross_low: 2,
            cross_spread_fraction: 0.65,
        }
    }
}

/// Sufficiency and gating targets for a multi-phase capture session.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaptureTargets {
    pub good_captures: u32,
    /// Grid cells (of 9) that must see at least one good capture.
    pub grid_cells: usize,
    /// Good captures required per tracked identity.
    pub per_identity: u32,
    pub require_cross_arch: bool,
    /// Number of identities locked in from the visibility tally when no
    /// identities are explicitly required.
    pub stable_identity_count: usize,
    pub min_distance_cm: f32,
    pub max_distance_cm: f32,
    /// Framing margin the session runs under; recorded in the manifest.
    pub edge_margin_fraction: f32,
    pub phase: PhaseTargets,
}

impl Default for CaptureTargets {
    fn default() -> Self {
        Self {
            good_captures: 60,
            grid_cells: 7,
            per_identity: 10,
            require_cross_arch: true,
            stable_identity_count: 4,
            min_distance_cm: 20.0,
            max_distance_cm: 30.0,
            edge_margin_fraction: 0.10,
            phase: PhaseTargets::default(),
        }
    }
}

/// Sufficiency and gating targets for a single-phase calibration session.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalibrationTargets {
    pub good_captures: u32,
    pub grid_cells: usize,
    pub min_distance_cm: f32,
    pub max_distance_cm: f32,
}

impl Default for CalibrationTargets {
    fn default() -> Self {
        Self {
            good_captures: 25,
            grid_cells: 8,
            min_distance_cm: 20.0,
            max_distance_cm: 30.0,
        }
    }
}
