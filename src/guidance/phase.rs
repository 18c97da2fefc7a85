//! Phase derivation for multi-phase capture sessions.
//!
//! No phase flag is stored anywhere: the current phase is a pure function of
//! the session counters. Each completion predicate is checked in order and
//! the first incomplete phase is the current one. Counters only increase
//! within a session, so a completed phase stays complete.

use super::targets::PhaseTargets;
use crate::geom::{HeightBin, LateralBin};
use serde::{Deserialize, Serialize};

/// Capture session phases, strictly ordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CapturePhase {
    Anchor,
    LeftSweep,
    RightSweep,
    CrossArch,
    Cleanup,
}

impl CapturePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            CapturePhase::Anchor => "anchor",
            CapturePhase::LeftSweep => "leftSweep",
            CapturePhase::RightSweep => "rightSweep",
            CapturePhase::CrossArch => "crossArch",
            CapturePhase::Cleanup => "cleanup",
        }
    }
}

/// Lateral × height good-capture counts. Anchor and sweep predicates read
/// different thresholds of the same underlying table.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BinCounts {
    cells: [[u32; 3]; 3],
}

impl BinCounts {
    pub fn increment(&mut self, lateral: LateralBin, height: HeightBin) {
        self.cells[lateral.index()][height.index()] += 1;
    }

    #[inline]
    pub fn at(&self, lateral: LateralBin, height: HeightBin) -> u32 {
        self.cells[lateral.index()][height.index()]
    }

    /// Captures in a height row across all lateral bins.
    pub fn height_total(&self, height: HeightBin) -> u32 {
        self.cells.iter().map(|col| col[height.index()]).sum()
    }
}

/// Wide-baseline capture counts for the cross-arch phase.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct CrossCounts {
    pub total: u32,
    pub high: u32,
    pub low: u32,
}

pub(crate) fn anchor_complete(bins: &BinCounts, t: &PhaseTargets) -> bool {
    bins.at(LateralBin::Center, HeightBin::Mid) >= t.anchor_center_mid
        && bins.at(LateralBin::Left, HeightBin::Mid) >= t.anchor_side_mid
        && bins.at(LateralBin::Right, HeightBin::Mid) >= t.anchor_side_mid
        && bins.height_total(HeightBin::High) >= t.anchor_high
        && bins.height_total(HeightBin::Low) >= t.anchor_low
}

pub(crate) fn sweep_complete(bins: &BinCounts, side: LateralBin, t: &PhaseTargets) -> bool {
    bins.at(side, HeightBin::Mid) >= t.sweep_mid
        && bins.at(side, HeightBin::High) >= t.sweep_high
        && bins.at(side, HeightBin::Low) >= t.sweep_low
}

pub(crate) fn cross_complete(cross: &CrossCounts, t: &PhaseTargets) -> bool {
    cross.total >= t.cross_total && cross.high >= t.cross_high && cross.low >= t.cross_low
}

pub(crate) fn current_phase(
    bins: &BinCounts,
    cross: &CrossCounts,
    t: &PhaseTargets,
    require_cross_arch: bool,
) -> CapturePhase {
    if !anchor_complete(bins, t) {
        CapturePhase::Anchor
    } else if !sweep_complete(bins, LateralBin::Left, t) {
        CapturePhase::LeftSweep
    } else if !sweep_complete(bins, LateralBin::Right, t) {
        CapturePhase::RightSweep
    } else if require_cross_arch && !cross_complete(cross, t) {
        CapturePhase::CrossArch
    } else {
        CapturePhase::Cleanup
    }
}
