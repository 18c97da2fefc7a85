//! Single-phase tracker for calibration sessions.
//!
//! Tracks only 3×3 grid occupancy and a good-capture count; there is no
//! identity bookkeeping and no phase progression.

use super::capture::SufficiencyVerdict;
use super::snapshot::{MarkerSnapshot, QualitySnapshot};
use super::summary::CalibrationSummary;
use super::targets::CalibrationTargets;
use crate::geom;
use crate::marker::MarkerStatus;
use crate::quality::{QualityResult, QualityStatus};
use log::debug;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct CalibrationState {
    good_captures: u32,
    grid: [u32; 9],
}

/// Single-phase capture guidance for calibration sessions.
pub struct CalibrationTracker {
    targets: CalibrationTargets,
    state: Mutex<CalibrationState>,
}

impl CalibrationTracker {
    pub fn new(targets: CalibrationTargets) -> Self {
        Self {
            targets,
            state: Mutex::new(CalibrationState::default()),
        }
    }

    pub fn targets(&self) -> &CalibrationTargets {
        &self.targets
    }

    pub fn reset_for_new_session(&self) {
        let mut st = self.lock();
        *st = CalibrationState::default();
        debug!("CalibrationTracker::reset_for_new_session");
    }

    /// Sole mutator; a capture failing the gate leaves the counters unchanged.
    pub fn on_capture_saved(&self, marker: &MarkerSnapshot, quality: &QualitySnapshot) {
        let mut st = self.lock();
        if !self.passes_gate(marker, quality) {
            debug!(
                "CalibrationTracker::on_capture_saved gate failed status={:?} distance={:?} framing_ok={} detections={}",
                quality.status,
                quality.distance_cm,
                marker.framing_ok,
                marker.detections.len()
            );
            return;
        }
        let centers: Vec<[f32; 2]> = marker.detections.iter().map(|d| d.center).collect();
        let Some(mean) = geom::mean_center(&centers) else {
            return;
        };
        let nx = geom::normalize_coord(mean[0], marker.frame_width as f32);
        let ny = geom::normalize_coord(mean[1], marker.frame_height as f32);
        st.good_captures += 1;
        st.grid[geom::grid_cell(nx, ny)] += 1;
        debug!(
            "CalibrationTracker::on_capture_saved good={} cell={}",
            st.good_captures,
            geom::grid_cell(nx, ny)
        );
    }

    pub fn is_enough(&self) -> SufficiencyVerdict {
        let st = self.lock();
        self.verdict(&st)
    }

    /// Read-only operator guidance for a transient frame state, prioritized:
    /// markers, framing, distance, first empty grid cell, then progress.
    pub fn live_guidance(&self, status: &MarkerStatus, quality: &QualityResult) -> String {
        let st = self.lock();
        if status.detections.is_empty() {
            return "No markers visible. Aim at the calibration target.".to_string();
        }
        if !status.framing_ok {
            return "Markers near the frame edge. Re-center the target.".to_string();
        }
        if let Some(d) = quality.distance_cm {
            if d < self.targets.min_distance_cm {
                return "Too close. Move back a little.".to_string();
            }
            if d > self.targets.max_distance_cm {
                return "Too far. Move closer.".to_string();
            }
        }
        if let Some(cell) = st.grid.iter().position(|&c| c == 0) {
            let (row, col) = geom::grid_row_col(cell);
            return format!("Move to the empty area (row {}, column {}).", row + 1, col + 1);
        }
        if self.verdict(&st).enough {
            "Calibration coverage complete.".to_string()
        } else {
            "Keep capturing.".to_string()
        }
    }

    pub fn build_summary(&self) -> CalibrationSummary {
        let st = self.lock();
        let verdict = self.verdict(&st);
        let grid_counts: BTreeMap<String, u32> = st
            .grid
            .iter()
            .enumerate()
            .map(|(i, &c)| (i.to_string(), c))
            .collect();
        CalibrationSummary {
            version: 1,
            good_captures: st.good_captures,
            target_good_captures: self.targets.good_captures,
            target_grid_cells: self.targets.grid_cells,
            grid_counts,
            filled_cells: st.grid.iter().filter(|&&c| c > 0).count(),
            enough: verdict.enough,
            reasons_if_not_enough: verdict.reasons,
        }
    }

    fn lock(&self) -> MutexGuard<'_, CalibrationState> {
        self.state.lock().expect("calibration tracker lock poisoned")
    }

    fn passes_gate(&self, marker: &MarkerSnapshot, quality: &QualitySnapshot) -> bool {
        quality.status == QualityStatus::Ok
            && !marker.detections.is_empty()
            && quality.distance_cm.is_some_and(|d| {
                d >= self.targets.min_distance_cm && d <= self.targets.max_distance_cm
            })
            && marker.framing_ok
    }

    fn verdict(&self, st: &CalibrationState) -> SufficiencyVerdict {
        let mut reasons = Vec::new();
        if st.good_captures < self.targets.good_captures {
            reasons.push(format!(
                "Good captures {}/{}",
                st.good_captures, self.targets.good_captures
            ));
        }
        let filled = st.grid.iter().filter(|&&c| c > 0).count();
        if filled < self.targets.grid_cells {
            reasons.push(format!(
                "Grid coverage {}/{} cells",
                filled, self.targets.grid_cells
            ));
        }
        SufficiencyVerdict {
            enough: reasons.is_empty(),
            reasons,
        }
    }
}
