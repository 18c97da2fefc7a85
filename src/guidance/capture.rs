//! Multi-phase capture session tracker.
//!
//! The tracker owns every session counter behind one mutex; all operations
//! take the lock for their full duration, so a commit's counter update is
//! atomic with respect to a concurrent live-guidance read. Statistics are
//! recorded only for captures that pass the good-capture gate, so a forced
//! capture of a bad frame never pollutes coverage.

use super::phase::{
    anchor_complete, cross_complete, current_phase, sweep_complete, BinCounts, CapturePhase,
    CrossCounts,
};
use super::snapshot::{MarkerSnapshot, QualitySnapshot};
use super::summary::{
    AnchorProgress, CrossArchProgress, ManifestSummary, PhaseBreakdown, SidecarDetection,
    SidecarSummary, SweepProgress, TargetSummary,
};
use super::targets::CaptureTargets;
use crate::geom;
use crate::geom::{HeightBin, LateralBin};
use crate::marker::{MarkerSessionSummary, MarkerStatus};
use crate::quality::{QualityResult, QualityStatus};
use log::debug;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard};

/// Deterministic sufficiency verdict with one reason per unmet condition,
/// always in the same order: good captures, coverage, cross-arch, then
/// per-identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SufficiencyVerdict {
    pub enough: bool,
    pub reasons: Vec<String>,
}

/// Operator-facing guidance derived from a transient frame state. Producing
/// a hint never mutates session counters.
#[derive(Clone, Debug)]
pub struct GuidanceHint {
    pub phase: CapturePhase,
    pub text: String,
}

/// Tracked-identity lock state. Locked exactly once per session, either from
/// operator-required identities or from the visibility tally.
#[derive(Clone, Debug)]
enum TrackedIds {
    Unlocked,
    Locked(Vec<u64>),
}

#[derive(Debug)]
struct CaptureState {
    required: Vec<u64>,
    tracked: TrackedIds,
    /// Per-identity good-capture counts in lock order. Tracked-but-absent
    /// identities keep explicit zero entries.
    identity_counts: Vec<(u64, u32)>,
    good_captures: u32,
    grid: [u32; 9],
    bins: BinCounts,
    cross: CrossCounts,
}

impl CaptureState {
    fn fresh(required: Vec<u64>) -> Self {
        let tracked = if required.is_empty() {
            TrackedIds::Unlocked
        } else {
            TrackedIds::Locked(required.clone())
        };
        let identity_counts = required.iter().map(|&id| (id, 0)).collect();
        Self {
            required,
            tracked,
            identity_counts,
            good_captures: 0,
            grid: [0; 9],
            bins: BinCounts::default(),
            cross: CrossCounts::default(),
        }
    }

    fn tracked_ids(&self) -> Vec<u64> {
        match &self.tracked {
            TrackedIds::Unlocked => Vec::new(),
            TrackedIds::Locked(ids) => ids.clone(),
        }
    }
}

/// Multi-phase capture guidance state machine.
pub struct CaptureTracker {
    targets: CaptureTargets,
    state: Mutex<CaptureState>,
}

impl CaptureTracker {
    pub fn new(targets: CaptureTargets) -> Self {
        Self {
            targets,
            state: Mutex::new(CaptureState::fresh(Vec::new())),
        }
    }

    pub fn targets(&self) -> &CaptureTargets {
        &self.targets
    }

    /// Replaces the required-identity set. Prior statistics are no longer
    /// comparable, so the session counters reset with the new configuration.
    pub fn on_required_identities_changed(&self, ids: &[u64]) {
        let mut v = ids.to_vec();
        v.sort_unstable();
        v.dedup();
        let mut st = self.lock();
        debug!(
            "CaptureTracker::on_required_identities_changed {} ids, statistics reset",
            v.len()
        );
        *st = CaptureState::fresh(v);
    }

    /// Clears all counters for a new session. The required-identity
    /// configuration survives.
    pub fn reset_for_new_session(&self) {
        let mut st = self.lock();
        let required = st.required.clone();
        *st = CaptureState::fresh(required);
        debug!("CaptureTracker::reset_for_new_session");
    }

    /// Sole mutator, invoked once per operator-committed capture. A capture
    /// failing any gate condition leaves every counter unchanged.
    pub fn on_capture_saved(
        &self,
        marker: &MarkerSnapshot,
        quality: &QualitySnapshot,
        session: &MarkerSessionSummary,
    ) {
        let mut st = self.lock();
        if !self.passes_gate(marker, quality) {
            debug!(
                "CaptureTracker::on_capture_saved gate failed status={:?} distance={:?} framing_ok={} detections={}",
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
        let width = marker.frame_width as f32;
        let nx = geom::normalize_coord(mean[0], width);
        let ny = geom::normalize_coord(mean[1], marker.frame_height as f32);
        let lateral = geom::lateral_bin(nx);
        let height = geom::height_bin(ny);

        st.good_captures += 1;
        st.grid[geom::grid_cell(nx, ny)] += 1;
        st.bins.increment(lateral, height);

        let spread = geom::horizontal_spread(&centers, width);
        if spread > self.targets.phase.cross_spread_fraction
            && geom::spans_both_sides(&centers, width)
        {
            st.cross.total += 1;
            match height {
                HeightBin::High => st.cross.high += 1,
                HeightBin::Low => st.cross.low += 1,
                HeightBin::Mid => {}
            }
        }

        // One-time lock-in of the stable identity set from the session
        // visibility tally, when none are explicitly required.
        if matches!(st.tracked, TrackedIds::Unlocked) {
            let want = self.targets.stable_identity_count;
            let ids = geom::choose_stable_identities(&session.visibility, want);
            if ids.len() >= want {
                debug!("CaptureTracker::on_capture_saved locked stable identities {ids:?}");
                st.identity_counts = ids.iter().map(|&id| (id, 0)).collect();
                st.tracked = TrackedIds::Locked(ids);
            }
        }
        if matches!(st.tracked, TrackedIds::Locked(_)) {
            let present: BTreeSet<u64> = marker.detections.iter().map(|d| d.id).collect();
            for entry in st.identity_counts.iter_mut() {
                if present.contains(&entry.0) {
                    entry.1 += 1;
                }
            }
        }

        debug!(
            "CaptureTracker::on_capture_saved good={} cell={} lateral={} height={}",
            st.good_captures,
            geom::grid_cell(nx, ny),
            lateral.as_str(),
            height.as_str()
        );
    }

    /// Deterministic sufficiency verdict over the current counters.
    pub fn is_enough(&self) -> SufficiencyVerdict {
        let st = self.lock();
        self.verdict(&st)
    }

    /// Read-only operator guidance for a transient (not necessarily
    /// captured) frame state.
    pub fn live_guidance(&self, status: &MarkerStatus, quality: &QualityResult) -> GuidanceHint {
        let st = self.lock();
        let phase = current_phase(
            &st.bins,
            &st.cross,
            &self.targets.phase,
            self.targets.require_cross_arch,
        );
        let text = if status.detections.is_empty() {
            "No markers visible. Aim at the subject.".to_string()
        } else if !status.framing_ok {
            "Markers near the frame edge. Re-center the subject.".to_string()
        } else if let Some(advice) = self.distance_advice(quality.distance_cm) {
            advice
        } else if quality.status != QualityStatus::Ok {
            quality_advice(quality.status).to_string()
        } else {
            match phase {
                CapturePhase::Anchor => "Capture straight-on views at mid height.".to_string(),
                CapturePhase::LeftSweep => {
                    "Sweep along the left side, varying height.".to_string()
                }
                CapturePhase::RightSweep => {
                    "Sweep along the right side, varying height.".to_string()
                }
                CapturePhase::CrossArch => {
                    "Capture wide views spanning both sides.".to_string()
                }
                CapturePhase::Cleanup => {
                    let verdict = self.verdict(&st);
                    if verdict.enough {
                        "Coverage complete. You can finish the scan.".to_string()
                    } else {
                        format!("Almost there. {}", verdict.reasons[0])
                    }
                }
            }
        };
        GuidanceHint { phase, text }
    }

    /// Builds the session manifest summary for persistence.
    pub fn build_manifest_summary(&self) -> ManifestSummary {
        let st = self.lock();
        let t = &self.targets;
        let verdict = self.verdict(&st);
        let grid_counts: std::collections::BTreeMap<String, u32> = st
            .grid
            .iter()
            .enumerate()
            .map(|(i, &c)| (i.to_string(), c))
            .collect();

        ManifestSummary {
            version: 1,
            tracked_identities: st.tracked_ids(),
            min_distance_cm: t.min_distance_cm,
            max_distance_cm: t.max_distance_cm,
            edge_margin_fraction: t.edge_margin_fraction,
            good_captures: st.good_captures,
            targets: TargetSummary {
                good_captures: t.good_captures,
                grid_cells: t.grid_cells,
                per_identity: t.per_identity,
            },
            grid_counts,
            filled_cells: filled_cells(&st.grid),
            identity_counts: st.identity_counts.iter().copied().collect(),
            phases: PhaseBreakdown {
                anchor: AnchorProgress {
                    center_mid: st.bins.at(LateralBin::Center, HeightBin::Mid),
                    left_mid: st.bins.at(LateralBin::Left, HeightBin::Mid),
                    right_mid: st.bins.at(LateralBin::Right, HeightBin::Mid),
                    high: st.bins.height_total(HeightBin::High),
                    low: st.bins.height_total(HeightBin::Low),
                    complete: anchor_complete(&st.bins, &t.phase),
                },
                left_sweep: sweep_progress(&st.bins, LateralBin::Left, t),
                right_sweep: sweep_progress(&st.bins, LateralBin::Right, t),
                cross_arch: CrossArchProgress {
                    total: st.cross.total,
                    high: st.cross.high,
                    low: st.cross.low,
                    complete: cross_complete(&st.cross, &t.phase),
                },
            },
            current_phase: current_phase(&st.bins, &st.cross, &t.phase, t.require_cross_arch),
            enough: verdict.enough,
            reasons_if_not_enough: verdict.reasons,
        }
    }

    /// Builds the per-capture sidecar record for a committed frame.
    pub fn build_sidecar(
        &self,
        marker: &MarkerSnapshot,
        quality: &QualitySnapshot,
        dictionary: &str,
    ) -> SidecarSummary {
        let st = self.lock();
        let t = &self.targets;
        let width = marker.frame_width as f32;
        let height = marker.frame_height as f32;

        let centers: Vec<[f32; 2]> = marker.detections.iter().map(|d| d.center).collect();
        let classification = geom::mean_center(&centers).map(|mean| {
            let nx = geom::normalize_coord(mean[0], width);
            let ny = geom::normalize_coord(mean[1], height);
            (
                geom::grid_cell(nx, ny),
                geom::lateral_bin(nx),
                geom::height_bin(ny),
            )
        });
        let cross_arch = geom::horizontal_spread(&centers, width) > t.phase.cross_spread_fraction
            && geom::spans_both_sides(&centers, width);

        let mut detected: Vec<u64> = marker.detections.iter().map(|d| d.id).collect();
        detected.sort_unstable();
        detected.dedup();

        let mut detections: Vec<SidecarDetection> = marker
            .detections
            .iter()
            .map(|d| SidecarDetection {
                id: d.id,
                center_px: d.center,
                center_norm: [
                    geom::normalize_coord(d.center[0], width),
                    geom::normalize_coord(d.center[1], height),
                ],
                corners_px: d.corners.clone(),
                quality: d.quality,
            })
            .collect();
        detections.sort_by(|a, b| {
            a.id.cmp(&b.id)
                .then(total_cmp(a.center_px[0], b.center_px[0]))
                .then(total_cmp(a.center_px[1], b.center_px[1]))
        });

        SidecarSummary {
            mode: marker.mode,
            dictionary: dictionary.to_string(),
            frame_width: marker.frame_width,
            frame_height: marker.frame_height,
            required_identities: marker.required.clone(),
            tracked_identities: st.tracked_ids(),
            missing_identities: marker.missing.clone(),
            detected_identities: detected,
            framing_ok: marker.framing_ok,
            distance_ok: self.distance_in_range(quality.distance_cm),
            phase: current_phase(&st.bins, &st.cross, &t.phase, t.require_cross_arch),
            grid_cell: classification.map(|c| c.0),
            lateral_bin: classification.map(|c| c.1),
            height_bin: classification.map(|c| c.2),
            cross_arch,
            detections,
        }
    }

    fn lock(&self) -> MutexGuard<'_, CaptureState> {
        self.state.lock().expect("capture tracker lock poisoned")
    }

    fn distance_in_range(&self, distance_cm: Option<f32>) -> bool {
        distance_cm.is_some_and(|d| {
            d >= self.targets.min_distance_cm && d <= self.targets.max_distance_cm
        })
    }

    fn passes_gate(&self, marker: &MarkerSnapshot, quality: &QualitySnapshot) -> bool {
        quality.status == QualityStatus::Ok
            && self.distance_in_range(quality.distance_cm)
            && marker.framing_ok
            && !marker.detections.is_empty()
    }

    fn distance_advice(&self, distance_cm: Option<f32>) -> Option<String> {
        let d = distance_cm?;
        if d < self.targets.min_distance_cm {
            Some("Too close. Move back a little.".to_string())
        } else if d > self.targets.max_distance_cm {
            Some("Too far. Move closer.".to_string())
        } else {
            None
        }
    }

    fn verdict(&self, st: &CaptureState) -> SufficiencyVerdict {
        let t = &self.targets;
        let mut reasons = Vec::new();
        if st.good_captures < t.good_captures {
            reasons.push(format!(
                "Good captures {}/{}",
                st.good_captures, t.good_captures
            ));
        }
        let filled = filled_cells(&st.grid);
        if filled < t.grid_cells {
            reasons.push(format!("Grid coverage {}/{} cells", filled, t.grid_cells));
        }
        if t.require_cross_arch && !cross_complete(&st.cross, &t.phase) {
            reasons.push(format!(
                "Cross-arch captures {}/{} (high {}/{}, low {}/{})",
                st.cross.total,
                t.phase.cross_total,
                st.cross.high,
                t.phase.cross_high,
                st.cross.low,
                t.phase.cross_low
            ));
        }
        match &st.tracked {
            TrackedIds::Unlocked => {
                reasons.push("Tracked marker set not yet established".to_string());
            }
            TrackedIds::Locked(_) => {
                for (id, count) in &st.identity_counts {
                    if *count < t.per_identity {
                        reasons.push(format!("Marker {id} captured {count}/{}", t.per_identity));
                    }
                }
            }
        }
        SufficiencyVerdict {
            enough: reasons.is_empty(),
            reasons,
        }
    }
}

fn filled_cells(grid: &[u32; 9]) -> usize {
    grid.iter().filter(|&&c| c > 0).count()
}

fn sweep_progress(bins: &BinCounts, side: LateralBin, t: &CaptureTargets) -> SweepProgress {
    SweepProgress {
        mid: bins.at(side, HeightBin::Mid),
        high: bins.at(side, HeightBin::High),
        low: bins.at(side, HeightBin::Low),
        complete: sweep_complete(bins, side, &t.phase),
    }
}

fn quality_advice(status: QualityStatus) -> &'static str {
    match status {
        QualityStatus::Blur => "Hold steady.",
        QualityStatus::OverExposed => "Too bright. Reduce lighting.",
        QualityStatus::Specular => "Glare detected. Change the angle slightly.",
        QualityStatus::UnderExposed => "Too dark. Add light.",
        QualityStatus::Unknown => "Hold position.",
        QualityStatus::Ok => "Keep going.",
    }
}

fn total_cmp(a: f32, b: f32) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::TagDetection;
    use std::collections::BTreeMap;

    fn detection(id: u64, x: f32, y: f32) -> TagDetection {
        TagDetection {
            id,
            center: [x, y],
            corners: None,
            quality: Some(0.5),
        }
    }

    fn marker_snapshot(detections: Vec<TagDetection>) -> MarkerSnapshot {
        MarkerSnapshot {
            frame_width: 1000,
            frame_height: 1000,
            mode: crate::marker::DetectionMode::Block,
            detections,
            required: Vec::new(),
            missing: Vec::new(),
            framing_ok: true,
        }
    }

    fn good_quality() -> QualitySnapshot {
        QualitySnapshot {
            status: QualityStatus::Ok,
            blur_score: 400.0,
            distance_cm: Some(25.0),
        }
    }

    fn session_with(ids: &[u64]) -> MarkerSessionSummary {
        let mut visibility = BTreeMap::new();
        for &id in ids {
            visibility.insert(id, 10);
        }
        MarkerSessionSummary {
            frames_processed: 50,
            frames_all_required_visible: 50,
            visibility,
        }
    }

    #[test]
    fn gate_rejects_each_condition_independently() {
        let tracker = CaptureTracker::new(CaptureTargets::default());
        let session = session_with(&[1, 2, 3, 4]);
        let good_marker = marker_snapshot(vec![detection(1, 500.0, 500.0)]);

        let blurry = QualitySnapshot {
            status: QualityStatus::Blur,
            ..good_quality()
        };
        tracker.on_capture_saved(&good_marker, &blurry, &session);

        let too_far = QualitySnapshot {
            distance_cm: Some(45.0),
            ..good_quality()
        };
        tracker.on_capture_saved(&good_marker, &too_far, &session);

        let unknown_distance = QualitySnapshot {
            distance_cm: None,
            ..good_quality()
        };
        tracker.on_capture_saved(&good_marker, &unknown_distance, &session);

        let badly_framed = MarkerSnapshot {
            framing_ok: false,
            ..good_marker.clone()
        };
        tracker.on_capture_saved(&badly_framed, &good_quality(), &session);

        let empty = marker_snapshot(Vec::new());
        tracker.on_capture_saved(&empty, &good_quality(), &session);

        let manifest = tracker.build_manifest_summary();
        assert_eq!(manifest.good_captures, 0);
        assert_eq!(manifest.filled_cells, 0);
        assert!(manifest.identity_counts.values().all(|&c| c == 0));
    }

    #[test]
    fn good_capture_updates_grid_and_bins() {
        let tracker = CaptureTracker::new(CaptureTargets::default());
        let session = session_with(&[1, 2, 3, 4]);
        // Mean center (500, 150): center lateral, high row, cell 1.
        let marker = marker_snapshot(vec![
            detection(1, 400.0, 150.0),
            detection(2, 600.0, 150.0),
        ]);
        tracker.on_capture_saved(&marker, &good_quality(), &session);

        let manifest = tracker.build_manifest_summary();
        assert_eq!(manifest.good_captures, 1);
        assert_eq!(manifest.grid_counts.get("1"), Some(&1));
        assert_eq!(manifest.filled_cells, 1);
        assert_eq!(manifest.phases.anchor.high, 1);
        assert_eq!(manifest.current_phase, CapturePhase::Anchor);
    }

    #[test]
    fn cross_arch_requires_spread_and_both_sides() {
        let tracker = CaptureTracker::new(CaptureTargets::default());
        let session = session_with(&[1, 2, 3, 4]);

        // Wide spread with detections on both outer thirds.
        let wide = marker_snapshot(vec![
            detection(1, 100.0, 500.0),
            detection(2, 900.0, 500.0),
        ]);
        tracker.on_capture_saved(&wide, &good_quality(), &session);
        assert_eq!(tracker.build_manifest_summary().phases.cross_arch.total, 1);

        // Spread above the threshold but the left third stays empty.
        let one_sided = marker_snapshot(vec![
            detection(1, 340.0, 500.0),
            detection(2, 995.0, 500.0),
        ]);
        tracker.on_capture_saved(&one_sided, &good_quality(), &session);
        assert_eq!(tracker.build_manifest_summary().phases.cross_arch.total, 1);
    }

    #[test]
    fn stable_identities_lock_once_from_tally() {
        let targets = CaptureTargets {
            stable_identity_count: 2,
            ..Default::default()
        };
        let tracker = CaptureTracker::new(targets);

        // Only one distinct identity seen so far: no lock yet.
        let marker = marker_snapshot(vec![detection(7, 500.0, 500.0)]);
        tracker.on_capture_saved(&marker, &good_quality(), &session_with(&[7]));
        let manifest = tracker.build_manifest_summary();
        assert!(manifest.tracked_identities.is_empty());
        assert!(manifest
            .reasons_if_not_enough
            .contains(&"Tracked marker set not yet established".to_string()));

        // Two candidates available: lock and start counting.
        tracker.on_capture_saved(&marker, &good_quality(), &session_with(&[7, 9]));
        let manifest = tracker.build_manifest_summary();
        assert_eq!(manifest.tracked_identities, vec![7, 9]);
        assert_eq!(manifest.identity_counts.get(&7), Some(&1));
        // Tracked-but-absent identity keeps an explicit zero entry.
        assert_eq!(manifest.identity_counts.get(&9), Some(&0));

        // A tally that now favors other identities does not re-derive the
        // locked set.
        let mut skewed = BTreeMap::new();
        skewed.insert(11u64, 500u32);
        skewed.insert(13, 500);
        skewed.insert(7, 1);
        skewed.insert(9, 1);
        let session = MarkerSessionSummary {
            frames_processed: 600,
            frames_all_required_visible: 600,
            visibility: skewed,
        };
        tracker.on_capture_saved(&marker, &good_quality(), &session);
        assert_eq!(tracker.build_manifest_summary().tracked_identities, vec![7, 9]);
    }

    #[test]
    fn required_identities_are_tracked_and_reset_clears_counts() {
        let tracker = CaptureTracker::new(CaptureTargets::default());
        tracker.on_required_identities_changed(&[5, 3, 5]);
        let session = session_with(&[3, 5]);
        let marker = MarkerSnapshot {
            required: vec![3, 5],
            ..marker_snapshot(vec![detection(3, 500.0, 500.0)])
        };
        tracker.on_capture_saved(&marker, &good_quality(), &session);

        let manifest = tracker.build_manifest_summary();
        assert_eq!(manifest.tracked_identities, vec![3, 5]);
        assert_eq!(manifest.identity_counts.get(&3), Some(&1));
        assert_eq!(manifest.identity_counts.get(&5), Some(&0));

        tracker.reset_for_new_session();
        let manifest = tracker.build_manifest_summary();
        assert_eq!(manifest.good_captures, 0);
        assert_eq!(manifest.tracked_identities, vec![3, 5]);
        assert_eq!(manifest.identity_counts.get(&3), Some(&0));
    }

    #[test]
    fn verdict_reasons_keep_stable_order() {
        let targets = CaptureTargets {
            good_captures: 2,
            grid_cells: 2,
            per_identity: 1,
            ..Default::default()
        };
        let tracker = CaptureTracker::new(targets);
        tracker.on_required_identities_changed(&[4]);

        let verdict = tracker.is_enough();
        assert!(!verdict.enough);
        assert!(verdict.reasons[0].starts_with("Good captures"));
        assert!(verdict.reasons[1].starts_with("Grid coverage"));
        assert!(verdict.reasons[2].starts_with("Cross-arch captures"));
        assert!(verdict.reasons[3].starts_with("Marker 4"));
    }

    #[test]
    fn live_guidance_never_mutates_counters() {
        let tracker = CaptureTracker::new(CaptureTargets::default());
        let status = MarkerStatus::default();
        let quality = QualityResult::default();
        let before = tracker.build_manifest_summary();
        let hint = tracker.live_guidance(&status, &quality);
        assert_eq!(hint.phase, CapturePhase::Anchor);
        assert_eq!(hint.text, "No markers visible. Aim at the subject.");
        let after = tracker.build_manifest_summary();
        assert_eq!(before.good_captures, after.good_captures);
        assert_eq!(before.grid_counts, after.grid_counts);
    }

    #[test]
    fn sidecar_orders_detections_and_identities() {
        let tracker = CaptureTracker::new(CaptureTargets::default());
        let marker = marker_snapshot(vec![
            detection(9, 600.0, 500.0),
            detection(2, 700.0, 500.0),
            detection(9, 400.0, 500.0),
        ]);
        let sidecar = tracker.build_sidecar(&marker, &good_quality(), "tag36h11");
        assert_eq!(sidecar.detected_identities, vec![2, 9]);
        let order: Vec<(u64, f32)> = sidecar
            .detections
            .iter()
            .map(|d| (d.id, d.center_px[0]))
            .collect();
        assert_eq!(order, vec![(2, 700.0), (9, 400.0), (9, 600.0)]);
        assert!(sidecar.distance_ok);
        assert_eq!(sidecar.dictionary, "tag36h11");
        assert_eq!(sidecar.grid_cell, Some(4));
    }
}
