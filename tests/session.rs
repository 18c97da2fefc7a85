use capture_guide::guidance::{
    CalibrationTargets, CalibrationTracker, CapturePhase, CaptureTargets, CaptureTracker,
    ManifestSummary, MarkerSnapshot, QualitySnapshot,
};
use capture_guide::marker::{DetectionMode, MarkerSessionSummary, TagDetection};
use capture_guide::quality::QualityStatus;
use std::collections::BTreeMap;

const FRAME_W: usize = 1000;
const FRAME_H: usize = 1000;

fn detection_at(id: u64, nx: f32, ny: f32) -> TagDetection {
    TagDetection {
        id,
        center: [nx * FRAME_W as f32, ny * FRAME_H as f32],
        corners: None,
        quality: Some(0.4),
    }
}

/// Snapshot with one detection centered at the given normalized position.
fn snapshot_at(nx: f32, ny: f32) -> MarkerSnapshot {
    MarkerSnapshot {
        frame_width: FRAME_W,
        frame_height: FRAME_H,
        mode: DetectionMode::Block,
        detections: vec![detection_at(1, nx, ny)],
        required: Vec::new(),
        missing: Vec::new(),
        framing_ok: true,
    }
}

fn good_quality() -> QualitySnapshot {
    QualitySnapshot {
        status: QualityStatus::Ok,
        blur_score: 500.0,
        distance_cm: Some(25.0),
    }
}

fn session_summary(ids: &[u64]) -> MarkerSessionSummary {
    let mut visibility = BTreeMap::new();
    for &id in ids {
        visibility.insert(id, 20);
    }
    MarkerSessionSummary {
        frames_processed: 100,
        frames_all_required_visible: 90,
        visibility,
    }
}

fn assert_counters_monotonic(before: &ManifestSummary, after: &ManifestSummary) {
    assert!(after.good_captures >= before.good_captures);
    for (cell, count) in &before.grid_counts {
        assert!(
            after.grid_counts.get(cell).copied().unwrap_or(0) >= *count,
            "grid cell {cell} decreased"
        );
    }
    for (id, count) in &before.identity_counts {
        assert!(
            after.identity_counts.get(id).copied().unwrap_or(0) >= *count,
            "identity {id} count decreased"
        );
    }
}

#[test]
fn counters_never_exceed_qualifying_captures() {
    let tracker = CaptureTracker::new(CaptureTargets::default());
    let session = session_summary(&[1, 2, 3, 4]);

    let mut qualifying = 0u32;
    let mut previous = tracker.build_manifest_summary();
    for step in 0..20 {
        if step % 3 == 2 {
            // Every third commit fails the gate (blurred frame).
            let blurred = QualitySnapshot {
                status: QualityStatus::Blur,
                ..good_quality()
            };
            tracker.on_capture_saved(&snapshot_at(0.5, 0.5), &blurred, &session);
        } else {
            let nx = 0.1 + 0.08 * (step % 9) as f32;
            tracker.on_capture_saved(&snapshot_at(nx, 0.5), &good_quality(), &session);
            qualifying += 1;
        }
        let current = tracker.build_manifest_summary();
        assert_counters_monotonic(&previous, &current);
        assert_eq!(current.good_captures, qualifying);
        let grid_total: u32 = current.grid_counts.values().sum();
        assert_eq!(grid_total, qualifying);
        assert!(current
            .identity_counts
            .values()
            .all(|&c| c <= qualifying));
        previous = current;
    }
}

#[test]
fn phases_complete_in_order_and_stay_complete() {
    let targets = CaptureTargets {
        require_cross_arch: true,
        ..Default::default()
    };
    let tracker = CaptureTracker::new(targets);
    let session = session_summary(&[1, 2, 3, 4]);

    // Anchor: center/left/right at mid height, then high and low rows.
    let anchor_plan = [
        (0.5, 0.5),
        (0.5, 0.5),
        (0.1, 0.5),
        (0.1, 0.5),
        (0.9, 0.5),
        (0.9, 0.5),
        (0.5, 0.1),
        (0.5, 0.1),
        (0.5, 0.9),
        (0.5, 0.9),
    ];
    // Left sweep tops up the left column, right sweep mirrors it.
    let left_plan = [
        (0.1, 0.5),
        (0.1, 0.5),
        (0.1, 0.5),
        (0.1, 0.1),
        (0.1, 0.1),
        (0.1, 0.1),
        (0.1, 0.9),
        (0.1, 0.9),
        (0.1, 0.9),
    ];
    let right_plan = [
        (0.9, 0.5),
        (0.9, 0.5),
        (0.9, 0.5),
        (0.9, 0.1),
        (0.9, 0.1),
        (0.9, 0.1),
        (0.9, 0.9),
        (0.9, 0.9),
        (0.9, 0.9),
    ];

    let mut seen_phases = Vec::new();
    let mut run = |plan: &[(f32, f32)]| {
        for &(nx, ny) in plan {
            tracker.on_capture_saved(&snapshot_at(nx, ny), &good_quality(), &session);
            let manifest = tracker.build_manifest_summary();
            seen_phases.push(manifest.current_phase);
            // Once a phase reports complete it must stay complete.
            let phases = &manifest.phases;
            if manifest.current_phase > CapturePhase::Anchor {
                assert!(phases.anchor.complete);
            }
            if manifest.current_phase > CapturePhase::LeftSweep {
                assert!(phases.left_sweep.complete);
            }
            if manifest.current_phase > CapturePhase::RightSweep {
                assert!(phases.right_sweep.complete);
            }
        }
    };
    run(&anchor_plan);
    run(&left_plan);
    run(&right_plan);

    // Cross-arch captures: wide baseline with both sides present, split
    // between the high and low rows.
    for i in 0..6 {
        let ny = if i % 2 == 0 { 0.1 } else { 0.9 };
        let wide = MarkerSnapshot {
            detections: vec![detection_at(1, 0.05, ny), detection_at(2, 0.95, ny)],
            ..snapshot_at(0.5, ny)
        };
        tracker.on_capture_saved(&wide, &good_quality(), &session);
        seen_phases.push(tracker.build_manifest_summary().current_phase);
    }

    // The observed phase sequence never moves backwards.
    for pair in seen_phases.windows(2) {
        assert!(pair[0] <= pair[1], "phase regressed: {pair:?}");
    }
    assert_eq!(
        tracker.build_manifest_summary().current_phase,
        CapturePhase::Cleanup
    );
}

#[test]
fn calibration_sufficiency_end_to_end() {
    let targets = CalibrationTargets {
        good_captures: 2,
        grid_cells: 2,
        ..Default::default()
    };
    let tracker = CalibrationTracker::new(targets);

    tracker.on_capture_saved(&snapshot_at(0.1, 0.1), &good_quality());
    let verdict = tracker.is_enough();
    assert!(!verdict.enough);
    assert!(!verdict.reasons.is_empty());

    tracker.on_capture_saved(&snapshot_at(0.5, 0.5), &good_quality());
    let verdict = tracker.is_enough();
    assert!(verdict.enough, "reasons: {:?}", verdict.reasons);
    assert!(verdict.reasons.is_empty());

    // A third capture in an already-covered cell raises the count but not
    // the coverage.
    tracker.on_capture_saved(&snapshot_at(0.1, 0.1), &good_quality());
    let summary = tracker.build_summary();
    assert_eq!(summary.good_captures, 3);
    assert_eq!(summary.filled_cells, 2);
    assert_eq!(summary.grid_counts.get("0"), Some(&2));
    assert_eq!(summary.grid_counts.get("4"), Some(&1));
    assert!(summary.enough);
}

#[test]
fn manifest_round_trips_through_json() {
    let targets = CaptureTargets {
        stable_identity_count: 2,
        ..Default::default()
    };
    let tracker = CaptureTracker::new(targets);
    let session = session_summary(&[5, 9]);

    let positions = [(0.1, 0.1), (0.5, 0.5), (0.9, 0.9), (0.5, 0.5)];
    for &(nx, ny) in &positions {
        let snapshot = MarkerSnapshot {
            detections: vec![detection_at(5, nx, ny), detection_at(9, nx, ny)],
            ..snapshot_at(nx, ny)
        };
        tracker.on_capture_saved(&snapshot, &good_quality(), &session);
    }

    let manifest = tracker.build_manifest_summary();
    let json = serde_json::to_string(&manifest).expect("serialize manifest");
    let restored: ManifestSummary = serde_json::from_str(&json).expect("parse manifest");

    assert_eq!(restored.good_captures, manifest.good_captures);
    assert_eq!(restored.grid_counts, manifest.grid_counts);
    assert_eq!(restored.identity_counts, manifest.identity_counts);
    assert_eq!(restored.filled_cells, manifest.filled_cells);
    assert_eq!(restored.tracked_identities, manifest.tracked_identities);
    assert_eq!(
        restored.reasons_if_not_enough,
        manifest.reasons_if_not_enough
    );

    // Spot-check the wire contract: camelCase keys and "0".."8" grid keys.
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse value");
    assert!(value.get("gridCounts").is_some());
    assert!(value.get("reasonsIfNotEnough").is_some());
    assert_eq!(value["gridCounts"]["0"], 1);
    assert_eq!(value["gridCounts"]["4"], 2);
}

#[test]
fn sufficiency_reached_with_small_targets() {
    let targets = CaptureTargets {
        good_captures: 3,
        grid_cells: 2,
        per_identity: 1,
        require_cross_arch: false,
        stable_identity_count: 1,
        ..Default::default()
    };
    let tracker = CaptureTracker::new(targets);
    let session = session_summary(&[5]);

    tracker.on_capture_saved(&snapshot_at(0.1, 0.1), &good_quality(), &session);
    assert!(!tracker.is_enough().enough);

    let with_id5 = MarkerSnapshot {
        detections: vec![detection_at(5, 0.5, 0.5)],
        ..snapshot_at(0.5, 0.5)
    };
    tracker.on_capture_saved(&with_id5, &good_quality(), &session);
    tracker.on_capture_saved(&with_id5, &good_quality(), &session);

    let verdict = tracker.is_enough();
    assert!(verdict.enough, "reasons: {:?}", verdict.reasons);
}
