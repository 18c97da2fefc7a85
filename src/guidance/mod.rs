//! Capture guidance state machines.
//!
//! Overview
//! - Aggregates statistics only over frames the operator actually commits,
//!   never over every analyzed frame; [`MarkerSnapshot`]/[`QualitySnapshot`]
//!   freeze the live state at commit time so counter updates cannot race the
//!   next frame.
//! - [`CaptureTracker`] drives multi-phase capture sessions: anchor views,
//!   left/right sweeps, wide cross-arch baselines, then cleanup. The current
//!   phase is derived from the counters; it is never stored.
//! - [`CalibrationTracker`] is the single-phase variant tracking only grid
//!   coverage and a good-capture count.
//! - All mutation and reads of one tracker run under a single exclusive
//!   section, so a capture's counter update is atomic with respect to a
//!   concurrent live-guidance read.

mod calibration;
mod capture;
mod phase;
mod snapshot;
mod summary;
mod targets;

pub use calibration::CalibrationTracker;
pub use capture::{CaptureTracker, GuidanceHint, SufficiencyVerdict};
pub use phase::CapturePhase;
pub use snapshot::{MarkerSnapshot, QualitySnapshot};
pub use summary::{
    AnchorProgress, CalibrationSummary, CrossArchProgress, ManifestSummary, PhaseBreakdown,
    SidecarDetection, SidecarSummary, SweepProgress, TargetSummary,
};
pub use targets::{CalibrationTargets, CaptureTargets, PhaseTargets};
