#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod geom;
pub mod guidance;
pub mod image;
pub mod marker;
pub mod quality;
pub mod status;

// --- High-level re-exports -------------------------------------------------

// Main entry points: per-frame analyzers + session trackers.
pub use crate::guidance::{
    CalibrationTargets, CalibrationTracker, CapturePhase, CaptureTargets, CaptureTracker,
    GuidanceHint, ManifestSummary, MarkerSnapshot, QualitySnapshot, SidecarSummary,
    SufficiencyVerdict,
};
pub use crate::marker::{
    DetectionMode, FiducialBackend, MarkerParams, MarkerScanner, MarkerStatus, TagDetection,
};
pub use crate::quality::{QualityAnalyzer, QualityParams, QualityResult, QualityStatus};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use capture_guide::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let luma = vec![0u8; w * h];
/// let frame = FrameView {
///     width: w,
///     height: h,
///     row_stride: w,
///     pixel_stride: 1,
///     data: &luma,
///     timestamp_us: 0,
/// };
///
/// let mut quality = QualityAnalyzer::new(QualityParams::default());
/// let mut markers = MarkerScanner::new(MarkerParams::default(), Box::new(NullBackend));
/// markers.set_mode(DetectionMode::Warn);
///
/// quality.analyze(&frame, None);
/// let status = markers.process(&frame);
/// println!("{} | {}", status.display, status.guidance);
/// # }
/// ```
pub mod prelude {
    pub use crate::guidance::{CalibrationTracker, CaptureTracker};
    pub use crate::image::{FrameView, OwnedFrame};
    pub use crate::marker::{DetectionMode, MarkerParams, MarkerScanner, NullBackend};
    pub use crate::quality::{QualityAnalyzer, QualityParams};
}
