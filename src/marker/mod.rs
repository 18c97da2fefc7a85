//! Fiducial marker detection adapter.
//!
//! Overview
//! - Extracts a centered ROI from each frame and subsamples it by an integer
//!   step into a scanner-owned working buffer.
//! - Runs a pluggable [`FiducialBackend`] on the reduced buffer and remaps
//!   detections back to full-frame coordinates.
//! - Tracks required identities, framing validity and a session-wide
//!   per-identity visibility tally.
//! - Publishes a complete [`MarkerStatus`] per frame through an atomic
//!   handoff for a concurrent UI reader.

mod backend;
mod params;
mod scanner;
mod types;

pub use backend::{BackendDetection, FiducialBackend, NullBackend, Point2f};
pub use params::MarkerParams;
pub use scanner::MarkerScanner;
pub use types::{DetectionMode, MarkerSessionSummary, MarkerStatus, TagDetection};
