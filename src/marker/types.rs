use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How detection results gate the capture UI. The scanner itself behaves the
/// same under `Warn` and `Block`; the distinction is carried through to the
/// caller and the sidecar record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DetectionMode {
    #[default]
    Off,
    Warn,
    Block,
}

impl DetectionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DetectionMode::Off => "off",
            DetectionMode::Warn => "warn",
            DetectionMode::Block => "block",
        }
    }
}

/// One detected fiducial in full-frame pixel coordinates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TagDetection {
    /// Decoded tag identity.
    pub id: u64,
    /// Center (x, y) in full-frame pixels.
    pub center: [f32; 2],
    /// Ordered outline corners in full-frame pixels, at least 4 when present.
    pub corners: Option<Vec<[f32; 2]>>,
    /// Area-based quality proxy in [0, 1].
    pub quality: Option<f32>,
}

/// Complete per-frame marker state. One instance replaces the previous one
/// each frame via an atomic swap; fields are never mutated after publication.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStatus {
    pub timestamp_us: i64,
    pub mode: DetectionMode,
    pub frame_width: usize,
    pub frame_height: usize,
    pub detections: Vec<TagDetection>,
    /// Required identities, deduplicated and sorted ascending.
    pub required: Vec<u64>,
    /// Required identities absent this frame, in required-list order.
    pub missing: Vec<u64>,
    pub all_required_visible: bool,
    pub framing_ok: bool,
    /// Operator-facing instruction for this frame.
    pub guidance: String,
    /// Short display string (e.g. "3/4 markers").
    pub display: String,
}

/// Session-wide detection aggregates maintained by the scanner.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSessionSummary {
    /// Frames that went through active detection.
    pub frames_processed: u64,
    /// Frames where every required identity was simultaneously visible.
    pub frames_all_required_visible: u64,
    /// Per-identity visibility counts across the session.
    pub visibility: BTreeMap<u64, u32>,
}
