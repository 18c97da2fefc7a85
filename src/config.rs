//! Session configuration aggregating all tunables, loadable from JSON.

use crate::guidance::{CalibrationTargets, CaptureTargets};
use crate::marker::MarkerParams;
use crate::quality::QualityParams;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// All knobs for one guided capture session.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    pub quality: QualityParams,
    pub marker: MarkerParams,
    pub capture: CaptureTargets,
    pub calibration: CalibrationTargets,
}

/// Loads a [`SessionConfig`] from a JSON file. Missing fields fall back to
/// their defaults.
pub fn load_config(path: &Path) -> Result<SessionConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: SessionConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}
