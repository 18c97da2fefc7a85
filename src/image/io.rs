//! I/O helpers for grayscale frames and JSON.
//!
//! - `load_grayscale_frame`: read a PNG/JPEG/etc. into an owned 8-bit luma buffer.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::OwnedFrame;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to an 8-bit luma frame.
pub fn load_grayscale_frame(path: &Path) -> Result<OwnedFrame, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(OwnedFrame::new(width, height, data))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}
