//! Spatial binning helpers shared by the analyzers and guidance trackers.
//!
//! All classification runs on normalized coordinates in [0, 1]. The frame is
//! split into thirds per axis using the literal thresholds [`BIN_LOWER`] and
//! [`BIN_UPPER`]; intervals are half-open and closed from below, so a value
//! exactly on a boundary lands in the upper adjacent bin.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lower third boundary for lateral/height/grid classification.
pub const BIN_LOWER: f32 = 0.333333;
/// Upper third boundary for lateral/height/grid classification.
pub const BIN_UPPER: f32 = 0.666666;

/// Horizontal third of the frame a detection centroid falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LateralBin {
    Left,
    Center,
    Right,
}

impl LateralBin {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            LateralBin::Left => 0,
            LateralBin::Center => 1,
            LateralBin::Right => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LateralBin::Left => "left",
            LateralBin::Center => "center",
            LateralBin::Right => "right",
        }
    }
}

/// Vertical third of the frame a detection centroid falls into. `High` is the
/// top third in image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeightBin {
    High,
    Mid,
    Low,
}

impl HeightBin {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            HeightBin::High => 0,
            HeightBin::Mid => 1,
            HeightBin::Low => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HeightBin::High => "high",
            HeightBin::Mid => "mid",
            HeightBin::Low => "low",
        }
    }
}

/// Normalizes a pixel coordinate into [0, 1] for a given frame extent.
#[inline]
pub fn normalize_coord(value: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    (value / extent).clamp(0.0, 1.0)
}

/// Third index for a normalized coordinate: 0 below [`BIN_LOWER`], 1 below
/// [`BIN_UPPER`], else 2.
#[inline]
pub fn third_index(n: f32) -> usize {
    if n < BIN_LOWER {
        0
    } else if n < BIN_UPPER {
        1
    } else {
        2
    }
}

/// Maps a normalized point to one of 9 grid cells, row-major:
/// `cell = row * 3 + col`, `row = cell / 3`, `col = cell % 3`.
#[inline]
pub fn grid_cell(nx: f32, ny: f32) -> usize {
    third_index(ny) * 3 + third_index(nx)
}

/// Row/column position of a grid cell index (row-major, 3×3).
#[inline]
pub fn grid_row_col(cell: usize) -> (usize, usize) {
    (cell / 3, cell % 3)
}

#[inline]
pub fn lateral_bin(nx: f32) -> LateralBin {
    match third_index(nx) {
        0 => LateralBin::Left,
        1 => LateralBin::Center,
        _ => LateralBin::Right,
    }
}

#[inline]
pub fn height_bin(ny: f32) -> HeightBin {
    match third_index(ny) {
        0 => HeightBin::High,
        1 => HeightBin::Mid,
        _ => HeightBin::Low,
    }
}

/// Mean of a set of pixel-space centers, `None` when empty.
pub fn mean_center(centers: &[[f32; 2]]) -> Option<[f32; 2]> {
    if centers.is_empty() {
        return None;
    }
    let mut sx = 0.0f32;
    let mut sy = 0.0f32;
    for c in centers {
        sx += c[0];
        sy += c[1];
    }
    let n = centers.len() as f32;
    Some([sx / n, sy / n])
}

/// Horizontal spread of detection centers as a fraction of the frame width.
pub fn horizontal_spread(centers: &[[f32; 2]], frame_width: f32) -> f32 {
    if centers.len() < 2 || frame_width <= 0.0 {
        return 0.0;
    }
    let mut min_x = f32::MAX;
    let mut max_x = f32::MIN;
    for c in centers {
        min_x = min_x.min(c[0]);
        max_x = max_x.max(c[0]);
    }
    ((max_x - min_x) / frame_width).max(0.0)
}

/// True when detections are present in both the left and the right third of
/// the frame simultaneously.
pub fn spans_both_sides(centers: &[[f32; 2]], frame_width: f32) -> bool {
    if frame_width <= 0.0 {
        return false;
    }
    let mut left = false;
    let mut right = false;
    for c in centers {
        let nx = normalize_coord(c[0], frame_width);
        if nx < BIN_LOWER {
            left = true;
        } else if nx >= BIN_UPPER {
            right = true;
        }
    }
    left && right
}

/// Picks the `n` most frequently seen identities from a visibility tally,
/// ordered by descending frequency, then ascending identity. Returns exactly
/// `min(n, distinct)` identities and is stable across repeated calls.
pub fn choose_stable_identities(tally: &BTreeMap<u64, u32>, n: usize) -> Vec<u64> {
    let mut entries: Vec<(u64, u32)> = tally.iter().map(|(&id, &c)| (id, c)).collect();
    // BTreeMap iteration is ascending by id; a stable sort on count keeps
    // identity order for ties.
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.into_iter().take(n).map(|(id, _)| id).collect()
}

/// Centered region of interest: `fraction` of each dimension with a per-side
/// minimum, clamped to the frame. Returns `(x0, y0, width, height)`.
pub fn centered_roi(
    width: usize,
    height: usize,
    fraction: f32,
    min_px: usize,
) -> (usize, usize, usize, usize) {
    let rw = ((width as f32 * fraction) as usize).max(min_px).min(width);
    let rh = ((height as f32 * fraction) as usize).max(min_px).min(height);
    let x0 = (width - rw) / 2;
    let y0 = (height - rh) / 2;
    (x0, y0, rw, rh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_cell_corners_and_center() {
        assert_eq!(grid_cell(0.0, 0.0), 0);
        assert_eq!(grid_cell(0.5, 0.5), 4);
        assert_eq!(grid_cell(0.99, 0.99), 8);
    }

    #[test]
    fn grid_cell_boundaries_land_in_upper_cell() {
        // Boundary values are not < the threshold, so they belong to the
        // upper adjacent bin of the half-open interval.
        assert_eq!(grid_cell(0.333333, 0.0), 1);
        assert_eq!(grid_cell(0.666666, 0.0), 2);
        assert_eq!(grid_cell(0.0, 0.333333), 3);
        assert_eq!(grid_cell(0.0, 0.666666), 6);
    }

    #[test]
    fn grid_row_col_is_row_major() {
        assert_eq!(grid_row_col(0), (0, 0));
        assert_eq!(grid_row_col(4), (1, 1));
        assert_eq!(grid_row_col(7), (2, 1));
    }

    #[test]
    fn lateral_and_height_bins() {
        assert_eq!(lateral_bin(0.1), LateralBin::Left);
        assert_eq!(lateral_bin(0.5), LateralBin::Center);
        assert_eq!(lateral_bin(0.9), LateralBin::Right);
        assert_eq!(height_bin(0.1), HeightBin::High);
        assert_eq!(height_bin(0.5), HeightBin::Mid);
        assert_eq!(height_bin(0.9), HeightBin::Low);
    }

    #[test]
    fn spread_and_bilateral_presence() {
        let centers = [[10.0f32, 50.0], [90.0, 50.0]];
        let spread = horizontal_spread(&centers, 100.0);
        assert!((spread - 0.8).abs() < 1e-6, "spread={spread}");
        assert!(spans_both_sides(&centers, 100.0));

        let clustered = [[45.0f32, 50.0], [55.0, 50.0]];
        assert!(!spans_both_sides(&clustered, 100.0));
    }

    #[test]
    fn stable_identities_by_frequency_then_id() {
        let mut tally = BTreeMap::new();
        tally.insert(7u64, 5u32);
        tally.insert(3, 9);
        tally.insert(11, 5);
        tally.insert(2, 1);

        let picked = choose_stable_identities(&tally, 3);
        assert_eq!(picked, vec![3, 7, 11]);

        // Idempotent across repeated calls with the same tally.
        assert_eq!(choose_stable_identities(&tally, 3), picked);
        // Exactly min(n, distinct).
        assert_eq!(choose_stable_identities(&tally, 10).len(), 4);
    }

    #[test]
    fn centered_roi_respects_minimum() {
        let (x0, y0, w, h) = centered_roi(640, 480, 0.4, 64);
        assert_eq!((w, h), (256, 192));
        assert_eq!((x0, y0), (192, 144));

        let (_, _, w, h) = centered_roi(100, 100, 0.4, 64);
        assert_eq!((w, h), (64, 64));

        let (x0, y0, w, h) = centered_roi(50, 50, 0.4, 64);
        assert_eq!((x0, y0, w, h), (0, 0, 50, 50));
    }
}
