use capture_guide::image::OwnedFrame;

/// Generates a high-contrast block texture that scores as sharp.
pub fn textured_frame(width: usize, height: usize, cell: usize) -> OwnedFrame {
    assert!(width > 0 && height > 0, "frame dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut data = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let cx = (x / cell) as i32;
            let cy = (y / cell) as i32;
            let val = if (cx + cy) & 1 == 0 { 32u8 } else { 220u8 };
            data[y * width + x] = val;
        }
    }
    OwnedFrame::new(width, height, data)
}

/// Generates a uniform frame; reads as blurred at any realistic threshold.
pub fn flat_frame(width: usize, height: usize, value: u8) -> OwnedFrame {
    assert!(width > 0 && height > 0, "frame dimensions must be positive");
    OwnedFrame::new(width, height, vec![value; width * height])
}
