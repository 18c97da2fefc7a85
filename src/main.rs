use capture_guide::image::FrameView;
use capture_guide::marker::{DetectionMode, MarkerParams, MarkerScanner, NullBackend};
use capture_guide::quality::{QualityAnalyzer, QualityParams};

fn main() {
    // Demo stub: creates a fake luma buffer and runs both analyzers once
    let w = 640usize;
    let h = 480usize;
    let luma = vec![0u8; w * h];
    let frame = FrameView {
        width: w,
        height: h,
        row_stride: w,
        pixel_stride: 1,
        data: &luma,
        timestamp_us: 0,
    };

    let mut quality = QualityAnalyzer::new(QualityParams::default());
    let mut markers = MarkerScanner::new(MarkerParams::default(), Box::new(NullBackend));
    markers.set_mode(DetectionMode::Warn);

    if let Some(result) = quality.analyze(&frame, None) {
        println!(
            "quality={} blur={:.1} over={:.4} under={:.4}",
            result.status.as_str(),
            result.blur_score,
            result.over_fraction,
            result.under_fraction
        );
    }
    let status = markers.process(&frame);
    println!("markers: {} | {}", status.display, status.guidance);
}
