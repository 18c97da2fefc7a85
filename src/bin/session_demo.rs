//! Runs the capture pipeline over a directory of grayscale images.
//!
//! Usage: `session_demo <image-dir> [--config config.json] [--json manifest.json]`
//!
//! Every image is treated as one frame arriving at 10 fps. Frames are scored,
//! committed as captures, and the final manifest is printed or written to
//! disk. Without a real fiducial backend no detections are reported, so the
//! manifest shows which sufficiency conditions remain unmet.

use capture_guide::config::{load_config, SessionConfig};
use capture_guide::guidance::{CaptureTracker, MarkerSnapshot, QualitySnapshot};
use capture_guide::image::io::{load_grayscale_frame, write_json_file};
use capture_guide::marker::{DetectionMode, MarkerScanner, NullBackend};
use capture_guide::quality::QualityAnalyzer;
use std::env;
use std::path::{Path, PathBuf};

const FRAME_INTERVAL_US: i64 = 100_000;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

struct CliArgs {
    image_dir: PathBuf,
    config_path: Option<PathBuf>,
    json_out: Option<PathBuf>,
}

fn parse_cli() -> Result<CliArgs, String> {
    let mut args = env::args().skip(1);
    let image_dir = args
        .next()
        .ok_or_else(|| "usage: session_demo <image-dir> [--config FILE] [--json FILE]".to_string())?;
    let mut parsed = CliArgs {
        image_dir: PathBuf::from(image_dir),
        config_path: None,
        json_out: None,
    };
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--config" => {
                let value = args.next().ok_or("--config requires a path")?;
                parsed.config_path = Some(PathBuf::from(value));
            }
            "--json" => {
                let value = args.next().ok_or("--json requires a path")?;
                parsed.json_out = Some(PathBuf::from(value));
            }
            other => return Err(format!("Unknown argument: {other}")),
        }
    }
    Ok(parsed)
}

fn run() -> Result<(), String> {
    let cli = parse_cli()?;
    let config = match &cli.config_path {
        Some(path) => load_config(path)?,
        None => SessionConfig::default(),
    };

    let mut images = list_images(&cli.image_dir)?;
    images.sort();
    if images.is_empty() {
        return Err(format!("No images found in {}", cli.image_dir.display()));
    }

    let mut quality = QualityAnalyzer::new(config.quality.clone());
    let mut markers = MarkerScanner::new(config.marker.clone(), Box::new(NullBackend));
    markers.set_mode(DetectionMode::Warn);
    let tracker = CaptureTracker::new(config.capture.clone());

    for (index, path) in images.iter().enumerate() {
        let frame = load_grayscale_frame(path)?;
        let timestamp_us = index as i64 * FRAME_INTERVAL_US;
        let view = frame.as_view(timestamp_us);

        let result = quality.analyze(&view, None);
        let status = markers.process(&view);
        let hint = tracker.live_guidance(&status, &quality.latest());

        match &result {
            Some(q) => println!(
                "{}: quality={} blur={:.1} | {} | phase={} {}",
                path.display(),
                q.status.as_str(),
                q.blur_score,
                status.display,
                hint.phase.as_str(),
                hint.text
            ),
            None => println!("{}: dropped", path.display()),
        }

        // Commit every analyzed frame; the tracker's gate decides whether it
        // counts toward session statistics.
        if let Some(q) = result {
            tracker.on_capture_saved(
                &MarkerSnapshot::from_status(&status),
                &QualitySnapshot::from_result(&q),
                &markers.session_summary(),
            );
        }
    }

    let manifest = tracker.build_manifest_summary();
    println!("\nSession summary");
    println!("  good captures: {}", manifest.good_captures);
    println!("  filled cells: {}/9", manifest.filled_cells);
    println!("  current phase: {}", manifest.current_phase.as_str());
    println!("  enough: {}", manifest.enough);
    for reason in &manifest.reasons_if_not_enough {
        println!("  - {reason}");
    }

    if let Some(path) = &cli.json_out {
        write_json_file(path, &manifest)?;
        println!("\nManifest written to {}", path.display());
    }

    Ok(())
}

fn list_images(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries =
        std::fs::read_dir(dir).map_err(|e| format!("Failed to read {}: {e}", dir.display()))?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read {}: {e}", dir.display()))?;
        let path = entry.path();
        let is_image = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "png" | "jpg" | "jpeg"))
            .unwrap_or(false);
        if is_image {
            paths.push(path);
        }
    }
    Ok(paths)
}
