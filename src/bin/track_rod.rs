use rod_tracker::diagnostics::{CalibrationReport, TrackReport};
use rod_tracker::image::io::{load_rgb_image, write_json_file};
use rod_tracker::tracker::{RodParams, RodTracker};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct TrackToolConfig {
    pub rod: RodParams,
    pub reference_frames: Vec<PathBuf>,
    #[serde(default)]
    pub frames: Vec<PathBuf>,
    pub output: TrackOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct TrackOutputConfig {
    pub results_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<TrackToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mut tracker = RodTracker::new(config.rod.clone());

    let mut reference = Vec::with_capacity(config.reference_frames.len());
    for path in &config.reference_frames {
        reference.push(load_rgb_image(path)?);
    }
    let views: Vec<_> = reference.iter().map(|f| f.as_view()).collect();
    let calibration = tracker
        .calibrate(&views)
        .map_err(|e| format!("Calibration failed: {e}"))?;
    println!(
        "Calibrated gap {}px from {} samples ({}/{} frames)",
        calibration.gap_px, calibration.samples, calibration.frames_used, calibration.frames_total
    );

    let mut reports = Vec::with_capacity(config.frames.len());
    for path in &config.frames {
        let frame = load_rgb_image(path)?;
        let report = tracker.process_with_diagnostics(&frame.as_view());
        println!(
            "{}: x={} found={} ({:.2} ms)",
            path.display(),
            report.result.position,
            report.result.found,
            report.result.latency_ms
        );
        reports.push(report);
    }

    let summary = TrackRunSummary {
        label: config.rod.label.clone(),
        gap_px: calibration.gap_px,
        frames: reports.len(),
        hits: reports.iter().filter(|r| r.result.found).count(),
        calibration,
        reports,
    };
    write_json_file(&config.output.results_json, &summary)?;
    println!(
        "Saved {} frame reports to {}",
        summary.frames,
        config.output.results_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: track_rod <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TrackRunSummary {
    label: String,
    gap_px: u32,
    frames: usize,
    hits: usize,
    calibration: CalibrationReport,
    reports: Vec<TrackReport>,
}
