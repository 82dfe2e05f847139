use rod_tracker::axis::AxisLine;
use rod_tracker::edges::detect_edges;
use rod_tracker::image::io::{load_rgb_image, save_edge_map, write_json_file};
use rod_tracker::tracker::{RodParams, RodTracker};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct EdgesToolConfig {
    pub input: PathBuf,
    pub rod: RodParams,
    #[serde(default)]
    pub output: EdgesOutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EdgesOutputConfig {
    pub edge_image: Option<PathBuf>,
    pub axis_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<EdgesToolConfig, String> {
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

    let frame = load_rgb_image(&config.input)?;
    let luma = frame.as_view().luma();
    let edges = detect_edges(&luma, &config.rod.edge);
    println!(
        "{} edge pixels in a {}x{} frame",
        edges.edge_count(),
        edges.w,
        edges.h
    );

    let mut tracker = RodTracker::new(config.rod);
    let axis_found = tracker.update_axis(&edges);

    if let Some(path) = &config.output.edge_image {
        save_edge_map(&edges, path)?;
        println!("Saved edge map to {}", path.display());
    }
    if let Some(path) = &config.output.axis_json {
        let summary = AxisSummary {
            width: edges.w,
            height: edges.h,
            edge_count: edges.edge_count(),
            axis_found,
            axis: tracker.axis(),
        };
        write_json_file(path, &summary)?;
        println!("Saved axis summary to {}", path.display());
    }

    match tracker.axis() {
        Some(axis) => println!(
            "Axis through ({}, {}) and ({}, {})",
            axis.p0().x,
            axis.p0().y,
            axis.p1().x,
            axis.p1().y
        ),
        None => println!("No axis line found"),
    }

    Ok(())
}

fn usage() -> String {
    "Usage: rod_edges <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AxisSummary {
    width: usize,
    height: usize,
    edge_count: usize,
    axis_found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    axis: Option<AxisLine>,
}
