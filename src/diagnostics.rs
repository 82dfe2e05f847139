//! Structured reports for tooling and debugging.
//!
//! Everything here serializes to camelCase JSON so the command-line tools
//! can dump reports straight to disk.

use serde::Serialize;
use std::time::Duration;

use crate::axis::AxisLine;
use crate::types::TrackResult;

/// Which search strategy produced the accepted gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchTier {
    /// Window around the previous position plus right-edge verification.
    Locality,
    /// Exhaustive width-matched sweep across the frame.
    FullScan,
}

/// Wall-clock time of one named pipeline stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub ms: f64,
}

/// Ordered stage timings for one processed frame.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: &str, elapsed: Duration) {
        self.stages.push(StageTiming {
            label: label.to_string(),
            ms: elapsed.as_secs_f64() * 1000.0,
        });
    }

    pub fn total_ms(&self) -> f64 {
        self.stages.iter().map(|s| s.ms).sum()
    }
}

/// Dimensions of the processed frame.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Intermediate state captured while processing one frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackTrace {
    pub input: InputDescriptor,
    /// Surviving pixels in the thinned edge map.
    pub edge_pixels: usize,
    /// Whether this frame refreshed the axis (false means a stale or absent
    /// axis was carried).
    pub axis_updated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<AxisLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<SearchTier>,
    pub timings: TimingBreakdown,
}

/// Tracking outcome together with its trace.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackReport {
    pub result: TrackResult,
    pub trace: TrackTrace,
}

/// Summary of a calibration run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationReport {
    /// Calibrated gap width in pixels.
    pub gap_px: u32,
    /// Spacing samples collected across all usable frames.
    pub samples: usize,
    /// Reference frames that yielded an axis.
    pub frames_used: usize,
    pub frames_total: usize,
    pub elapsed_ms: f64,
}
