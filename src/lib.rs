#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod tracker;
pub mod types;

// “Expert” modules – still public, but considered unstable internals.
// (You can tighten or feature-gate these later.)
pub mod axis;
pub mod edges;
pub mod hough;

// --- High-level re-exports -------------------------------------------------

// Main entry points: tracker + results.
pub use crate::tracker::{track_all, ColorModel, RodParams, RodTracker};
pub use crate::types::{GapSegment, Point, Region, TrackResult};

// High-level diagnostics returned by the tracker.
pub use crate::diagnostics::{CalibrationReport, SearchTier, TrackReport, TrackTrace};
pub use crate::error::CalibrationError;

// Axis estimation pieces that are generally useful on their own.
pub use crate::axis::AxisLine;
pub use crate::hough::{strongest_line, HoughParams, PolarLine};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use rod_tracker::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let rgb = vec![0u8; 3 * w * h];
/// let frame = ImageRgb8::new(w, h, &rgb);
///
/// let mut tracker = RodTracker::new(RodParams::new(Region::new(0, 80, 640, 60)));
/// tracker.calibrate(&[frame]).expect("calibration");
///
/// let result = tracker.process(&frame);
/// println!("found={} x={} latency_ms={:.3}", result.found, result.position, result.latency_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageRgb8;
    pub use crate::{Region, RodParams, RodTracker, TrackResult};
}
