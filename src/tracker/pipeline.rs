//! Stateful per-rod tracking pipeline.
//!
//! A [`RodTracker`] owns everything that persists between frames: the rod
//! parameters, the most recent axis line, the calibrated gap width and the
//! last reported position. Frames flow through
//! [`process`](RodTracker::process) (edges, axis refresh, gap search) or,
//! when the caller already has an edge map and calibration, through
//! [`update_axis`](RodTracker::update_axis) and [`track`](RodTracker::track)
//! directly.

use log::debug;
use std::time::Instant;

use crate::axis::AxisLine;
use crate::diagnostics::{
    CalibrationReport, InputDescriptor, SearchTier, TimingBreakdown, TrackReport, TrackTrace,
};
use crate::edges::{detect_edges, EdgeMap};
use crate::error::CalibrationError;
use crate::hough::strongest_line;
use crate::image::ImageRgb8;
use crate::types::{GapSegment, Point, TrackResult};

use super::calibrate::{collect_gap_samples, mode_gap};
use super::params::RodParams;
use super::search::{full_scan, locality_search, ColumnProbe};

/// Tracks one rod's gap position across a frame sequence.
pub struct RodTracker {
    params: RodParams,
    axis: Option<AxisLine>,
    gap_width: Option<u32>,
    last_position: i32,
}

impl RodTracker {
    pub fn new(params: RodParams) -> Self {
        Self {
            params,
            axis: None,
            gap_width: None,
            last_position: 0,
        }
    }

    pub fn params(&self) -> &RodParams {
        &self.params
    }

    /// Current axis line, if any frame has established one.
    pub fn axis(&self) -> Option<AxisLine> {
        self.axis
    }

    /// Calibrated gap width in pixels, once calibration has run.
    pub fn gap_width(&self) -> Option<u32> {
        self.gap_width
    }

    /// Restore a previously calibrated gap width without rerunning
    /// calibration.
    pub fn set_gap_width(&mut self, width: u32) {
        self.gap_width = Some(width);
    }

    /// Most recently reported left-edge position.
    pub fn last_position(&self) -> i32 {
        self.last_position
    }

    /// Re-estimate the axis line from an edge map.
    ///
    /// Returns `true` when the axis was refreshed. On any failure (region
    /// outside the map, too little support, vertical candidate) the previous
    /// axis is kept and `false` is returned.
    pub fn update_axis(&mut self, edges: &EdgeMap) -> bool {
        let Some(roi) = self.params.region.intersect(edges.w, edges.h) else {
            debug!(
                "{}: region outside the edge map, keeping previous axis",
                self.params.label
            );
            return false;
        };
        let Some(line) = strongest_line(edges, roi, &self.params.hough) else {
            debug!("{}: no axis line, keeping previous", self.params.label);
            return false;
        };
        let origin = Point::new(roi.x as i32, roi.y as i32);
        match AxisLine::from_polar(&line, origin) {
            Some(axis) => {
                self.axis = Some(axis);
                true
            }
            None => {
                debug!("{}: vertical axis candidate rejected", self.params.label);
                false
            }
        }
    }

    /// Measure the gap width from reference frames and store it.
    ///
    /// Each frame is run through the edge stage and an axis refresh; frames
    /// without a fresh axis are skipped. The mode of all collected column
    /// spacings becomes the calibrated width.
    pub fn calibrate(
        &mut self,
        frames: &[ImageRgb8<'_>],
    ) -> Result<CalibrationReport, CalibrationError> {
        let start = Instant::now();
        let mut samples = Vec::new();
        let mut frames_used = 0usize;
        for frame in frames {
            let luma = frame.luma();
            let edges = detect_edges(&luma, &self.params.edge);
            if !self.update_axis(&edges) {
                debug!("{}: calibration frame skipped", self.params.label);
                continue;
            }
            let Some(axis) = self.axis else { continue };
            collect_gap_samples(
                frame,
                &axis,
                &self.params.color,
                self.params.bar_half_width,
                self.params.min_gap_px,
                &mut samples,
            );
            frames_used += 1;
        }
        if frames_used == 0 {
            return Err(CalibrationError::AxisNotFound);
        }
        let gap = mode_gap(&samples).ok_or(CalibrationError::NoGapSamples)?;
        self.gap_width = Some(gap);
        debug!(
            "{}: calibrated gap {}px from {} samples over {}/{} frames",
            self.params.label,
            gap,
            samples.len(),
            frames_used,
            frames.len()
        );
        Ok(CalibrationReport {
            gap_px: gap,
            samples: samples.len(),
            frames_used,
            frames_total: frames.len(),
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }

    /// Locate the gap on one frame using the current axis and calibration.
    ///
    /// Panics when no gap width has been calibrated (or restored via
    /// [`set_gap_width`](RodTracker::set_gap_width)) or when no axis line
    /// exists yet. On a miss the result keeps the previous position with
    /// `found == false`.
    pub fn track(&mut self, frame: &ImageRgb8<'_>) -> TrackResult {
        let start = Instant::now();
        let (mut result, _) = self.search_gap(frame);
        result.latency_ms = start.elapsed().as_secs_f64() * 1000.0;
        result
    }

    /// Run the full per-frame pipeline: luma, edges, axis refresh, search.
    pub fn process(&mut self, frame: &ImageRgb8<'_>) -> TrackResult {
        self.process_with_diagnostics(frame).result
    }

    /// Like [`process`](RodTracker::process), but also captures stage
    /// timings and intermediate state.
    ///
    /// The search is skipped (reported as a miss) while no axis exists,
    /// letting callers stream frames before the line first appears.
    pub fn process_with_diagnostics(&mut self, frame: &ImageRgb8<'_>) -> TrackReport {
        let total = Instant::now();
        let mut timings = TimingBreakdown::default();

        let stage = Instant::now();
        let luma = frame.luma();
        let edges = detect_edges(&luma, &self.params.edge);
        timings.push("edges", stage.elapsed());

        let stage = Instant::now();
        let axis_updated = self.update_axis(&edges);
        timings.push("axis", stage.elapsed());

        let (mut result, tier) = if self.axis.is_some() {
            let stage = Instant::now();
            let out = self.search_gap(frame);
            timings.push("search", stage.elapsed());
            out
        } else {
            debug!("{}: no axis yet, skipping search", self.params.label);
            (
                TrackResult {
                    position: self.last_position,
                    ..TrackResult::default()
                },
                None,
            )
        };
        result.latency_ms = total.elapsed().as_secs_f64() * 1000.0;

        TrackReport {
            result,
            trace: TrackTrace {
                input: InputDescriptor {
                    width: frame.w,
                    height: frame.h,
                },
                edge_pixels: edges.edge_count(),
                axis_updated,
                axis: self.axis,
                tier,
                timings,
            },
        }
    }

    fn search_gap(&mut self, frame: &ImageRgb8<'_>) -> (TrackResult, Option<SearchTier>) {
        let gap = self
            .gap_width
            .expect("gap width must be calibrated before tracking");
        let axis = self
            .axis
            .expect("axis line must be established before tracking");
        let probe = ColumnProbe {
            frame,
            axis: &axis,
            color: &self.params.color,
            bar_half_width: self.params.bar_half_width,
        };
        let hit = locality_search(&probe, self.last_position, gap)
            .map(|c| (c, SearchTier::Locality))
            .or_else(|| full_scan(&probe, gap).map(|c| (c, SearchTier::FullScan)));

        match hit {
            Some((candidate, tier)) => {
                self.last_position = candidate.left.x;
                debug!(
                    "{}: gap at x={} via {:?}",
                    self.params.label, candidate.left.x, tier
                );
                (
                    TrackResult {
                        found: true,
                        position: candidate.left.x,
                        segment: Some(GapSegment {
                            left: candidate.left,
                            right: candidate.right,
                        }),
                        latency_ms: 0.0,
                    },
                    Some(tier),
                )
            }
            None => {
                debug!(
                    "{}: gap not found, holding x={}",
                    self.params.label, self.last_position
                );
                (
                    TrackResult {
                        position: self.last_position,
                        ..TrackResult::default()
                    },
                    None,
                )
            }
        }
    }
}

/// Track several rods on the same frame.
///
/// Each tracker runs its full pipeline independently; with the `parallel`
/// feature the trackers are distributed over the rayon pool.
pub fn track_all(trackers: &mut [RodTracker], frame: &ImageRgb8<'_>) -> Vec<TrackResult> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        trackers.par_iter_mut().map(|t| t.process(frame)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        trackers.iter_mut().map(|t| t.process(frame)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Region;

    fn tracker_with_region(region: Region) -> RodTracker {
        RodTracker::new(RodParams::new(region))
    }

    fn map_with_row(w: usize, h: usize, y: usize) -> EdgeMap {
        let mut edges = EdgeMap::new(w, h);
        for x in 0..w {
            edges.set_edge(x, y);
        }
        edges
    }

    #[test]
    fn new_tracker_starts_at_zero() {
        let tracker = tracker_with_region(Region::new(0, 0, 640, 480));
        assert_eq!(tracker.last_position(), 0);
        assert!(tracker.axis().is_none());
        assert!(tracker.gap_width().is_none());
    }

    #[test]
    fn update_axis_maps_back_to_frame_coordinates() {
        let mut tracker = tracker_with_region(Region::new(0, 80, 640, 60));
        let edges = map_with_row(640, 200, 107);
        assert!(tracker.update_axis(&edges));
        let axis = tracker.axis().expect("axis");
        assert_eq!(axis.y_at(0), 107);
        assert_eq!(axis.y_at(639), 107);
    }

    #[test]
    fn failed_update_keeps_the_previous_axis() {
        let mut tracker = tracker_with_region(Region::new(0, 80, 640, 60));
        assert!(tracker.update_axis(&map_with_row(640, 200, 107)));
        assert!(!tracker.update_axis(&EdgeMap::new(640, 200)));
        let axis = tracker.axis().expect("axis");
        assert_eq!(axis.y_at(100), 107);
    }

    #[test]
    fn vertical_candidate_is_rejected() {
        let mut tracker = tracker_with_region(Region::new(0, 0, 640, 300));
        let mut edges = EdgeMap::new(640, 300);
        for y in 0..300 {
            edges.set_edge(50, y);
        }
        assert!(!tracker.update_axis(&edges));
        assert!(tracker.axis().is_none());
    }

    #[test]
    fn region_outside_the_map_is_a_clean_failure() {
        let mut tracker = tracker_with_region(Region::new(700, 0, 100, 60));
        assert!(!tracker.update_axis(&map_with_row(640, 200, 10)));
    }

    #[test]
    #[should_panic(expected = "gap width must be calibrated")]
    fn tracking_before_calibration_panics() {
        let mut tracker = tracker_with_region(Region::new(0, 0, 64, 48));
        let data = vec![0u8; 3 * 64 * 48];
        let frame = ImageRgb8::new(64, 48, &data);
        tracker.track(&frame);
    }
}
