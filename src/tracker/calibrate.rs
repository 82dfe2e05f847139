//! Gap-width calibration from reference frames.
//!
//! The gap between two neighboring bars shows up as the spacing between
//! consecutive rod-colored columns along the axis. Over a handful of frames
//! the true width dominates the sample set, so the mode is taken as the
//! calibrated value.

use std::collections::BTreeMap;

use crate::axis::AxisLine;
use crate::image::ImageRgb8;
use crate::types::Point;

use super::classifier::{column_band, ColorModel};

/// Sweep the full frame width and append every plausible spacing to `out`.
///
/// The anchor advances on every rod-colored column, so a solid run of rod
/// pixels measures unit spacings (filtered by `min_gap`) rather than the
/// distance back to the run's start.
pub(crate) fn collect_gap_samples(
    frame: &ImageRgb8<'_>,
    axis: &AxisLine,
    color: &ColorModel,
    bar_half_width: i32,
    min_gap: u32,
    out: &mut Vec<u32>,
) {
    let mut last: Option<Point> = None;
    for x in 0..frame.w as i32 {
        let y_center = axis.y_at(x);
        let band = column_band(x, y_center, bar_half_width, frame.w, frame.h);
        if !color.matches(frame, band) {
            continue;
        }
        if let Some(prev) = last {
            let gap = (x - prev.x).unsigned_abs();
            if gap > min_gap {
                out.push(gap);
            }
        }
        last = Some(Point::new(x, y_center));
    }
}

/// Most frequent sample. Ties break toward the smaller width.
pub(crate) fn mode_gap(samples: &[u32]) -> Option<u32> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for &s in samples {
        *counts.entry(s).or_insert(0) += 1;
    }
    let mut best: Option<(u32, usize)> = None;
    for (&width, &count) in &counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((width, count)),
        }
    }
    best.map(|(width, _)| width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_bytes(w: usize, h: usize, is_bar: impl Fn(i32) -> bool) -> Vec<u8> {
        let mut data = vec![0u8; 3 * w * h];
        for y in 0..h {
            for x in 0..w {
                let px: [u8; 3] = if is_bar(x as i32) {
                    [22, 28, 39]
                } else {
                    [80, 80, 80]
                };
                data[3 * (y * w + x)..3 * (y * w + x) + 3].copy_from_slice(&px);
            }
        }
        data
    }

    fn flat_axis(y: i32) -> AxisLine {
        AxisLine::from_endpoints(Point::new(-1000, y), Point::new(1000, y)).expect("axis")
    }

    #[test]
    fn one_gap_yields_one_sample() {
        let data = frame_bytes(200, 20, |x| x <= 50 || x >= 110);
        let frame = ImageRgb8::new(200, 20, &data);
        let mut out = Vec::new();
        collect_gap_samples(
            &frame,
            &flat_axis(10),
            &ColorModel::default(),
            5,
            40,
            &mut out,
        );
        assert_eq!(out, vec![60]);
    }

    #[test]
    fn spacing_at_the_threshold_is_dropped() {
        let data = frame_bytes(200, 20, |x| x <= 50 || x >= 110);
        let frame = ImageRgb8::new(200, 20, &data);
        let mut out = Vec::new();
        collect_gap_samples(
            &frame,
            &flat_axis(10),
            &ColorModel::default(),
            5,
            60,
            &mut out,
        );
        assert!(out.is_empty());
    }

    #[test]
    fn anchor_advances_past_each_match() {
        let data = frame_bytes(200, 20, |x| x == 0 || x == 100 || x == 160);
        let frame = ImageRgb8::new(200, 20, &data);
        let mut out = Vec::new();
        collect_gap_samples(
            &frame,
            &flat_axis(10),
            &ColorModel::default(),
            5,
            40,
            &mut out,
        );
        assert_eq!(out, vec![100, 60]);
    }

    #[test]
    fn mode_prefers_most_frequent() {
        assert_eq!(mode_gap(&[61, 60, 60, 59, 60]), Some(60));
    }

    #[test]
    fn mode_tie_breaks_toward_smaller_width() {
        assert_eq!(mode_gap(&[70, 60, 70, 60]), Some(60));
    }

    #[test]
    fn mode_of_nothing_is_none() {
        assert_eq!(mode_gap(&[]), None);
    }
}
