//! Column scans that locate the gap along the axis.
//!
//! Two strategies share one probe: a windowed scan biased toward the
//! previous position, and an exhaustive sweep that pairs consecutive rod
//! columns by their spacing. The windowed scan is tried first every frame
//! and only its verified result is trusted.

use crate::axis::AxisLine;
use crate::image::ImageRgb8;
use crate::types::Point;

use super::classifier::{column_band, ColorModel};

/// Left and right gap edges proposed by a scan, in frame coordinates.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GapCandidate {
    pub left: Point,
    pub right: Point,
}

/// Everything needed to test one column against the rod color.
pub(crate) struct ColumnProbe<'a> {
    pub frame: &'a ImageRgb8<'a>,
    pub axis: &'a AxisLine,
    pub color: &'a ColorModel,
    pub bar_half_width: i32,
}

impl ColumnProbe<'_> {
    /// Axis height at `x` paired with whether the band there is rod-colored.
    fn probe(&self, x: i32) -> (i32, bool) {
        let y_center = self.axis.y_at(x);
        let band = column_band(x, y_center, self.bar_half_width, self.frame.w, self.frame.h);
        (y_center, self.color.matches(self.frame, band))
    }
}

/// Walk right to left through a half-gap-width window around `last` and
/// return the first rod-colored column.
pub(crate) fn locality_scan(probe: &ColumnProbe<'_>, last: i32, gap: u32) -> Option<Point> {
    let width = probe.frame.w as i32;
    let max_move = gap as f32 / 2.0;
    let hi = ((last as f32 + max_move).min(width as f32) as i32).min(width - 1);
    let lo = (last as f32 - max_move).max(0.0) as i32;
    for x in (lo..=hi).rev() {
        let (y_center, is_rod) = probe.probe(x);
        if is_rod {
            return Some(Point::new(x, y_center));
        }
    }
    None
}

/// Confirm a gap-sized hole to the right of `left`.
///
/// Scans the ±10% window around `left.x + gap` and accepts the first rod
/// column only after at least one non-rod column, so a solid bar cannot
/// verify itself.
pub(crate) fn verify_right_edge(probe: &ColumnProbe<'_>, left: Point, gap: u32) -> Option<Point> {
    let width = probe.frame.w as i32;
    let tenth = (gap as f32 / 10.0).round() as i32;
    let from = left.x + gap as i32 - tenth;
    let to = (left.x + gap as i32 + tenth).min(width);
    let mut saw_gap_column = false;
    for x in from..to {
        let (y_center, is_rod) = probe.probe(x);
        if is_rod {
            return saw_gap_column.then(|| Point::new(x, y_center));
        }
        saw_gap_column = true;
    }
    None
}

/// The windowed strategy: nearest candidate to `last`, kept only when the
/// matching right edge verifies.
pub(crate) fn locality_search(
    probe: &ColumnProbe<'_>,
    last: i32,
    gap: u32,
) -> Option<GapCandidate> {
    let left = locality_scan(probe, last, gap)?;
    let right = verify_right_edge(probe, left, gap)?;
    Some(GapCandidate { left, right })
}

/// Exhaustive sweep pairing consecutive rod columns whose spacing matches
/// the calibrated width within ±10%.
pub(crate) fn full_scan(probe: &ColumnProbe<'_>, gap: u32) -> Option<GapCandidate> {
    let width = probe.frame.w as i32;
    let tolerance = gap as f32 / 10.0;
    let mut last_pos: Option<Point> = None;
    for x in 0..width {
        let (y_center, is_rod) = probe.probe(x);
        if !is_rod {
            continue;
        }
        if let Some(prev) = last_pos {
            let spacing = (x - prev.x) as f32;
            if (spacing - gap as f32).abs() < tolerance {
                return Some(GapCandidate {
                    left: prev,
                    right: Point::new(x, y_center),
                });
            }
        }
        last_pos = Some(Point::new(x, y_center));
    }
    None
}
