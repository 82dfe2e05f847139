//! Travel-axis line and interpolation along it.
//!
//! The axis is the line the rod's lower boundary draws across the frame. It
//! is stored as two distant endpoints rather than polar parameters so that
//! interpolating a y for a given x is a single linear step.

use crate::hough::PolarLine;
use crate::types::Point;
use serde::Serialize;

/// Line through two points with distinct x, in full-frame coordinates.
///
/// Construction rejects vertical lines, so [`y_at`](AxisLine::y_at) is total.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLine {
    p0: Point,
    p1: Point,
}

impl AxisLine {
    /// Build from two endpoints. Returns `None` when they share an x
    /// coordinate and the line cannot be evaluated per column.
    pub fn from_endpoints(p0: Point, p1: Point) -> Option<Self> {
        if p0.x == p1.x {
            return None;
        }
        Some(Self { p0, p1 })
    }

    /// Build from a polar line voted in a crop whose top-left corner sits at
    /// `origin`, shifting the endpoints back to frame coordinates.
    pub fn from_polar(line: &PolarLine, origin: Point) -> Option<Self> {
        let (p0, p1) = line.endpoints();
        Self::from_endpoints(
            Point::new(p0.x + origin.x, p0.y + origin.y),
            Point::new(p1.x + origin.x, p1.y + origin.y),
        )
    }

    pub fn p0(&self) -> Point {
        self.p0
    }

    pub fn p1(&self) -> Point {
        self.p1
    }

    /// Height of the axis at column `x`, by linear interpolation between the
    /// endpoints (extrapolates outside them).
    pub fn y_at(&self, x: i32) -> i32 {
        let t = (x - self.p0.x) as f32 / (self.p1.x - self.p0.x) as f32;
        (t * (self.p1.y - self.p0.y) as f32).round() as i32 + self.p0.y
    }
}
