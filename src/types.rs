use serde::{Deserialize, Serialize};

/// Integer pixel coordinate in full-frame space.
///
/// Axis endpoints routinely lie far outside the visible frame (the line is
/// extended ±1000 units before storage), so both components are signed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box in frame coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Region {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Clips the region against a `width × height` buffer.
    ///
    /// Returns `None` when nothing of the region lies inside the buffer.
    pub fn intersect(&self, width: usize, height: usize) -> Option<Region> {
        let x0 = self.x.min(width as u32);
        let y0 = self.y.min(height as u32);
        let x1 = self.x.saturating_add(self.w).min(width as u32);
        let y1 = self.y.saturating_add(self.h).min(height as u32);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Region {
            x: x0,
            y: y0,
            w: x1 - x0,
            h: y1 - y0,
        })
    }
}

/// The two gap edges located by a successful track, in full-frame coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GapSegment {
    /// Left edge of the gap; its x is the reported rod position.
    pub left: Point,
    /// Right edge of the gap, roughly one calibrated gap width further.
    pub right: Point,
}

/// Per-frame tracking outcome.
///
/// `position` is always meaningful: on a miss it carries the last known
/// position so downstream consumers can hold the previous value.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TrackResult {
    pub found: bool,
    pub position: i32,
    pub segment: Option<GapSegment>,
    pub latency_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::Region;

    #[test]
    fn intersect_clips_to_buffer() {
        let r = Region::new(600, 400, 100, 100)
            .intersect(640, 480)
            .expect("overlap");
        assert_eq!(r, Region::new(600, 400, 40, 80));
    }

    #[test]
    fn intersect_outside_is_none() {
        assert!(Region::new(700, 0, 50, 50).intersect(640, 480).is_none());
        assert!(Region::new(0, 0, 0, 10).intersect(640, 480).is_none());
    }

    #[test]
    fn intersect_inside_is_identity() {
        let r = Region::new(10, 20, 100, 50);
        assert_eq!(r.intersect(640, 480), Some(r));
    }
}
