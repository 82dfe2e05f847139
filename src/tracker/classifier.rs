//! Color-distance classification of sampled pixel bands.
//!
//! A column counts as rod when the pixels in a short vertical band average
//! close enough to the configured rod color. Distances are Euclidean in the
//! raw 0..255 channel space, in whatever channel order the frame itself
//! uses.

use crate::image::ImageRgb8;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Reference color and acceptance radius for rod pixels.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorModel {
    /// Rod body color in raw channel values.
    pub reference: [f32; 3],
    /// A band matches when its mean distance falls strictly below this.
    pub threshold: f32,
}

impl Default for ColorModel {
    fn default() -> Self {
        Self {
            reference: [22.0, 28.0, 39.0],
            threshold: 70.0,
        }
    }
}

impl ColorModel {
    /// Mean Euclidean distance of the sampled pixels from the reference
    /// color, or `None` when `samples` yields no coordinates.
    pub fn mean_distance(
        &self,
        frame: &ImageRgb8<'_>,
        samples: impl IntoIterator<Item = (u32, u32)>,
    ) -> Option<f32> {
        let reference = Vector3::from(self.reference);
        let mut sum = 0.0f32;
        let mut count = 0usize;
        for (x, y) in samples {
            let [r, g, b] = frame.get(x as usize, y as usize);
            let pixel = Vector3::new(r as f32, g as f32, b as f32);
            sum += (pixel - reference).norm();
            count += 1;
        }
        (count > 0).then(|| sum / count as f32)
    }

    /// Whether the sampled band is rod-colored. An empty band never matches.
    pub fn matches(
        &self,
        frame: &ImageRgb8<'_>,
        samples: impl IntoIterator<Item = (u32, u32)>,
    ) -> bool {
        self.mean_distance(frame, samples)
            .is_some_and(|d| d < self.threshold)
    }
}

/// Coordinates of the vertical band probed at column `x`.
///
/// Rows span `[y_center - half, y_center + half)` clipped to the frame; a
/// column outside the frame yields nothing.
pub(crate) fn column_band(
    x: i32,
    y_center: i32,
    half: i32,
    width: usize,
    height: usize,
) -> impl Iterator<Item = (u32, u32)> {
    let column = (x >= 0 && (x as usize) < width).then_some(x as u32);
    let y_lo = (y_center - half).max(0) as u32;
    let y_hi = (y_center + half).min(height as i32).max(0) as u32;
    column
        .into_iter()
        .flat_map(move |x| (y_lo..y_hi).map(move |y| (x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_frame(w: usize, h: usize, px: [u8; 3]) -> Vec<u8> {
        let mut data = Vec::with_capacity(3 * w * h);
        for _ in 0..w * h {
            data.extend_from_slice(&px);
        }
        data
    }

    #[test]
    fn exact_color_counts_as_rod() {
        let data = solid_frame(4, 12, [22, 28, 39]);
        let frame = ImageRgb8::new(4, 12, &data);
        let model = ColorModel::default();
        let band = column_band(1, 6, 5, frame.w, frame.h);
        assert_eq!(model.mean_distance(&frame, band), Some(0.0));
        assert!(model.matches(&frame, column_band(1, 6, 5, frame.w, frame.h)));
    }

    #[test]
    fn distant_color_is_rejected() {
        let data = solid_frame(4, 12, [80, 80, 80]);
        let frame = ImageRgb8::new(4, 12, &data);
        let model = ColorModel::default();
        let d = model
            .mean_distance(&frame, column_band(1, 6, 5, frame.w, frame.h))
            .expect("band");
        assert!(d > 70.0);
        assert!(!model.matches(&frame, column_band(1, 6, 5, frame.w, frame.h)));
    }

    #[test]
    fn empty_band_never_matches() {
        let data = solid_frame(4, 12, [22, 28, 39]);
        let frame = ImageRgb8::new(4, 12, &data);
        let model = ColorModel::default();
        assert_eq!(
            model.mean_distance(&frame, column_band(-1, 6, 5, frame.w, frame.h)),
            None
        );
        assert!(!model.matches(&frame, column_band(9, 6, 5, frame.w, frame.h)));
    }

    #[test]
    fn band_spans_half_below_and_half_above() {
        let ys: Vec<u32> = column_band(2, 5, 2, 10, 10).map(|(_, y)| y).collect();
        assert_eq!(ys, vec![3, 4, 5, 6]);
    }

    #[test]
    fn band_clips_to_frame_rows() {
        let ys: Vec<u32> = column_band(2, 1, 5, 10, 10).map(|(_, y)| y).collect();
        assert_eq!(ys, vec![0, 1, 2, 3, 4, 5]);
        let ys: Vec<u32> = column_band(2, 9, 5, 10, 10).map(|(_, y)| y).collect();
        assert_eq!(ys, vec![4, 5, 6, 7, 8, 9]);
    }
}
