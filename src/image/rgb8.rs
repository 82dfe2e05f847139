//! Borrowed interleaved RGB view over caller-owned bytes.
//!
//! Frames arrive from decoders or capture buffers that the caller keeps
//! alive, so the view never copies. Pixel access goes through [`get`] since
//! a row mixes three channels; single-channel row iteration lives on the
//! luma plane produced by [`luma`].
//!
//! [`get`]: ImageRgb8::get
//! [`luma`]: ImageRgb8::luma

use crate::image::f32::ImageF32;

/// Immutable RGB8 view. `stride` is in bytes and must be at least `3 * w`.
#[derive(Clone, Copy, Debug)]
pub struct ImageRgb8<'a> {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Bytes between consecutive rows
    pub stride: usize,
    /// Interleaved RGB bytes, row-major
    pub data: &'a [u8],
}

impl<'a> ImageRgb8<'a> {
    /// Wrap a tightly-packed RGB buffer (`stride == 3 * w`).
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> Self {
        assert!(data.len() >= 3 * w * h, "rgb buffer shorter than 3*w*h");
        Self {
            w,
            h,
            stride: 3 * w,
            data,
        }
    }

    /// Pixel channels at (x, y) as `[r, g, b]`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y * self.stride + 3 * x;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Rec. 601 luma plane, normalized to `[0, 1]`.
    pub fn luma(&self) -> ImageF32 {
        let mut out = ImageF32::new(self.w, self.h);
        for y in 0..self.h {
            for x in 0..self.w {
                let [r, g, b] = self.get(x, y);
                let l = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
                out.set(x, y, l / 255.0);
            }
        }
        out
    }
}
