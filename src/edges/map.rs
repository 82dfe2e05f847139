//! Dense binary edge map shared by the axis estimator and the gap search.

use crate::image::ImageView;

/// Byte value marking an edge pixel. Non-edge pixels hold zero.
pub const EDGE_ON: u8 = 255;

/// Row-major binary mask, one byte per pixel.
#[derive(Clone, Debug)]
pub struct EdgeMap {
    /// Map width in pixels
    pub w: usize,
    /// Map height in pixels
    pub h: usize,
    /// Bytes between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage, `EDGE_ON` or 0
    pub data: Vec<u8>,
}

impl EdgeMap {
    /// All-zero map of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0; w * h],
        }
    }

    /// Build a map from an external mask, treating any nonzero byte as an
    /// edge. Returns `None` when the buffer length does not match `w * h`.
    pub fn from_mask(w: usize, h: usize, mask: &[u8]) -> Option<Self> {
        if mask.len() != w * h {
            return None;
        }
        let data = mask
            .iter()
            .map(|&v| if v != 0 { EDGE_ON } else { 0 })
            .collect();
        Some(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    pub fn is_edge(&self, x: usize, y: usize) -> bool {
        self.data[y * self.stride + x] != 0
    }

    #[inline]
    pub fn set_edge(&mut self, x: usize, y: usize) {
        self.data[y * self.stride + x] = EDGE_ON;
    }

    /// Number of edge pixels in the map.
    pub fn edge_count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

impl ImageView for EdgeMap {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}
