//! Edge processing utilities: image gradients and non-maximum suppression.
//!
//! This module provides the building blocks the tracker differentiates frames
//! with:
//!
//! - Gradient computation (Sobel/Scharr) returning `gx`, `gy` and magnitude.
//! - Non-maximum suppression on the gradient magnitude with a
//!   direction-aligned 4-neighborhood, producing a dense binary [`EdgeMap`].
//!
//! Design goals
//! - Favor clarity and cache-friendly row access over micro-optimizations.
//! - Handle borders by clamping indices (replicate).
//! - Keep outputs simple and serializable for tooling.

pub mod grad;
pub mod map;
pub mod nms;

pub use grad::{image_gradients, Grad, GradientKernel};
pub use map::{EdgeMap, EDGE_ON};
pub use nms::run_nms;

use crate::image::ImageF32;
use serde::{Deserialize, Serialize};

/// Tuning knobs for the edge stage.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeParams {
    /// Derivative kernel to convolve with.
    pub kernel: GradientKernel,
    /// Minimum gradient magnitude (luma in `[0, 1]`) for a pixel to survive
    /// suppression.
    pub magnitude_threshold: f32,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            kernel: GradientKernel::Sobel,
            magnitude_threshold: 0.15,
        }
    }
}

/// Differentiate a luma plane and thin the response into a binary edge map.
pub fn detect_edges(luma: &ImageF32, params: &EdgeParams) -> EdgeMap {
    let grad = image_gradients(luma, params.kernel);
    run_nms(&grad, params.magnitude_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_detect_a_strong_step() {
        let luma = ImageF32::from_fn(12, 12, |_, y| if y >= 6 { 0.8 } else { 0.0 });
        let edges = detect_edges(&luma, &EdgeParams::default());
        assert!(edges.edge_count() > 0);
        // The surviving response sits on the boundary row pair.
        for x in 1..11 {
            assert!(edges.is_edge(x, 5) || edges.is_edge(x, 6));
        }
    }
}
