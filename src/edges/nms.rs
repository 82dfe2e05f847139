//! Non-maximum suppression on gradient magnitude with direction alignment.
//!
//! Canny-style thinning: for each pixel the gradient direction is quantized
//! to 4 bins (0°, 45°, 90°, 135°) to select the two comparison neighbors,
//! then the pixel survives only when it dominates both. On an exact plateau
//! of two equal responses the first pixel in scan order wins, so a clean
//! synthetic step still thins to a single line.
//!
//! Border handling uses clamping in gradient computation and ignores the
//! outermost 1-pixel frame in NMS to avoid out-of-bounds checks in neighbor
//! lookup.
use crate::edges::grad::Grad;
use crate::edges::map::EdgeMap;
use crate::image::ImageView;

const TAN_22_5_DEG: f32 = 0.41421356237;

/// Thin a gradient field into a binary edge map.
///
/// A pixel is kept if its magnitude reaches `mag_thresh`, is strictly greater
/// than the preceding neighbor along the gradient direction and at least as
/// great as the following one.
pub fn run_nms(grad: &Grad, mag_thresh: f32) -> EdgeMap {
    let w = grad.gx.w;
    let h = grad.gx.h;
    let mut edges = EdgeMap::new(w, h);
    if w < 3 || h < 3 {
        return edges;
    }

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag < mag_thresh {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            let (neighbor1, neighbor2) = if abs_gx >= abs_gy {
                if abs_gy <= abs_gx * TAN_22_5_DEG {
                    (mag_row[x - 1], mag_row[x + 1])
                } else if same_sign {
                    (mag_prev[x + 1], mag_next[x - 1])
                } else {
                    (mag_prev[x - 1], mag_next[x + 1])
                }
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x + 1], mag_next[x - 1])
            } else {
                (mag_prev[x - 1], mag_next[x + 1])
            };

            if mag <= neighbor1 || mag < neighbor2 {
                continue;
            }

            edges.set_edge(x, y);
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::grad::{image_gradients, GradientKernel};
    use crate::image::ImageF32;

    fn vertical_step(w: usize, h: usize, split: usize) -> ImageF32 {
        ImageF32::from_fn(w, h, |x, _| if x >= split { 1.0 } else { 0.0 })
    }

    #[test]
    fn step_edge_thins_to_single_column() {
        let img = vertical_step(10, 10, 5);
        let grad = image_gradients(&img, GradientKernel::Sobel);
        let edges = run_nms(&grad, 0.5);
        // Columns 4 and 5 form an equal-magnitude plateau; only the first
        // survives.
        for y in 1..9 {
            assert!(edges.is_edge(4, y));
            assert!(!edges.is_edge(5, y));
            assert!(!edges.is_edge(3, y));
        }
        assert_eq!(edges.edge_count(), 8);
    }

    #[test]
    fn threshold_filters_weak_responses() {
        let img = vertical_step(10, 10, 5);
        let grad = image_gradients(&img, GradientKernel::Sobel);
        let edges = run_nms(&grad, 100.0);
        assert_eq!(edges.edge_count(), 0);
    }

    #[test]
    fn tiny_image_yields_empty_map() {
        let img = ImageF32::new(2, 2);
        let grad = image_gradients(&img, GradientKernel::Sobel);
        let edges = run_nms(&grad, 0.1);
        assert_eq!(edges.edge_count(), 0);
    }
}
