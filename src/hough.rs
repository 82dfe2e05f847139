//! Standard Hough transform over a binary edge map.
//!
//! Lines are parameterized as `rho = x·cos(theta) + y·sin(theta)` with
//! `theta` swept over `[0, π)`. Every edge pixel votes once per theta bin;
//! the strongest accumulator cell wins. Ties go to the first cell in
//! rho-major scan order, so among equally supported parallel lines the one
//! with the smallest rho is reported.

use crate::edges::EdgeMap;
use crate::types::{Point, Region};
use log::debug;
use serde::{Deserialize, Serialize};

/// How far line endpoints are extended from the foot of the normal.
const LINE_SPAN: f32 = 1000.0;

/// Accumulator resolution and acceptance threshold.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughParams {
    /// Rho bin size in pixels.
    pub rho_res: f32,
    /// Theta bin size in degrees.
    pub theta_res_deg: f32,
    /// Minimum votes for the peak to count as a line.
    pub min_votes: u32,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            rho_res: 1.0,
            theta_res_deg: 1.0,
            min_votes: 200,
        }
    }
}

/// A detected line in polar form, in the coordinates the votes were cast in.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolarLine {
    /// Signed distance from the origin to the line.
    pub rho: f32,
    /// Normal angle in radians, `[0, π)`.
    pub theta: f32,
    /// Accumulator support.
    pub votes: u32,
}

impl PolarLine {
    /// Two points far apart on the line, rounded to integer pixels.
    ///
    /// The segment is centered on the foot of the normal and extended
    /// [`LINE_SPAN`] units both ways, so the endpoints usually lie well
    /// outside the image.
    pub fn endpoints(&self) -> (Point, Point) {
        let a = self.theta.cos();
        let b = self.theta.sin();
        let x0 = a * self.rho;
        let y0 = b * self.rho;
        let p0 = Point::new(
            (x0 + LINE_SPAN * -b).round() as i32,
            (y0 + LINE_SPAN * a).round() as i32,
        );
        let p1 = Point::new(
            (x0 - LINE_SPAN * -b).round() as i32,
            (y0 - LINE_SPAN * a).round() as i32,
        );
        (p0, p1)
    }
}

/// Vote grid over (rho, theta) with precomputed trigonometry per theta bin.
struct HoughAccumulator {
    bins: Vec<u32>,
    num_theta: usize,
    num_rho: usize,
    rho_res: f32,
    theta_res: f32,
    cos_table: Vec<f32>,
    sin_table: Vec<f32>,
}

impl HoughAccumulator {
    /// `width`/`height` bound the voting coordinates; `theta_res` is in
    /// radians.
    fn new(width: usize, height: usize, rho_res: f32, theta_res: f32) -> Self {
        assert!(rho_res > 0.0, "rho resolution must be positive");
        assert!(theta_res > 0.0, "theta resolution must be positive");
        let num_theta = (std::f32::consts::PI / theta_res).round() as usize;
        assert!(num_theta > 0, "theta resolution coarser than half a turn");
        let num_rho = ((2 * (width + height) + 1) as f32 / rho_res).round() as usize;
        let cos_table = (0..num_theta).map(|t| (t as f32 * theta_res).cos()).collect();
        let sin_table = (0..num_theta).map(|t| (t as f32 * theta_res).sin()).collect();
        Self {
            bins: vec![0; num_rho * num_theta],
            num_theta,
            num_rho,
            rho_res,
            theta_res,
            cos_table,
            sin_table,
        }
    }

    #[inline]
    fn rho_center(&self) -> i32 {
        ((self.num_rho - 1) / 2) as i32
    }

    /// Cast one vote per theta bin for an edge pixel at (x, y).
    #[inline]
    fn vote(&mut self, x: f32, y: f32) {
        for t in 0..self.num_theta {
            let rho = x * self.cos_table[t] + y * self.sin_table[t];
            let r = (rho / self.rho_res).round() as i32 + self.rho_center();
            debug_assert!(r >= 0 && (r as usize) < self.num_rho);
            self.bins[r as usize * self.num_theta + t] += 1;
        }
    }

    /// Peak cell as a polar line, or `None` when no votes were cast.
    fn strongest(&self) -> Option<PolarLine> {
        let mut best_idx = 0usize;
        let mut best_votes = 0u32;
        for (i, &v) in self.bins.iter().enumerate() {
            if v > best_votes {
                best_votes = v;
                best_idx = i;
            }
        }
        if best_votes == 0 {
            return None;
        }
        let r = (best_idx / self.num_theta) as i32;
        let t = best_idx % self.num_theta;
        Some(PolarLine {
            rho: (r - self.rho_center()) as f32 * self.rho_res,
            theta: t as f32 * self.theta_res,
            votes: best_votes,
        })
    }
}

/// Find the strongest line among the edge pixels inside `roi`.
///
/// The returned line lives in roi-local coordinates, matching the crop the
/// votes were cast in. Returns `None` when the region falls outside the map
/// or the peak support stays below `min_votes`.
pub fn strongest_line(edges: &EdgeMap, roi: Region, params: &HoughParams) -> Option<PolarLine> {
    let roi = roi.intersect(edges.w, edges.h)?;
    let mut acc = HoughAccumulator::new(
        roi.w as usize,
        roi.h as usize,
        params.rho_res,
        params.theta_res_deg.to_radians(),
    );
    let mut edge_pixels = 0usize;
    for y in 0..roi.h {
        for x in 0..roi.w {
            if edges.is_edge((roi.x + x) as usize, (roi.y + y) as usize) {
                acc.vote(x as f32, y as f32);
                edge_pixels += 1;
            }
        }
    }

    let Some(line) = acc.strongest() else {
        debug!("hough: no edge pixels in {}x{} roi", roi.w, roi.h);
        return None;
    };
    if line.votes < params.min_votes {
        debug!(
            "hough: peak support {} below {} ({} edge pixels)",
            line.votes, params.min_votes, edge_pixels
        );
        return None;
    }
    debug!(
        "hough: line rho={:.1} theta={:.3} votes={}",
        line.rho, line.theta, line.votes
    );
    Some(line)
}
