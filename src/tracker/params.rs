//! Per-rod tuning parameters.

use serde::{Deserialize, Serialize};

use crate::edges::EdgeParams;
use crate::hough::HoughParams;
use crate::types::Region;

use super::classifier::ColorModel;

/// Full configuration for one tracked rod.
///
/// Only `region` is mandatory when deserializing; everything else falls back
/// to defaults tuned for 8-bit frames.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RodParams {
    /// Frame region the rod's lower boundary stays inside.
    pub region: Region,
    /// Name used in logs and reports.
    #[serde(default = "default_label")]
    pub label: String,
    /// Rod body color for gap-edge classification.
    #[serde(default)]
    pub color: ColorModel,
    /// Calibration records a column spacing only when it exceeds this.
    #[serde(default = "default_min_gap_px")]
    pub min_gap_px: u32,
    /// Half height of the sampling band around the axis, in rows.
    #[serde(default = "default_bar_half_width")]
    pub bar_half_width: i32,
    #[serde(default)]
    pub edge: EdgeParams,
    #[serde(default)]
    pub hough: HoughParams,
}

fn default_label() -> String {
    "rod".to_string()
}

fn default_min_gap_px() -> u32 {
    40
}

fn default_bar_half_width() -> i32 {
    5
}

impl RodParams {
    /// Defaults for a rod traveling inside `region`.
    pub fn new(region: Region) -> Self {
        Self {
            region,
            label: default_label(),
            color: ColorModel::default(),
            min_gap_px: default_min_gap_px(),
            bar_half_width: default_bar_half_width(),
            edge: EdgeParams::default(),
            hough: HoughParams::default(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}
