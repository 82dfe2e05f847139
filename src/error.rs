//! Error types for the calibration stage.

use std::fmt;

/// Why calibration could not produce a gap width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalibrationError {
    /// No reference frame yielded an axis line.
    AxisNotFound,
    /// An axis was found but no column pair ever spanned a plausible gap.
    NoGapSamples,
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalibrationError::AxisNotFound => {
                write!(f, "axis line not detected in any reference frame")
            }
            CalibrationError::NoGapSamples => {
                write!(f, "no gap candidates found in reference frames")
            }
        }
    }
}

impl std::error::Error for CalibrationError {}
