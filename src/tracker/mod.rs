//! Rod tracking: color classification, calibration and the per-frame
//! pipeline.
//!
//! The submodules split along the processing stages:
//!
//! - [`classifier`]: is this column band rod-colored?
//! - `calibrate`: what is the gap width, measured over reference frames?
//! - `search`: where is the gap on this frame?
//! - [`pipeline`]: the stateful [`RodTracker`] tying the stages together.

pub mod classifier;
pub mod params;
pub mod pipeline;

mod calibrate;
mod search;

pub use classifier::ColorModel;
pub use params::RodParams;
pub use pipeline::{track_all, RodTracker};
