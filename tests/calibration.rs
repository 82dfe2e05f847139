mod common;

use common::synthetic_frame::{background_frame_rgb, rod_frame_rgb};
use rod_tracker::image::ImageRgb8;
use rod_tracker::{CalibrationError, Region, RodParams, RodTracker};

const WIDTH: usize = 640;
const HEIGHT: usize = 200;
const STRIPE_CENTER: i32 = 100;

fn rod_region() -> Region {
    Region::new(0, 80, WIDTH as u32, 60)
}

#[test]
fn gap_width_is_the_mode_over_reference_frames() {
    let _ = env_logger::builder().is_test(true).try_init();

    let buffers: Vec<Vec<u8>> = (0..3)
        .map(|_| {
            rod_frame_rgb(WIDTH, HEIGHT, STRIPE_CENTER, |x| x <= 100 || x >= 160)
        })
        .collect();
    let frames: Vec<ImageRgb8<'_>> = buffers
        .iter()
        .map(|b| ImageRgb8::new(WIDTH, HEIGHT, b))
        .collect();

    let mut tracker = RodTracker::new(RodParams::new(rod_region()));
    let report = tracker.calibrate(&frames).expect("calibration");

    assert_eq!(report.gap_px, 60);
    assert_eq!(tracker.gap_width(), Some(60));
    assert_eq!(report.frames_used, 3);
    assert_eq!(report.frames_total, 3);
    assert_eq!(report.samples, 3, "one spacing sample per frame");
    assert!(tracker.axis().is_some(), "calibration establishes the axis");
}

#[test]
fn frames_without_an_axis_are_skipped() {
    let good = rod_frame_rgb(WIDTH, HEIGHT, STRIPE_CENTER, |x| x <= 100 || x >= 160);
    let blank = background_frame_rgb(WIDTH, HEIGHT);
    let frames = [
        ImageRgb8::new(WIDTH, HEIGHT, &blank),
        ImageRgb8::new(WIDTH, HEIGHT, &good),
        ImageRgb8::new(WIDTH, HEIGHT, &good),
    ];

    let mut tracker = RodTracker::new(RodParams::new(rod_region()));
    let report = tracker.calibrate(&frames).expect("calibration");

    assert_eq!(report.gap_px, 60);
    assert_eq!(report.frames_used, 2);
    assert_eq!(report.frames_total, 3);
}

#[test]
fn all_blank_frames_fail_with_axis_not_found() {
    let blank = background_frame_rgb(WIDTH, HEIGHT);
    let frames = [
        ImageRgb8::new(WIDTH, HEIGHT, &blank),
        ImageRgb8::new(WIDTH, HEIGHT, &blank),
    ];

    let mut tracker = RodTracker::new(RodParams::new(rod_region()));
    let err = tracker.calibrate(&frames).expect_err("no axis anywhere");

    assert_eq!(err, CalibrationError::AxisNotFound);
    assert!(tracker.gap_width().is_none());
}

#[test]
fn gapless_stripe_fails_with_no_samples() {
    let solid = rod_frame_rgb(WIDTH, HEIGHT, STRIPE_CENTER, |_| true);
    let frames = [ImageRgb8::new(WIDTH, HEIGHT, &solid)];

    let mut tracker = RodTracker::new(RodParams::new(rod_region()));
    let err = tracker.calibrate(&frames).expect_err("no gap to sample");

    assert_eq!(err, CalibrationError::NoGapSamples);
    assert!(
        tracker.axis().is_some(),
        "the axis itself is detectable on a solid stripe"
    );
    assert!(tracker.gap_width().is_none());
}

#[test]
fn empty_frame_list_fails_with_axis_not_found() {
    let mut tracker = RodTracker::new(RodParams::new(rod_region()));
    let err = tracker.calibrate(&[]).expect_err("nothing to calibrate on");
    assert_eq!(err, CalibrationError::AxisNotFound);
}
