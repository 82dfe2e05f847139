/// Renders a table-cam style frame: a dark rod stripe over a gray felt
/// background.
///
/// The stripe spans rows `[stripe_center - 5, stripe_center + 5)` and every
/// column for which `is_bar` returns true; elsewhere the frame is
/// background. Colors match the default rod color model, so a gap in the
/// stripe reads as non-rod along the axis.
pub fn rod_frame_rgb(
    width: usize,
    height: usize,
    stripe_center: i32,
    is_bar: impl Fn(i32) -> bool,
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "frame dimensions must be positive");

    const ROD: [u8; 3] = [22, 28, 39];
    const BACKGROUND: [u8; 3] = [80, 80, 80];

    let mut img = vec![0u8; 3 * width * height];
    for y in 0..height {
        for x in 0..width {
            let in_stripe = (y as i32) >= stripe_center - 5 && (y as i32) < stripe_center + 5;
            let px = if in_stripe && is_bar(x as i32) {
                ROD
            } else {
                BACKGROUND
            };
            let i = 3 * (y * width + x);
            img[i..i + 3].copy_from_slice(&px);
        }
    }
    img
}

/// A frame with no stripe at all, only background.
pub fn background_frame_rgb(width: usize, height: usize) -> Vec<u8> {
    rod_frame_rgb(width, height, -100, |_| false)
}
