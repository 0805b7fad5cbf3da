use crate::color::{Rgbw, rgbw};

/// Blend between two colors at `percent`
///
/// `percent == 0.0` yields `end`, `percent == 1.0` yields `start`. The input
/// is not clamped: every channel is computed as
/// `end + percent * (start - end)`, truncated toward zero and then saturated
/// to `0..=255`, so values outside `0.0..=1.0` overshoot and stick at the
/// channel limits instead of wrapping.
pub fn interpolate(percent: f64, start: Rgbw, end: Rgbw) -> Rgbw {
    let result = rgbw(
        channel(percent, start.r, end.r),
        channel(percent, start.g, end.g),
        channel(percent, start.b, end.b),
        channel(percent, start.a.0, end.a.0),
    );

    #[cfg(feature = "log")]
    log::trace!(
        "[interpolate] percent: {:.03} start: {:?} end: {:?} result: {:?}",
        percent,
        (start.r, start.g, start.b),
        (end.r, end.g, end.b),
        (result.r, result.g, result.b)
    );

    result
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(percent: f64, start: u8, end: u8) -> u8 {
    let end_value = f64::from(end);
    let value = end_value + percent * (f64::from(start) - end_value);
    // `as` truncates toward zero and saturates NaN to 0
    (value as i32).clamp(0, 255) as u8
}
