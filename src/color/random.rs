use crate::color::{Rgbw, rgbw};

/// Largest per-channel move of a single random-walk step at full intensity
const MAX_STEP: f32 = 48.0;

/// Source of randomized colors
pub trait RandomColor {
    /// Produce a new color derived from `seed`
    ///
    /// `count` is the number of steps taken away from the seed and `factor`
    /// scales how far each step may move (1.0 = full intensity).
    fn next_color(&mut self, seed: Rgbw, count: u8, factor: f32) -> Rgbw;
}

/// Random-walk color generator backed by a `SplitMix64` sequence
///
/// Every step nudges each of the red, green and blue channels by up to
/// `±MAX_STEP * factor`, saturating at the channel limits. The white channel
/// is carried over from the seed unchanged.
#[derive(Debug, Clone)]
pub struct RandomWalk {
    state: u64,
}

impl RandomWalk {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    #[inline]
    const fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Signed offset in `-step..=step`
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn offset(&mut self, step: u16) -> i16 {
        if step == 0 {
            return 0;
        }
        let span = u64::from(step) * 2 + 1;
        (self.next_u64() % span) as i16 - step as i16
    }
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self::new(0x5eed_c0de_u64)
    }
}

impl RandomColor for RandomWalk {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn next_color(&mut self, seed: Rgbw, count: u8, factor: f32) -> Rgbw {
        let step = (MAX_STEP * factor.clamp(0.0, 1.0)) as u16;

        let mut color = seed;
        for _ in 0..count {
            color = rgbw(
                walk(color.r, self.offset(step)),
                walk(color.g, self.offset(step)),
                walk(color.b, self.offset(step)),
                color.a.0,
            );
        }
        color
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn walk(value: u8, offset: i16) -> u8 {
    (i16::from(value) + offset).clamp(0, 255) as u8
}
