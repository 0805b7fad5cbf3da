mod interpolate;
mod random;

pub use interpolate::interpolate;
pub use random::{RandomColor, RandomWalk};
use smart_leds::{RGB8, RGBW, White};

pub type Rgb = RGB8;
pub type Rgbw = RGBW<u8>;

pub const BLACK: Rgbw = rgbw(0, 0, 0, 0);
pub const RED: Rgbw = rgbw(255, 0, 0, 0);
pub const GREEN: Rgbw = rgbw(0, 255, 0, 0);
/// Dim blue the meter paints behind the bar until the first randomization
pub const DIM_BLUE: Rgbw = rgbw(0, 0, 90, 0);

/// Create a four-channel color
#[inline]
pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Rgbw {
    Rgbw { r, g, b, a: White(w) }
}

/// Drop the white channel for three-channel LED drivers
#[inline]
pub const fn to_rgb(color: Rgbw) -> Rgb {
    Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Create an RGBW color from a u32 value (0xRRGGBBWW format)
pub const fn rgbw_from_u32(color: u32) -> Rgbw {
    rgbw(
        ((color >> 24) & 0xFF) as u8,
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}
