//! Display panel abstraction
//!
//! [`Panel`] is the surface effects draw on. [`MatrixPanel`] is a
//! fixed-capacity, row-major frame buffer that hands finished frames to an
//! [`OutputDriver`].

use crate::OutputDriver;
use crate::color::{BLACK, Rgbw};
use crate::error::EffectError;

/// Rectangular grid of addressable pixels
///
/// Row 0 is the top of the panel. Writes outside the panel are ignored.
pub trait Panel {
    /// Width in pixels
    fn width(&self) -> usize;

    /// Height in pixels
    fn height(&self) -> usize;

    /// Turn every pixel off
    fn clear(&mut self) {
        self.plot_all(BLACK);
    }

    /// Set a single pixel
    fn plot_pixel(&mut self, x: usize, y: usize, color: Rgbw);

    /// Set every pixel to one color
    fn plot_all(&mut self, color: Rgbw);

    /// Commit the current frame to the display
    fn show(&mut self);

    /// Scroll position cursor
    fn pix_pos(&self) -> usize;

    fn set_pix_pos(&mut self, pos: usize);

    /// Frame timeout in milliseconds
    fn set_timeout(&mut self, timeout: u32);

    fn set_dim_all(&mut self, dim_all: bool);
}

/// In-memory panel with room for at most `N` pixels
pub struct MatrixPanel<D: OutputDriver, const N: usize> {
    driver: D,
    pixels: [Rgbw; N],
    width: usize,
    height: usize,
    pix_pos: usize,
    timeout: u32,
    dim_all: bool,
    frames_shown: u32,
}

impl<D: OutputDriver, const N: usize> MatrixPanel<D, N> {
    /// Create a panel of `width` x `height` pixels
    ///
    /// Fails if the panel does not fit into `N` pixels.
    pub fn new(driver: D, width: usize, height: usize) -> Result<Self, EffectError> {
        let requested = width.checked_mul(height).unwrap_or(usize::MAX);
        if requested > N {
            return Err(EffectError::OutOfMemory {
                requested,
                capacity: N,
            });
        }

        Ok(Self {
            driver,
            pixels: [BLACK; N],
            width,
            height,
            pix_pos: 0,
            timeout: 0,
            dim_all: false,
            frames_shown: 0,
        })
    }

    /// Pixels of the visible area in row-major order
    pub fn pixels(&self) -> &[Rgbw] {
        &self.pixels[..self.width * self.height]
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgbw> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Pixels of a single row
    pub fn row(&self, y: usize) -> Option<&[Rgbw]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.pixels[start..start + self.width])
    }

    /// Number of frames committed with [`Panel::show`]
    pub const fn frames_shown(&self) -> u32 {
        self.frames_shown
    }

    pub const fn timeout(&self) -> u32 {
        self.timeout
    }

    pub const fn dim_all(&self) -> bool {
        self.dim_all
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub const fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    const fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}

impl<D: OutputDriver, const N: usize> Panel for MatrixPanel<D, N> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn plot_pixel(&mut self, x: usize, y: usize, color: Rgbw) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    fn plot_all(&mut self, color: Rgbw) {
        let len = self.width * self.height;
        self.pixels[..len].fill(color);
    }

    fn show(&mut self) {
        let len = self.width * self.height;
        self.driver.write(&self.pixels[..len]);
        self.frames_shown = self.frames_shown.wrapping_add(1);
    }

    fn pix_pos(&self) -> usize {
        self.pix_pos
    }

    fn set_pix_pos(&mut self, pos: usize) {
        self.pix_pos = pos;
    }

    fn set_timeout(&mut self, timeout: u32) {
        self.timeout = timeout;
    }

    fn set_dim_all(&mut self, dim_all: bool) {
        self.dim_all = dim_all;
    }
}
