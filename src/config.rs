use crate::color::{GREEN, RED, Rgbw};

/// Frame timeout handed to the panel, in milliseconds
pub const DEFAULT_TIMEOUT_MS: u32 = 30;

/// Configuration for the VU meter effect
///
/// `timeout` and `dim_all` are handed to the panel on init. The gradient
/// endpoints are used whenever the palette is rebuilt without randomization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VuMeterConfig {
    /// Panel frame timeout in milliseconds
    pub timeout: u32,
    /// Dim every pixel on the panel
    pub dim_all: bool,
    /// Color of the lowest (quietest) row
    pub color_start: Rgbw,
    /// Color of the highest (loudest) row
    pub color_end: Rgbw,
}

impl Default for VuMeterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl VuMeterConfig {
    pub const fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT_MS,
            dim_all: false,
            color_start: GREEN,
            color_end: RED,
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: u32) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_dim_all(mut self, dim_all: bool) -> Self {
        self.dim_all = dim_all;
        self
    }

    /// Set the gradient endpoints (`start` at the bottom, `end` at the top)
    #[must_use]
    pub const fn with_colors(mut self, start: Rgbw, end: Rgbw) -> Self {
        self.color_start = start;
        self.color_end = end;
        self
    }
}
