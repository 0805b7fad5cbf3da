//! Per-row gradient used by the VU meter
//!
//! Row 0 (top) carries the "end" color, the last row carries the "start"
//! color, everything in between is interpolated linearly.

use heapless::Vec;

use crate::color::{BLACK, DIM_BLUE, GREEN, RED, RandomColor, Rgbw, interpolate};
use crate::error::EffectError;

/// Colors the palette is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterColors {
    /// Color painted behind the bar
    pub background: Rgbw,
    /// Color of the lowest row
    pub start: Rgbw,
    /// Color of the highest row
    pub end: Rgbw,
}

impl MeterColors {
    pub const fn new(start: Rgbw, end: Rgbw) -> Self {
        Self {
            background: DIM_BLUE,
            start,
            end,
        }
    }
}

impl Default for MeterColors {
    fn default() -> Self {
        Self::new(GREEN, RED)
    }
}

/// One color per panel row, for panels up to `MAX_ROWS` rows high
#[derive(Debug, Clone, Default)]
pub struct Palette<const MAX_ROWS: usize> {
    rows: Vec<Rgbw, MAX_ROWS>,
}

impl<const MAX_ROWS: usize> Palette<MAX_ROWS> {
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Rebuild the whole palette for a panel of `height` rows
    ///
    /// With `random` set, only the background takes a random step away from
    /// its current value and the gradient endpoints are kept. Otherwise
    /// `colors` is reset to `defaults`.
    pub fn build<R: RandomColor>(
        &mut self,
        height: usize,
        random: bool,
        colors: &mut MeterColors,
        defaults: &MeterColors,
        rng: &mut R,
    ) -> Result<(), EffectError> {
        self.resize(height)?;

        if random {
            colors.background = rng.next_color(colors.background, 1, 1.0);
        } else {
            *colors = *defaults;
        }

        let last = height.saturating_sub(1);
        for (y, row) in self.rows.iter_mut().enumerate() {
            *row = interpolate(row_percent(y, last), colors.start, colors.end);
        }

        Ok(())
    }

    /// Change the number of rows, keeping existing entries
    pub fn resize(&mut self, height: usize) -> Result<(), EffectError> {
        self.rows
            .resize(height, BLACK)
            .map_err(|()| EffectError::OutOfMemory {
                requested: height,
                capacity: MAX_ROWS,
            })
    }

    /// Color of `row`, if the palette has that many rows
    pub fn get(&self, row: usize) -> Option<Rgbw> {
        self.rows.get(row).copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn as_slice(&self) -> &[Rgbw] {
        &self.rows
    }

    pub const fn capacity(&self) -> usize {
        MAX_ROWS
    }
}

/// Position of row `y` on a gradient whose last row is `last`
///
/// A single-row panel has no span to interpolate over and gets the end color.
#[allow(clippy::cast_precision_loss)]
fn row_percent(y: usize, last: usize) -> f64 {
    if last == 0 {
        return 0.0;
    }
    y as f64 / last as f64
}
