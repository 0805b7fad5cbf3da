//! Audio-reactive VU meter
//!
//! Lights a horizontal bar that grows upward from the bottom row as the
//! audio level rises. Every lit row shows its own palette color, so the bar
//! runs through the gradient from the start color (bottom) to the end color
//! (top). Loud frames that light at least half of the panel move the
//! background color one random step.

use super::{Effect, EffectRegistry};
use crate::audio::{AudioSignal, AudioTriggerData};
use crate::color::{RandomColor, RandomWalk, Rgbw};
use crate::config::VuMeterConfig;
use crate::error::{EffectError, RegistryError};
use crate::palette::{MeterColors, Palette};
use crate::panel::Panel;

/// Name the effect registers under
pub const VU_METER_EFFECT_NAME: &str = "ANIM_VU_METER";

/// Share of the panel (in percent) that must be lit before the background
/// may be re-randomized
pub const RANDOMIZE_LIT_PERCENT: usize = 50;

/// Diagnostics are emitted once every this many frames
pub const FRAMES_PER_LOG: u8 = 10;

/// Number of rows lit from the bottom for `level`
///
/// `level` is scaled by the panel height and rounded; values outside
/// `0.0..=1.0` (and NaN) saturate to an empty or a full bar.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn lit_rows(height: usize, level: f32) -> usize {
    let lit = libm::round(height as f64 * f64::from(level)) as i64;
    lit.clamp(0, height as i64) as usize
}

/// Row index at and above which the bar is not lit for `level`
///
/// Level 0.0 yields the bottom row, a full-scale level yields row 0. The
/// result is clamped to `0..height`.
pub fn threshold_row(height: usize, level: f32) -> usize {
    height.saturating_sub(lit_rows(height, level) + 1)
}

/// Check if the palette should be re-randomized this frame
///
/// Only loud frames qualify: the previous level must be at or above the
/// normalization baseline and the bar must cover the upper half of the
/// panel.
pub fn should_randomize(height: usize, threshold: usize, audio: &AudioTriggerData) -> bool {
    audio.old_level >= audio.norm_level && threshold < height * RANDOMIZE_LIT_PERCENT / 100
}

/// State of an active meter
#[derive(Debug, Clone)]
pub struct MeterState<'a, const MAX_ROWS: usize> {
    palette: Palette<MAX_ROWS>,
    colors: MeterColors,
    audio: &'a AudioSignal,
    frame: u8,
}

impl<'a, const MAX_ROWS: usize> MeterState<'a, MAX_ROWS> {
    pub const fn palette(&self) -> &Palette<MAX_ROWS> {
        &self.palette
    }

    pub const fn colors(&self) -> MeterColors {
        self.colors
    }

    pub const fn background(&self) -> Rgbw {
        self.colors.background
    }

    /// Audio signal the meter was bound to on init
    pub const fn audio(&self) -> &'a AudioSignal {
        self.audio
    }
}

/// VU meter effect for panels up to `MAX_ROWS` rows high
///
/// The meter is either uninitialized (no state) or active. `init` allocates
/// the palette and binds the audio signal, `exit` drops everything again.
pub struct VuMeter<'a, R: RandomColor = RandomWalk, const MAX_ROWS: usize = 64> {
    config: VuMeterConfig,
    source: &'a AudioSignal,
    rng: R,
    state: Option<MeterState<'a, MAX_ROWS>>,
}

impl<'a, const MAX_ROWS: usize> VuMeter<'a, RandomWalk, MAX_ROWS> {
    /// Create a meter reading from `source`, randomizing with a [`RandomWalk`]
    pub fn new(source: &'a AudioSignal, config: VuMeterConfig) -> Self {
        Self::with_random(source, config, RandomWalk::default())
    }
}

impl<'a, R: RandomColor, const MAX_ROWS: usize> VuMeter<'a, R, MAX_ROWS> {
    /// Create a meter with a custom random color source
    pub const fn with_random(source: &'a AudioSignal, config: VuMeterConfig, rng: R) -> Self {
        Self {
            config,
            source,
            rng,
            state: None,
        }
    }

    pub const fn config(&self) -> &VuMeterConfig {
        &self.config
    }

    /// Check if the meter has been initialized and not exited yet
    pub const fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// State of the meter, if it is active
    pub const fn state(&self) -> Option<&MeterState<'a, MAX_ROWS>> {
        self.state.as_ref()
    }

    /// Register the meter under [`VU_METER_EFFECT_NAME`]
    pub fn register<'r, P: Panel + 'r, const N: usize>(
        &'r mut self,
        registry: &mut EffectRegistry<'r, P, N>,
    ) -> Result<(), RegistryError> {
        registry.register(VU_METER_EFFECT_NAME, self)
    }

    fn defaults(&self) -> MeterColors {
        MeterColors::new(self.config.color_start, self.config.color_end)
    }
}

impl<P: Panel, R: RandomColor, const MAX_ROWS: usize> Effect<P> for VuMeter<'_, R, MAX_ROWS> {
    fn init(&mut self, panel: &mut P) -> Result<(), EffectError> {
        self.state = None;

        let height = panel.height();
        let defaults = self.defaults();
        let mut palette = Palette::new();
        let mut colors = defaults;
        palette.build(height, false, &mut colors, &defaults, &mut self.rng)?;

        panel.set_timeout(self.config.timeout);
        panel.set_dim_all(self.config.dim_all);
        panel.clear();

        self.state = Some(MeterState {
            palette,
            colors,
            audio: self.source,
            frame: 0,
        });

        #[cfg(feature = "log")]
        log::info!(
            "[VuMeter.init] {}x{} panel, timeout: {}ms",
            panel.width(),
            height,
            self.config.timeout
        );

        Ok(())
    }

    fn tick(&mut self, panel: &mut P) {
        let Some(state) = self.state.as_mut() else {
            #[cfg(feature = "log")]
            log::warn!("[VuMeter.tick] called before init");
            return;
        };

        let audio = state.audio.snapshot();
        if audio.is_noisy {
            panel.set_pix_pos(0);
        }

        let width = panel.width();
        let height = panel.height();
        let lit = lit_rows(height, audio.level);
        let threshold = threshold_row(height, audio.level);

        if should_randomize(height, threshold, &audio) {
            // Rebuilding with `random` keeps the gradient endpoints
            let defaults = MeterColors::new(self.config.color_start, self.config.color_end);
            if let Err(_err) = state.palette.build(
                height,
                true,
                &mut state.colors,
                &defaults,
                &mut self.rng,
            ) {
                #[cfg(feature = "log")]
                log::warn!("[VuMeter.tick] palette kept: {}", _err);
            }
        }

        panel.plot_all(state.colors.background);
        for y in (height - lit)..height {
            let Some(color) = state.palette.get(y) else {
                break;
            };
            for x in 0..width {
                panel.plot_pixel(x, y, color);
            }
        }
        panel.show();

        if state.frame == 0 {
            #[cfg(feature = "log")]
            log::debug!(
                "Level: {:.03} - norm: {:.03}, threshold: {}",
                audio.last_level,
                audio.norm_level,
                threshold
            );
        }
        state.frame = (state.frame + 1) % FRAMES_PER_LOG;
    }

    fn exit(&mut self, _panel: &mut P) {
        if self.state.take().is_some() {
            #[cfg(feature = "log")]
            log::info!("[VuMeter.exit] released meter state");
        }
    }

    fn is_active(&self) -> bool {
        self.state.is_some()
    }
}
