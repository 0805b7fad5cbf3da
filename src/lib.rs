#![no_std]

pub mod audio;
pub mod color;
pub mod config;
pub mod effect;
pub mod error;
pub mod frame_scheduler;
pub mod palette;
pub mod panel;

pub use audio::{AudioSignal, AudioTriggerData};
pub use config::VuMeterConfig;
pub use effect::{
    Effect, EffectAction, EffectRegistry, MeterState, VU_METER_EFFECT_NAME, VuMeter, dispatch,
};
pub use error::{EffectError, RegistryError};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use palette::{MeterColors, Palette};
pub use panel::{MatrixPanel, Panel};

pub use color::{RandomColor, RandomWalk, Rgb, Rgbw};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// [`MatrixPanel`] hands every committed frame to its driver.
pub trait OutputDriver {
    /// Write colors to the LED panel, row-major starting at the top left
    fn write(&mut self, colors: &[Rgbw]);
}

/// Route `log` output through `esp-println`
#[cfg(feature = "esp32-log")]
pub fn init_esp_logger(level: log::LevelFilter) {
    esp_println::logger::init_logger(level);
}
