//! Live audio level shared between the audio subsystem and the renderer
//!
//! The audio side publishes a fresh [`AudioTriggerData`] whenever it has
//! one; the renderer takes a single snapshot per frame. Access goes through
//! a critical section, so the signal can live in a `static` and be written
//! from an interrupt or another task.

use core::cell::Cell;
use core::fmt;

use critical_section::Mutex;

/// Snapshot of the normalized audio level
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AudioTriggerData {
    /// Input is currently above the noise gate
    pub is_noisy: bool,
    /// Current normalized level (0.0-1.0)
    pub level: f32,
    /// Normalized level of the previous sample
    pub old_level: f32,
    /// Running normalization baseline
    pub norm_level: f32,
    /// Last raw level, before normalization
    pub last_level: f32,
}

impl AudioTriggerData {
    pub const fn new() -> Self {
        Self {
            is_noisy: false,
            level: 0.0,
            old_level: 0.0,
            norm_level: 0.0,
            last_level: 0.0,
        }
    }
}

/// Shared cell holding the latest [`AudioTriggerData`]
pub struct AudioSignal {
    inner: Mutex<Cell<AudioTriggerData>>,
}

impl AudioSignal {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(AudioTriggerData::new())),
        }
    }

    /// Replace the current data
    pub fn publish(&self, data: AudioTriggerData) {
        critical_section::with(|cs| self.inner.borrow(cs).set(data));
    }

    /// Modify the current data in place
    pub fn update(&self, f: impl FnOnce(&mut AudioTriggerData)) {
        critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            let mut data = cell.get();
            f(&mut data);
            cell.set(data);
        });
    }

    /// Copy of the current data
    pub fn snapshot(&self) -> AudioTriggerData {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }
}

impl fmt::Debug for AudioSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioSignal").finish_non_exhaustive()
    }
}

impl Default for AudioSignal {
    fn default() -> Self {
        Self::new()
    }
}
