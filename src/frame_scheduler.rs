//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::effect::Effect;
use crate::error::EffectError;

/// Default target frame rate (30 FPS).
pub const DEFAULT_FPS: u32 = 30;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler driving one effect on one panel.
///
/// This scheduler:
/// - Runs the effect lifecycle (`start` -> `tick`... -> `stop`)
/// - Tracks frame timing with drift correction
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(meter, panel);
/// scheduler.start(Instant::from_millis(now_ms()))?;
///
/// loop {
///     let result = scheduler.tick(Instant::from_millis(now_ms()));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<P, E: Effect<P>> {
    panel: P,
    effect: E,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<P, E: Effect<P>> FrameScheduler<P, E> {
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (30 FPS) for frame timing.
    pub fn new(effect: E, panel: P) -> Self {
        Self::with_frame_duration(effect, panel, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(effect: E, panel: P, frame_duration: Duration) -> Self {
        Self {
            panel,
            effect,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Initialize the effect and schedule the first frame at `now`.
    pub fn start(&mut self, now: Instant) -> Result<(), EffectError> {
        self.effect.init(&mut self.panel)?;
        self.next_frame = now;
        Ok(())
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Renders the current frame onto the panel
    /// 3. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Skip the backlog instead of catching up after long stalls
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        self.effect.tick(&mut self.panel);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Release the effect state.
    pub fn stop(&mut self) {
        self.effect.exit(&mut self.panel);
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    pub fn effect(&self) -> &E {
        &self.effect
    }

    /// Split the scheduler back into its effect and panel.
    pub fn into_parts(self) -> (E, P) {
        (self.effect, self.panel)
    }
}
