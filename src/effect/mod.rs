//! Effect lifecycle and dispatch
//!
//! Effects are driven through three lifecycle steps: `init` once when the
//! effect becomes active, `tick` once per frame, and `exit` when the host
//! switches away. Hosts that drive effects by action tag can use
//! [`dispatch`] or an [`EffectRegistry`].

mod registry;
mod vu_meter;

pub use registry::EffectRegistry;
pub use vu_meter::{
    FRAMES_PER_LOG, MeterState, RANDOMIZE_LIT_PERCENT, VU_METER_EFFECT_NAME, VuMeter,
    lit_rows, should_randomize, threshold_row,
};

use crate::error::EffectError;

const ACTION_NAME_INIT: &str = "init";
const ACTION_NAME_LOOP: &str = "loop";
const ACTION_NAME_EXIT: &str = "exit";

const ACTION_ID_INIT: u8 = 0;
const ACTION_ID_LOOP: u8 = 1;
const ACTION_ID_EXIT: u8 = 2;

pub trait Effect<P> {
    /// Prepare the effect for rendering on `panel`
    fn init(&mut self, panel: &mut P) -> Result<(), EffectError>;

    /// Render a single frame
    fn tick(&mut self, panel: &mut P);

    /// Release effect state
    fn exit(&mut self, panel: &mut P);

    /// Check if the effect has been initialized and not exited yet
    fn is_active(&self) -> bool;
}

/// Lifecycle actions a host can issue
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectAction {
    Init = ACTION_ID_INIT,
    Loop = ACTION_ID_LOOP,
    Exit = ACTION_ID_EXIT,
}

impl EffectAction {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ACTION_ID_INIT => Self::Init,
            ACTION_ID_LOOP => Self::Loop,
            ACTION_ID_EXIT => Self::Exit,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Init => ACTION_NAME_INIT,
            Self::Loop => ACTION_NAME_LOOP,
            Self::Exit => ACTION_NAME_EXIT,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ACTION_NAME_INIT => Some(Self::Init),
            ACTION_NAME_LOOP => Some(Self::Loop),
            ACTION_NAME_EXIT => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Route a lifecycle action to the matching [`Effect`] method
pub fn dispatch<P, E: Effect<P> + ?Sized>(
    effect: &mut E,
    panel: &mut P,
    action: EffectAction,
) -> Result<(), EffectError> {
    match action {
        EffectAction::Init => effect.init(panel)?,
        EffectAction::Loop => effect.tick(panel),
        EffectAction::Exit => effect.exit(panel),
    }
    Ok(())
}
