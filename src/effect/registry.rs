use heapless::Vec;

use super::{Effect, EffectAction, dispatch};
use crate::error::RegistryError;

/// Named effects a host can drive by action tag
///
/// Holds up to `N` borrowed effects. Names are unique.
pub struct EffectRegistry<'a, P: 'a, const N: usize> {
    entries: Vec<(&'static str, &'a mut dyn Effect<P>), N>,
}

impl<'a, P: 'a, const N: usize> EffectRegistry<'a, P, N> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register `effect` under `name`
    pub fn register(
        &mut self,
        name: &'static str,
        effect: &'a mut dyn Effect<P>,
    ) -> Result<(), RegistryError> {
        if self.contains(name) {
            return Err(RegistryError::Duplicate(name));
        }
        self.entries
            .push((name, effect))
            .map_err(|_| RegistryError::Full)?;

        #[cfg(feature = "log")]
        log::info!("[EffectRegistry.register] registered effect {}", name);

        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Issue `action` to the effect registered under `name`
    pub fn dispatch(
        &mut self,
        name: &str,
        panel: &mut P,
        action: EffectAction,
    ) -> Result<(), RegistryError> {
        let (_, effect) = self
            .entries
            .iter_mut()
            .find(|(entry, _)| *entry == name)
            .ok_or(RegistryError::UnknownEffect)?;

        #[cfg(feature = "log")]
        match action {
            EffectAction::Loop => log::trace!("{}: called ({})", name, action.as_str()),
            _ => log::info!("{}: called ({})", name, action.as_str()),
        }

        dispatch(&mut **effect, panel, action)?;
        Ok(())
    }
}

impl<'a, P: 'a, const N: usize> Default for EffectRegistry<'a, P, N> {
    fn default() -> Self {
        Self::new()
    }
}
