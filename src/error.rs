use core::fmt;

/// Failure of an effect lifecycle step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectError {
    /// A fixed-capacity buffer is too small for the panel geometry
    OutOfMemory { requested: usize, capacity: usize },
}

impl fmt::Display for EffectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory {
                requested,
                capacity,
            } => write!(
                f,
                "out of memory: requested {requested} entries, capacity is {capacity}"
            ),
        }
    }
}

impl core::error::Error for EffectError {}

/// Failure of an effect registry operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// Registry has no free slots
    Full,
    /// An effect with the same name is already registered
    Duplicate(&'static str),
    /// No effect is registered under the requested name
    UnknownEffect,
    /// The effect itself failed
    Effect(EffectError),
}

impl From<EffectError> for RegistryError {
    fn from(err: EffectError) -> Self {
        Self::Effect(err)
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("effect registry is full"),
            Self::Duplicate(name) => write!(f, "effect {name} is already registered"),
            Self::UnknownEffect => f.write_str("unknown effect"),
            Self::Effect(err) => write!(f, "effect failed: {err}"),
        }
    }
}

impl core::error::Error for RegistryError {}
