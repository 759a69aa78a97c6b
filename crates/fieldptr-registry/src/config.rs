//! Registry configuration and validation.

use std::error::Error;
use std::fmt;

use fieldptr_core::FieldPointerId;

/// Configuration for a [`FieldPointerRegistry`](crate::FieldPointerRegistry).
///
/// Fixed at construction; the slot count never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Number of slots. Default: [`FieldPointerId::COUNT`].
    pub capacity: usize,
    /// Upper bound on any slot's sub-list width. Default:
    /// [`i16::MAX`], the widest sub-list a 16-bit size field can record.
    ///
    /// Mapping a sub-index at or above this bound is a contract
    /// violation. Lower it to catch runaway indices earlier.
    pub max_sublist_len: usize,
}

impl RegistryConfig {
    /// Default sub-list bound.
    pub const DEFAULT_MAX_SUBLIST_LEN: usize = i16::MAX as usize;

    /// Config for a registry with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.capacity > usize::from(u16::MAX) {
            return Err(ConfigError::CapacityTooLarge {
                capacity: self.capacity,
            });
        }
        if self.max_sublist_len == 0 {
            return Err(ConfigError::ZeroSublistLen);
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            capacity: FieldPointerId::COUNT,
            max_sublist_len: Self::DEFAULT_MAX_SUBLIST_LEN,
        }
    }
}

/// Errors detected by [`RegistryConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A registry needs at least one slot.
    ZeroCapacity,
    /// Enumerator spaces are small; anything past `u16::MAX` is a mistake.
    CapacityTooLarge {
        /// The configured capacity.
        capacity: usize,
    },
    /// `max_sublist_len` must be at least 1.
    ZeroSublistLen,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "registry capacity must be at least 1"),
            Self::CapacityTooLarge { capacity } => {
                write!(f, "registry capacity {capacity} exceeds {}", u16::MAX)
            }
            Self::ZeroSublistLen => write!(f, "max_sublist_len must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_covers_every_enumerator() {
        let cfg = RegistryConfig::default();
        assert_eq!(cfg.capacity, FieldPointerId::COUNT);
        assert_eq!(cfg.max_sublist_len, 32_767);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(
            RegistryConfig::with_capacity(0).validate(),
            Err(ConfigError::ZeroCapacity)
        );
    }

    #[test]
    fn oversized_capacity_rejected() {
        let cfg = RegistryConfig::with_capacity(70_000);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::CapacityTooLarge { capacity: 70_000 })
        ));
    }

    #[test]
    fn zero_sublist_len_rejected() {
        let cfg = RegistryConfig {
            max_sublist_len: 0,
            ..RegistryConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroSublistLen));
    }
}
