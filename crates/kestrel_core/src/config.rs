//! # Store Configuration
//!
//! The three capacities a store is built with. They are fixed for the
//! store's lifetime; nothing grows afterwards.

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Default entity capacity.
pub const DEFAULT_MAX_ENTITIES: usize = 1024;

/// Default number of component types.
pub const DEFAULT_COMPONENT_COUNT: usize = 32;

/// Default number of system slots.
pub const DEFAULT_SYSTEM_COUNT: usize = 16;

/// Largest supported number of component types.
pub const MAX_COMPONENT_TYPES: usize = 256;

/// Capacities for an [`EntityStore`](crate::EntityStore).
///
/// Loaded once at startup, typically from a TOML table:
///
/// ```toml
/// max_entities = 4096
/// component_count = 8
/// system_count = 4
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum number of simultaneously live entities.
    pub max_entities: usize,
    /// Number of component type ids, `0..component_count`.
    pub component_count: usize,
    /// Maximum number of registered systems.
    pub system_count: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_entities: DEFAULT_MAX_ENTITIES,
            component_count: DEFAULT_COMPONENT_COUNT,
            system_count: DEFAULT_SYSTEM_COUNT,
        }
    }
}

impl StoreConfig {
    /// Creates a configuration from explicit capacities.
    #[must_use]
    pub const fn new(max_entities: usize, component_count: usize, system_count: usize) -> Self {
        Self {
            max_entities,
            component_count,
            system_count,
        }
    }

    /// Parses and validates a TOML configuration. Missing keys take their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if the text is not valid TOML for this
    /// table, or [`StoreError::InvalidCapacity`] if a capacity is out of range.
    pub fn from_toml_str(text: &str) -> StoreResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| StoreError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every capacity is in range.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidCapacity`] naming the first bad field.
    pub fn validate(&self) -> StoreResult<()> {
        if self.max_entities == 0 || self.max_entities >= u32::MAX as usize {
            return Err(StoreError::InvalidCapacity {
                what: "max_entities",
                value: self.max_entities,
            });
        }
        if self.component_count == 0 || self.component_count > MAX_COMPONENT_TYPES {
            return Err(StoreError::InvalidCapacity {
                what: "component_count",
                value: self.component_count,
            });
        }
        if self.system_count == 0 {
            return Err(StoreError::InvalidCapacity {
                what: "system_count",
                value: self.system_count,
            });
        }
        if self.max_entities.checked_mul(self.component_count).is_none() {
            return Err(StoreError::InvalidCapacity {
                what: "max_entities * component_count",
                value: self.max_entities,
            });
        }
        Ok(())
    }
}
