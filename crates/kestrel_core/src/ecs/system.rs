//! # Systems
//!
//! A flat, append-only list of `(callback, phase)` pairs. There is no
//! dependency ordering: callbacks run in registration order.

use super::store::EntityStore;
use crate::error::{StoreError, StoreResult};

/// A system callback. Receives the store it was registered on.
pub type SystemFn = fn(&mut EntityStore);

/// Tag selecting which systems a dispatch runs (e.g. update vs. render).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Phase(pub u32);

/// Fixed-capacity list of registered systems.
#[derive(Debug, Clone)]
pub struct SystemList {
    entries: Vec<(SystemFn, Phase)>,
    capacity: usize,
}

impl SystemList {
    /// Creates an empty list with room for `capacity` systems.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the number of registered systems.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no system is registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the fixed capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends a system, returning its position.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SystemCapacity`] if the list is full.
    pub fn push(&mut self, system: SystemFn, phase: Phase) -> StoreResult<usize> {
        if self.entries.len() >= self.capacity {
            return Err(StoreError::SystemCapacity(self.capacity));
        }
        self.entries.push((system, phase));
        Ok(self.entries.len() - 1)
    }

    /// Returns the system at `index`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<(SystemFn, Phase)> {
        self.entries.get(index).copied()
    }
}
