//! # Store Error Types
//!
//! All errors that can occur while mutating an entity store.
//!
//! None of these are fatal. Every operation that fails leaves the store in
//! the state it was in before the call and reports the failure through a
//! `tracing` warning as well as the returned error.

use thiserror::Error;

use crate::ecs::{ComponentType, EntityId};

/// Errors that can occur in the entity store and its pools.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Tried to push onto an index stack that is already at capacity.
    #[error("index stack full: capacity {capacity}")]
    StackFull {
        /// Fixed capacity of the stack.
        capacity: usize,
    },

    /// Every entity slot is currently live.
    #[error("entity capacity exhausted: {max_entities} entities live")]
    EntitiesExhausted {
        /// Configured entity capacity.
        max_entities: usize,
    },

    /// Every slot of a component pool is claimed.
    #[error("component pool {component} exhausted: capacity {capacity}")]
    PoolExhausted {
        /// The component type whose pool ran dry.
        component: ComponentType,
        /// Slot capacity of the pool.
        capacity: usize,
    },

    /// A store capacity is zero or exceeds the addressable range.
    #[error("invalid capacity for {what}: {value}")]
    InvalidCapacity {
        /// Which capacity was rejected.
        what: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// The component type id is not below `component_count`.
    #[error("component type {component} out of range (component count {component_count})")]
    ComponentOutOfRange {
        /// The offending type id.
        component: ComponentType,
        /// Number of component types the store was built for.
        component_count: usize,
    },

    /// The component type has no pool yet.
    #[error("component type {0} is not registered")]
    ComponentNotRegistered(ComponentType),

    /// The component type already has a pool.
    #[error("component type {0} is already registered")]
    AlreadyRegistered(ComponentType),

    /// A pool was requested with zero slots or zero-sized slots.
    #[error("invalid pool layout: {count} slots of {size} bytes")]
    InvalidPoolLayout {
        /// Requested slot count.
        count: usize,
        /// Requested slot size in bytes.
        size: usize,
    },

    /// Initial component data does not match the pool's slot size.
    #[error("component data is {actual} bytes, slot size is {expected}")]
    SizeMismatch {
        /// The pool's slot size.
        expected: usize,
        /// Length of the supplied data.
        actual: usize,
    },

    /// The handle's generation no longer matches its slot, or its slot is
    /// outside the store.
    #[error("stale or out-of-range entity handle {0:?}")]
    StaleEntity(EntityId),

    /// A pool slot was released while already free.
    #[error("pool slot {0} released twice")]
    DoubleRelease(u32),

    /// A pool slot index is not below the pool's capacity.
    #[error("pool slot {index} out of range (capacity {capacity})")]
    SlotOutOfRange {
        /// The offending slot index.
        index: u32,
        /// Slot capacity of the pool.
        capacity: usize,
    },

    /// The system list already holds `system_count` entries.
    #[error("system list full: capacity {0}")]
    SystemCapacity(usize),

    /// No system is registered at the given position.
    #[error("no system at position {index} ({registered} registered)")]
    SystemOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of systems currently registered.
        registered: usize,
    },

    /// Store configuration could not be parsed.
    #[error("invalid store configuration: {0}")]
    Config(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
