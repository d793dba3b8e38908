//! # Kestrel Core
//!
//! Fixed-capacity entity/component store designed for:
//! - O(1) entity creation and destruction with generation-checked handles
//! - O(1) component add, remove and existence lookup
//! - Zero heap allocations after setup
//!
//! ## Architecture Rules
//!
//! 1. **Capacities are fixed at construction** - no growth, ever
//! 2. **Slots are recycled** - one free-list stack per entity table and pool
//! 3. **Misuse is logged, not fatal** - every failure is a `tracing` warning
//!    plus an `Err`, `Ok(false)` or `None`
//!
//! ## Example
//!
//! ```rust,ignore
//! use kestrel_core::{EntityStore, Phase};
//!
//! let mut store = EntityStore::new(4, 1, 1);
//! store.register_component(0, 4, 8, None)?;
//!
//! let e0 = store.make()?;
//! store.add_component(e0, 0, Some(&[0u8; 8]))?;
//!
//! for entity in store.view(0) {
//!     // ...
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod ecs;
pub mod error;
pub mod memory;
pub mod sync;

pub use config::StoreConfig;
pub use ecs::{
    Component, ComponentType, EntityId, EntityStore, EntityTable, ExistenceGrid, Phase, SystemFn,
    SystemList, View,
};
pub use error::{StoreError, StoreResult};
pub use memory::{ComponentPool, DestroyFn, IndexStack};
pub use sync::SharedStore;
