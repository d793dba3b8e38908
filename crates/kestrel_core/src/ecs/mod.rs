//! # Entity Component Store
//!
//! Generation-checked entity handles with an arbitrary mix of fixed-size
//! component records per entity.
//!
//! ## Design Philosophy
//!
//! - All storage is pre-allocated at store creation or type registration
//! - Entity IDs are slot indices with generation counters
//! - A dense existence grid answers "does e have t" in O(1)
//! - Iteration walks one component type at a time

mod component;
mod entity;
mod grid;
mod store;
mod system;
mod view;

pub use component::{Component, ComponentType};
pub use entity::{EntityId, EntityTable};
pub use grid::ExistenceGrid;
pub use store::EntityStore;
pub use system::{Phase, SystemFn, SystemList};
pub use view::View;
