//! # Memory Management
//!
//! Pre-allocated slot recycling shared by the entity table and the component
//! pools.
//!
//! ## Design Philosophy
//!
//! All memory is allocated once, when a store is built. Afterwards:
//! - No heap allocations
//! - O(1) claim and release
//! - Fixed capacity, no growth

mod index_stack;
mod pool;

pub use index_stack::IndexStack;
pub use pool::{ComponentPool, DestroyFn};
