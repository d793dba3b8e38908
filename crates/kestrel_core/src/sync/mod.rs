//! # Synchronization
//!
//! The store is defined for single-threaded mutation only. Hosts that share
//! one store between threads put it behind [`SharedStore`], a single lock
//! spanning every operation.

mod shared;

pub use shared::SharedStore;
