//! # Component System
//!
//! Components are pure data records with no behavior. The store keeps them
//! as fixed-size byte slots; the [`Component`] trait layers a typed view on
//! top for plain-old-data types.

use bytemuck::{Pod, Zeroable};

/// Small integer id of a component type, below the store's component count.
pub type ComponentType = u8;

/// Marker trait for typed components.
///
/// Components must be:
/// - `Pod`: Plain old data, stored as raw bytes in a pool slot
/// - `Zeroable`: A zero-filled slot is a valid value
/// - `Send + Sync`: The store may be moved behind an external lock
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, Copy, Pod, Zeroable)]
/// #[repr(C)]
/// struct Health {
///     current: u32,
///     max: u32,
/// }
///
/// impl Component for Health {
///     const TYPE: ComponentType = 0;
/// }
/// ```
pub trait Component: Pod + Zeroable + Send + Sync + 'static {
    /// Type id this component is registered under.
    const TYPE: ComponentType;

    /// Slot size in bytes.
    const SIZE: usize = std::mem::size_of::<Self>();
}
