//! # Component Pool
//!
//! Fixed-size byte-slot allocator backing one component type.

use std::fmt;

use super::index_stack::IndexStack;
use crate::ecs::ComponentType;
use crate::error::{StoreError, StoreResult};

/// Callback run on a slot's contents right before the slot is released.
pub type DestroyFn = Box<dyn FnMut(&mut [u8]) + Send>;

/// A pool of `count` slots of `size` bytes each.
///
/// The whole buffer is allocated once. Claiming and releasing a slot are
/// **O(1)** and never touch the heap. Slots are handed out in ascending order
/// until the first release, after which the most recently released slot is
/// reused first.
///
/// Slot contents are not cleared on release: a claim either copies the
/// caller's bytes in or zero-fills the slot.
///
/// # Thread Safety
///
/// This pool is NOT thread-safe. It is owned by a single store.
///
/// # Example
///
/// ```rust,ignore
/// let mut pool = ComponentPool::new(0, 16, 8, None)?;
///
/// // Claim - O(1), copies the bytes in
/// let slot = pool.allocate(Some(&42u64.to_le_bytes()))?;
///
/// // Release - O(1)
/// pool.release(slot)?;
/// ```
pub struct ComponentPool {
    /// Component type this pool stores (for diagnostics).
    component: ComponentType,
    /// Flat `count * size` byte buffer.
    data: Box<[u8]>,
    /// Which slots are currently claimed.
    live: Box<[bool]>,
    /// Free slot numbers.
    free: IndexStack,
    /// Bytes per slot.
    size: usize,
    /// Optional per-slot destructor.
    destroy: Option<DestroyFn>,
}

impl ComponentPool {
    /// Creates a pool of `count` zeroed slots of `size` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPoolLayout`] if `count` or `size` is zero,
    /// or the buffer size would overflow.
    pub fn new(
        component: ComponentType,
        count: usize,
        size: usize,
        destroy: Option<DestroyFn>,
    ) -> StoreResult<Self> {
        let bytes = count.checked_mul(size).filter(|&b| b > 0);
        let Some(bytes) = bytes.filter(|_| u32::try_from(count).is_ok()) else {
            return Err(StoreError::InvalidPoolLayout { count, size });
        };

        Ok(Self {
            component,
            data: vec![0u8; bytes].into_boxed_slice(),
            live: vec![false; count].into_boxed_slice(),
            free: IndexStack::with_descending(count),
            size,
            destroy,
        })
    }

    /// Returns the slot capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.live.len()
    }

    /// Returns the size of one slot in bytes.
    #[inline]
    #[must_use]
    pub const fn slot_size(&self) -> usize {
        self.size
    }

    /// Returns the number of claimed slots.
    #[inline]
    #[must_use]
    pub fn allocated_count(&self) -> usize {
        self.capacity() - self.free.len()
    }

    /// Returns the number of free slots.
    #[inline]
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Returns `true` if `index` is currently claimed.
    #[inline]
    #[must_use]
    pub fn is_live(&self, index: u32) -> bool {
        self.live.get(index as usize).copied().unwrap_or(false)
    }

    /// Claims the next free slot.
    ///
    /// With `Some(data)` the slot receives a bytewise copy of `data`;
    /// with `None` it is zero-filled.
    ///
    /// # Errors
    ///
    /// - [`StoreError::SizeMismatch`] if `data` is not exactly one slot long.
    /// - [`StoreError::PoolExhausted`] if every slot is claimed.
    pub fn allocate(&mut self, data: Option<&[u8]>) -> StoreResult<u32> {
        if let Some(bytes) = data {
            if bytes.len() != self.size {
                return Err(StoreError::SizeMismatch {
                    expected: self.size,
                    actual: bytes.len(),
                });
            }
        }

        let Some(index) = self.free.pop() else {
            tracing::warn!(component = self.component, "component pool exhausted");
            return Err(StoreError::PoolExhausted {
                component: self.component,
                capacity: self.capacity(),
            });
        };

        let slot = self.slot_range(index);
        match data {
            Some(bytes) => self.data[slot].copy_from_slice(bytes),
            None => self.data[slot].fill(0),
        }
        self.live[index as usize] = true;

        Ok(index)
    }

    /// Releases a claimed slot, running the destructor on its contents first.
    ///
    /// # Errors
    ///
    /// - [`StoreError::SlotOutOfRange`] if `index` is not below the capacity.
    /// - [`StoreError::DoubleRelease`] if the slot is already free.
    pub fn release(&mut self, index: u32) -> StoreResult<()> {
        if index as usize >= self.capacity() {
            return Err(StoreError::SlotOutOfRange {
                index,
                capacity: self.capacity(),
            });
        }
        if !self.live[index as usize] {
            tracing::warn!(component = self.component, index, "pool slot released twice");
            return Err(StoreError::DoubleRelease(index));
        }

        let slot = self.slot_range(index);
        if let Some(destroy) = self.destroy.as_mut() {
            destroy(&mut self.data[slot]);
        }
        self.live[index as usize] = false;
        self.free.push(index)
    }

    /// Returns the bytes of a claimed slot.
    #[must_use]
    pub fn slot(&self, index: u32) -> Option<&[u8]> {
        if !self.is_live(index) {
            return None;
        }
        Some(&self.data[self.slot_range(index)])
    }

    /// Returns the bytes of a claimed slot mutably.
    pub fn slot_mut(&mut self, index: u32) -> Option<&mut [u8]> {
        if !self.is_live(index) {
            return None;
        }
        let slot = self.slot_range(index);
        Some(&mut self.data[slot])
    }

    #[inline]
    fn slot_range(&self, index: u32) -> std::ops::Range<usize> {
        let start = index as usize * self.size;
        start..start + self.size
    }
}

impl fmt::Debug for ComponentPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentPool")
            .field("component", &self.component)
            .field("capacity", &self.capacity())
            .field("slot_size", &self.size)
            .field("allocated", &self.allocated_count())
            .field("has_destructor", &self.destroy.is_some())
            .finish()
    }
}
