//! # Index Stack
//!
//! Fixed-capacity LIFO of slot numbers, shared by the entity table and every
//! component pool to recycle free slots.

use crate::error::{StoreError, StoreResult};

/// A fixed-capacity stack of `u32` slot numbers.
///
/// All storage is allocated at construction. Pushing onto a full stack is
/// rejected rather than growing or overwriting, and popping an empty stack
/// yields `None`, so slot `0` is always an ordinary value.
///
/// # Example
///
/// ```rust,ignore
/// let mut free = IndexStack::with_descending(4);
/// assert_eq!(free.pop(), Some(0));
/// free.push(0)?;
/// ```
#[derive(Debug, Clone)]
pub struct IndexStack {
    /// Backing storage, `capacity` entries long.
    items: Box<[u32]>,
    /// Number of entries currently on the stack.
    len: usize,
}

impl IndexStack {
    /// Creates an empty stack able to hold `capacity` slot numbers.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            items: vec![0u32; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Creates a full stack holding `0..capacity`, with `0` on top.
    ///
    /// Popping repeatedly yields slots in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds `u32::MAX`.
    #[must_use]
    pub fn with_descending(capacity: usize) -> Self {
        let top = u32::try_from(capacity).expect("index stack capacity exceeds u32::MAX");
        let items: Vec<u32> = (0..top).rev().collect();
        Self {
            items: items.into_boxed_slice(),
            len: capacity,
        }
    }

    /// Returns the fixed capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of entries on the stack.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing can be popped.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if nothing more can be pushed.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.items.len()
    }

    /// Pushes a slot number.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StackFull`] and leaves the stack unchanged if it
    /// is already at capacity.
    pub fn push(&mut self, value: u32) -> StoreResult<()> {
        if self.is_full() {
            tracing::warn!(value, capacity = self.capacity(), "push onto full index stack ignored");
            return Err(StoreError::StackFull {
                capacity: self.capacity(),
            });
        }
        self.items[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Pops the most recently pushed slot number.
    pub fn pop(&mut self) -> Option<u32> {
        if self.is_empty() {
            tracing::warn!(capacity = self.capacity(), "pop from empty index stack");
            return None;
        }
        self.len -= 1;
        Some(self.items[self.len])
    }

    /// Returns the top slot number without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<u32> {
        self.len.checked_sub(1).map(|top| self.items[top])
    }

    /// Drops every entry. Capacity is kept.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}
