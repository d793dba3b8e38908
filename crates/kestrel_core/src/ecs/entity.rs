//! # Entity Management
//!
//! Entities are lightweight identifiers consisting of:
//! - An index into the per-entity arrays
//! - A generation counter for safe reuse

use crate::error::{StoreError, StoreResult};
use crate::memory::IndexStack;

/// Unique identifier for an entity.
///
/// The ID is split into two parts:
/// - Lower 32 bits: Index into per-entity arrays
/// - Upper 32 bits: Generation counter for detecting stale references
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct EntityId(u64);

impl EntityId {
    /// Creates a new entity ID from index and generation.
    ///
    /// # Arguments
    ///
    /// * `index` - The slot index (0 to 2^32-2)
    /// * `generation` - The generation counter (0 to 2^32-1)
    #[inline]
    #[must_use]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self(((generation as u64) << 32) | (index as u64))
    }

    /// Rebuilds an ID from its packed 64-bit form.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Returns the packed 64-bit form.
    #[inline]
    #[must_use]
    pub const fn to_bits(self) -> u64 {
        self.0
    }

    /// Returns the index portion of the entity ID.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0 as u32
    }

    /// Returns the generation portion of the entity ID.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Null/invalid entity ID. Never issued by a store.
    pub const NULL: Self = Self(u64::MAX);

    /// Checks if this entity ID is null/invalid.
    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == u64::MAX
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::NULL
    }
}

/// Per-slot generation table plus the free-slot stack.
///
/// A slot's generation is bumped only when the slot is freed, never when it
/// is claimed, so the first handle ever issued for a slot has generation 0.
#[derive(Debug, Clone)]
pub struct EntityTable {
    /// Current generation of every slot.
    generations: Box<[u32]>,
    /// Whether each slot is currently claimed.
    alive: Box<[bool]>,
    /// Free slot numbers, lowest on top initially.
    free: IndexStack,
    /// One past the highest slot ever issued. Never shrinks.
    watermark: usize,
    /// Number of claimed slots.
    alive_count: usize,
}

impl EntityTable {
    /// Creates a table with `capacity` free slots, all at generation 0.
    ///
    /// # Panics
    ///
    /// Panics if capacity is zero or not below `u32::MAX`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than zero");
        assert!(
            capacity < u32::MAX as usize,
            "Capacity must be below u32::MAX"
        );

        Self {
            generations: vec![0u32; capacity].into_boxed_slice(),
            alive: vec![false; capacity].into_boxed_slice(),
            free: IndexStack::with_descending(capacity),
            watermark: 0,
            alive_count: 0,
        }
    }

    /// Returns the slot capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.generations.len()
    }

    /// Returns the number of live entities.
    #[inline]
    #[must_use]
    pub const fn alive_count(&self) -> usize {
        self.alive_count
    }

    /// Returns one past the highest slot ever issued.
    #[inline]
    #[must_use]
    pub const fn watermark(&self) -> usize {
        self.watermark
    }

    /// Returns the current generation of a slot.
    #[inline]
    #[must_use]
    pub fn generation(&self, index: u32) -> Option<u32> {
        self.generations.get(index as usize).copied()
    }

    /// Claims a free slot and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EntitiesExhausted`] if every slot is live.
    pub fn allocate(&mut self) -> StoreResult<EntityId> {
        let Some(index) = self.free.pop() else {
            return Err(StoreError::EntitiesExhausted {
                max_entities: self.capacity(),
            });
        };

        let idx = index as usize;
        self.alive[idx] = true;
        self.alive_count += 1;
        self.watermark = self.watermark.max(idx + 1);

        Ok(EntityId::new(index, self.generations[idx]))
    }

    /// Frees a live slot, bumping its generation.
    ///
    /// Every outstanding handle to the slot becomes stale.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StaleEntity`] if `id` is not live.
    pub fn free(&mut self, id: EntityId) -> StoreResult<()> {
        if !self.is_valid(id) {
            return Err(StoreError::StaleEntity(id));
        }

        let idx = id.index() as usize;
        self.generations[idx] = self.generations[idx].wrapping_add(1);
        self.alive[idx] = false;
        self.alive_count -= 1;
        self.free.push(id.index())
    }

    /// Checks that `id` is in range, its slot is live, and its generation
    /// matches the slot's.
    #[inline]
    #[must_use]
    pub fn is_valid(&self, id: EntityId) -> bool {
        let idx = id.index() as usize;
        idx < self.capacity() && self.alive[idx] && self.generations[idx] == id.generation()
    }

    /// Returns the handle currently occupying a slot, if the slot is live.
    #[inline]
    #[must_use]
    pub fn handle_at(&self, index: u32) -> Option<EntityId> {
        let idx = index as usize;
        (idx < self.capacity() && self.alive[idx]).then(|| EntityId::new(index, self.generations[idx]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_roundtrip() {
        let id = EntityId::new(12345, 67890);
        assert_eq!(id.index(), 12345);
        assert_eq!(id.generation(), 67890);
        assert_eq!(EntityId::from_bits(id.to_bits()), id);
    }

    #[test]
    fn test_generation_in_high_bits() {
        assert_eq!(EntityId::new(1, 2).to_bits(), (2u64 << 32) | 1);
        assert!(EntityId::default().is_null());
    }

    #[test]
    fn test_allocate_keeps_generation() {
        let mut table = EntityTable::new(2);
        let id = table.allocate().unwrap();
        assert_eq!(id, EntityId::new(0, 0));
        assert!(table.is_valid(id));
        assert_eq!(table.watermark(), 1);
    }

    #[test]
    fn test_free_bumps_generation() {
        let mut table = EntityTable::new(2);
        let id = table.allocate().unwrap();
        table.free(id).unwrap();

        assert!(!table.is_valid(id));
        assert_eq!(table.generation(0), Some(1));
        assert_eq!(table.free(id), Err(StoreError::StaleEntity(id)));

        let reused = table.allocate().unwrap();
        assert_eq!(reused, EntityId::new(0, 1));
    }

    #[test]
    fn test_watermark_never_shrinks() {
        let mut table = EntityTable::new(4);
        let ids: Vec<_> = (0..3).map(|_| table.allocate().unwrap()).collect();
        table.free(ids[2]).unwrap();
        assert_eq!(table.watermark(), 3);
        assert_eq!(table.alive_count(), 2);
    }

    #[test]
    fn test_out_of_range_is_invalid() {
        let table = EntityTable::new(2);
        assert!(!table.is_valid(EntityId::new(2, 0)));
        assert!(!table.is_valid(EntityId::NULL));
        assert!(table.handle_at(5).is_none());
    }

    #[test]
    fn test_never_issued_slot_is_invalid() {
        let table = EntityTable::new(2);
        assert!(!table.is_valid(EntityId::new(1, 0)));
    }

    #[test]
    fn test_exhaustion() {
        let mut table = EntityTable::new(1);
        table.allocate().unwrap();
        assert_eq!(
            table.allocate(),
            Err(StoreError::EntitiesExhausted { max_entities: 1 })
        );
        assert_eq!(table.alive_count(), 1);
    }
}
