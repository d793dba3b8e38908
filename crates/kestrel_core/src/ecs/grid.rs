//! # Existence Grid
//!
//! Dense `max_entities × component_count` relation recording which
//! (entity, component type) pairs are populated and where each lives in its
//! pool.

use super::component::ComponentType;

/// Mask grid plus pool-slot grid, both row-major by entity slot.
#[derive(Debug, Clone)]
pub struct ExistenceGrid {
    /// `true` where the entity holds the component.
    mask: Box<[bool]>,
    /// Pool slot index for every set mask cell.
    slots: Box<[u32]>,
    /// Row width.
    component_count: usize,
}

impl ExistenceGrid {
    /// Creates an empty grid.
    #[must_use]
    pub fn new(max_entities: usize, component_count: usize) -> Self {
        let cells = max_entities * component_count;
        Self {
            mask: vec![false; cells].into_boxed_slice(),
            slots: vec![0u32; cells].into_boxed_slice(),
            component_count,
        }
    }

    #[inline]
    fn cell(&self, entity: u32, component: ComponentType) -> usize {
        entity as usize * self.component_count + usize::from(component)
    }

    /// Returns `true` if the pair is populated. Out-of-range pairs are not.
    #[inline]
    #[must_use]
    pub fn contains(&self, entity: u32, component: ComponentType) -> bool {
        if usize::from(component) >= self.component_count {
            return false;
        }
        self.mask
            .get(self.cell(entity, component))
            .copied()
            .unwrap_or(false)
    }

    /// Returns the pool slot recorded for a populated pair.
    #[inline]
    #[must_use]
    pub fn slot(&self, entity: u32, component: ComponentType) -> Option<u32> {
        self.contains(entity, component)
            .then(|| self.slots[self.cell(entity, component)])
    }

    /// Marks the pair populated at `slot`.
    ///
    /// The pair must be in range.
    #[inline]
    pub fn insert(&mut self, entity: u32, component: ComponentType, slot: u32) {
        let cell = self.cell(entity, component);
        self.mask[cell] = true;
        self.slots[cell] = slot;
    }

    /// Clears the pair, returning the slot it held.
    #[inline]
    pub fn remove(&mut self, entity: u32, component: ComponentType) -> Option<u32> {
        let slot = self.slot(entity, component)?;
        let cell = self.cell(entity, component);
        self.mask[cell] = false;
        Some(slot)
    }

    /// Clears every cell of one entity row.
    pub fn clear_row(&mut self, entity: u32) {
        let start = entity as usize * self.component_count;
        if let Some(row) = self.mask.get_mut(start..start + self.component_count) {
            row.fill(false);
        }
    }

    /// Returns the populated `(component, slot)` pairs of one entity row.
    pub fn row(&self, entity: u32) -> impl Iterator<Item = (ComponentType, u32)> + '_ {
        let start = entity as usize * self.component_count;
        let end = (start + self.component_count).min(self.mask.len());
        let start = start.min(end);
        (start..end).filter(move |&cell| self.mask[cell]).map(move |cell| {
            // component_count <= 256 keeps the column in range
            #[allow(clippy::cast_possible_truncation)]
            let component = (cell - start) as ComponentType;
            (component, self.slots[cell])
        })
    }
}
