//! # Single-Type View
//!
//! Forward-only cursor over the live entities holding one component type.

use super::component::ComponentType;
use super::entity::EntityId;
use super::store::EntityStore;

/// Lazy cursor over every entity holding `component`, in ascending slot
/// order.
///
/// The scan is bounded by the store's watermark. A view cannot be rewound;
/// build a new one with [`View::single`] (or [`EntityStore::view`]) to walk
/// again. The view borrows the store, so the store cannot be structurally
/// mutated while a walk is in progress.
///
/// # Example
///
/// ```rust,ignore
/// let mut view = store.view(POSITION);
/// while view.is_valid() {
///     let entity = view.entity();
///     view.advance();
/// }
///
/// // Or as an iterator
/// let holders: Vec<EntityId> = store.view(POSITION).collect();
/// ```
#[derive(Debug, Clone)]
pub struct View<'a> {
    store: &'a EntityStore,
    component: ComponentType,
    /// Current slot; equals the scan bound once exhausted.
    cursor: usize,
    /// Scan bound captured when the view was built.
    end: usize,
}

impl<'a> View<'a> {
    /// Positions a new view on the first holder of `component`.
    #[must_use]
    pub fn single(store: &'a EntityStore, component: ComponentType) -> Self {
        let mut view = Self {
            store,
            component,
            cursor: 0,
            end: store.watermark(),
        };
        view.seek(0);
        view
    }

    /// Returns the component type being walked.
    #[inline]
    #[must_use]
    pub const fn component(&self) -> ComponentType {
        self.component
    }

    /// Returns `true` while the cursor rests on a holder.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.cursor < self.end
    }

    /// Returns the entity under the cursor, or [`EntityId::NULL`] once the
    /// view is exhausted.
    #[must_use]
    pub fn entity(&self) -> EntityId {
        if !self.is_valid() {
            return EntityId::NULL;
        }
        self.store.handle_at(self.slot()).unwrap_or(EntityId::NULL)
    }

    /// Moves to the next holder after the cursor.
    pub fn advance(&mut self) {
        if self.is_valid() {
            self.seek(self.cursor + 1);
        }
    }

    // Slots are below the store capacity, which is below u32::MAX.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn slot(&self) -> u32 {
        self.cursor as u32
    }

    fn seek(&mut self, from: usize) {
        self.cursor = from;
        while self.cursor < self.end {
            if self.store.holds_slot(self.slot(), self.component) {
                return;
            }
            self.cursor += 1;
        }
    }
}

impl Iterator for View<'_> {
    type Item = EntityId;

    fn next(&mut self) -> Option<EntityId> {
        if !self.is_valid() {
            return None;
        }
        let entity = self.entity();
        self.advance();
        Some(entity)
    }
}

impl std::iter::FusedIterator for View<'_> {}
