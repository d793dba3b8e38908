//! # Entity Store
//!
//! The central container: entity table, existence grid, one pool per
//! registered component type, and the system list.
//! Pre-allocates all memory at creation time.

use super::component::{Component, ComponentType};
use super::entity::{EntityId, EntityTable};
use super::grid::ExistenceGrid;
use super::system::{Phase, SystemFn, SystemList};
use super::view::View;
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::memory::{ComponentPool, DestroyFn};

/// The entity store - container for all entities and their components.
///
/// All memory except component pools is allocated at creation; each pool is
/// allocated once, when its type is registered. No allocations occur during
/// create, destroy, add, remove or lookup.
///
/// # Capacity
///
/// The store has fixed capacities set at creation. They cannot be changed
/// at runtime.
///
/// # Failure policy
///
/// Misuse never panics. It is logged with `tracing::warn!` and surfaces as
/// an `Err`, an `Ok(false)` no-op, or a `None` lookup, leaving the store
/// untouched.
///
/// # Example
///
/// ```rust,ignore
/// let mut store = EntityStore::new(1024, 8, 4);
/// store.register_component(0, 256, 8, None)?;
///
/// let entity = store.make()?;
/// store.add_component(entity, 0, Some(&7u64.to_le_bytes()))?;
/// assert!(store.has_component(entity, 0));
/// ```
#[derive(Debug)]
pub struct EntityStore {
    /// Generations, free slots and watermark.
    entities: EntityTable,
    /// Which (entity, type) pairs exist and where.
    grid: ExistenceGrid,
    /// One optional pool per component type id.
    pools: Box<[Option<ComponentPool>]>,
    /// Registered systems.
    systems: SystemList,
}

impl EntityStore {
    /// Creates a new store with the given capacities.
    ///
    /// # Arguments
    ///
    /// * `max_entities` - Maximum simultaneously live entities
    /// * `component_count` - Number of component type ids (at most 256)
    /// * `system_count` - Maximum registered systems
    ///
    /// # Panics
    ///
    /// Panics if any capacity is zero or out of range. Use
    /// [`EntityStore::from_config`] to get an error instead.
    #[must_use]
    pub fn new(max_entities: usize, component_count: usize, system_count: usize) -> Self {
        let config = StoreConfig::new(max_entities, component_count, system_count);
        match Self::from_config(&config) {
            Ok(store) => store,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a new store from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidCapacity`] if the configuration does not
    /// validate.
    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        config.validate()?;

        let pools: Vec<Option<ComponentPool>> =
            (0..config.component_count).map(|_| None).collect();

        tracing::debug!(
            max_entities = config.max_entities,
            component_count = config.component_count,
            system_count = config.system_count,
            "entity store created"
        );

        Ok(Self {
            entities: EntityTable::new(config.max_entities),
            grid: ExistenceGrid::new(config.max_entities, config.component_count),
            pools: pools.into_boxed_slice(),
            systems: SystemList::new(config.system_count),
        })
    }

    /// Returns the entity capacity.
    #[inline]
    #[must_use]
    pub fn max_entities(&self) -> usize {
        self.entities.capacity()
    }

    /// Returns the number of component type ids.
    #[inline]
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.pools.len()
    }

    /// Returns the system capacity.
    #[inline]
    #[must_use]
    pub const fn system_count(&self) -> usize {
        self.systems.capacity()
    }

    /// Returns the number of registered systems.
    #[inline]
    #[must_use]
    pub fn registered_systems(&self) -> usize {
        self.systems.len()
    }

    /// Returns the number of live entities.
    #[inline]
    #[must_use]
    pub const fn alive_count(&self) -> usize {
        self.entities.alive_count()
    }

    /// Returns one past the highest entity slot ever issued.
    ///
    /// Bounds every scan. Never shrinks, even after high slots are destroyed.
    #[inline]
    #[must_use]
    pub const fn watermark(&self) -> usize {
        self.entities.watermark()
    }

    /// Returns `true` if `component` has a pool.
    #[must_use]
    pub fn is_registered(&self, component: ComponentType) -> bool {
        self.pool(component).is_some()
    }

    /// Returns the pool backing `component`, if registered.
    #[must_use]
    pub fn pool(&self, component: ComponentType) -> Option<&ComponentPool> {
        self.pools.get(usize::from(component))?.as_ref()
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Registers a component type with a pool of `count` slots of `size`
    /// bytes, and an optional destructor run on every released slot.
    ///
    /// # Errors
    ///
    /// Leaves any existing pool untouched and returns:
    /// - [`StoreError::ComponentOutOfRange`] if `component` is not below the
    ///   component count.
    /// - [`StoreError::AlreadyRegistered`] if the type already has a pool.
    /// - [`StoreError::InvalidPoolLayout`] if `count * size` is zero.
    pub fn register_component(
        &mut self,
        component: ComponentType,
        count: usize,
        size: usize,
        destroy: Option<DestroyFn>,
    ) -> StoreResult<()> {
        self.check_component(component)?;

        let entry = &mut self.pools[usize::from(component)];
        if entry.is_some() {
            tracing::warn!(component, "component type registered twice; ignored");
            return Err(StoreError::AlreadyRegistered(component));
        }

        let pool = ComponentPool::new(component, count, size, destroy).map_err(|err| {
            tracing::warn!(component, count, size, "invalid component pool layout; ignored");
            err
        })?;
        *entry = Some(pool);

        tracing::debug!(component, count, size, "component type registered");
        Ok(())
    }

    /// Registers `T` under [`Component::TYPE`] with `count` slots.
    ///
    /// # Errors
    ///
    /// See [`EntityStore::register_component`].
    pub fn register<T: Component>(
        &mut self,
        count: usize,
        destroy: Option<DestroyFn>,
    ) -> StoreResult<()> {
        self.register_component(T::TYPE, count, T::SIZE, destroy)
    }

    // =========================================================================
    // Entities
    // =========================================================================

    /// Creates an entity, returning its handle.
    ///
    /// The handle carries the slot's current generation; generations change
    /// only on destroy.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EntitiesExhausted`] if `max_entities` entities
    /// are already live. No other entity is affected.
    pub fn make(&mut self) -> StoreResult<EntityId> {
        let id = self.entities.allocate().map_err(|err| {
            tracing::warn!(
                max_entities = self.entities.capacity(),
                "entity capacity exhausted"
            );
            err
        })?;
        tracing::trace!(entity = ?id, "entity created");
        Ok(id)
    }

    /// Destroys an entity.
    ///
    /// Every component it still holds is removed (running destructors), the
    /// slot's generation is bumped so all outstanding handles go stale, and
    /// the slot is returned for reuse.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StaleEntity`] if `id` is not a live handle.
    pub fn destroy(&mut self, id: EntityId) -> StoreResult<()> {
        let index = self.check_entity(id)?;

        for (component, slot) in self.grid.row(index) {
            if let Some(pool) = self.pools[usize::from(component)].as_mut() {
                if let Err(err) = pool.release(slot) {
                    tracing::warn!(entity = ?id, component, %err, "failed to release component");
                }
            }
        }
        self.grid.clear_row(index);
        self.entities.free(id)?;

        tracing::trace!(entity = ?id, "entity destroyed");
        Ok(())
    }

    /// Checks that `id` refers to a live entity of the current generation.
    ///
    /// Out-of-range handles are invalid.
    #[inline]
    #[must_use]
    pub fn is_valid(&self, id: EntityId) -> bool {
        self.entities.is_valid(id)
    }

    /// Iterates over all live entities in ascending slot order.
    pub fn iter_alive(&self) -> impl Iterator<Item = EntityId> + '_ {
        (0..self.watermark()).filter_map(|idx| {
            // watermark <= max_entities < u32::MAX
            #[allow(clippy::cast_possible_truncation)]
            let slot = idx as u32;
            self.entities.handle_at(slot)
        })
    }

    // =========================================================================
    // Components
    // =========================================================================

    /// Attaches a component of type `component` to `id`.
    ///
    /// With `Some(data)` the slot receives a bytewise copy of `data`, which
    /// must be exactly one slot long; with `None` it is zero-filled.
    ///
    /// Returns `Ok(false)` without touching anything if the entity already
    /// holds this type. Existing data is never overwritten; remove first to
    /// replace.
    ///
    /// # Errors
    ///
    /// - [`StoreError::StaleEntity`] for a dead or out-of-range handle.
    /// - [`StoreError::ComponentOutOfRange`] / [`StoreError::ComponentNotRegistered`].
    /// - [`StoreError::SizeMismatch`] if `data` has the wrong length.
    /// - [`StoreError::PoolExhausted`] if the type's pool is full.
    pub fn add_component(
        &mut self,
        id: EntityId,
        component: ComponentType,
        data: Option<&[u8]>,
    ) -> StoreResult<bool> {
        let index = self.check_entity(id)?;
        self.check_component(component)?;

        if self.grid.contains(index, component) {
            tracing::warn!(entity = ?id, component, "component already present; add ignored");
            return Ok(false);
        }

        let slot = self.pool_mut(component)?.allocate(data)?;
        self.grid.insert(index, component, slot);
        Ok(true)
    }

    /// Attaches a typed component.
    ///
    /// # Errors
    ///
    /// See [`EntityStore::add_component`].
    pub fn add<T: Component>(&mut self, id: EntityId, value: &T) -> StoreResult<bool> {
        self.add_component(id, T::TYPE, Some(bytemuck::bytes_of(value)))
    }

    /// Detaches a component, running the type's destructor on its contents.
    ///
    /// Returns `Ok(false)` without touching anything if the entity does not
    /// hold this type.
    ///
    /// # Errors
    ///
    /// - [`StoreError::StaleEntity`] for a dead or out-of-range handle.
    /// - [`StoreError::ComponentOutOfRange`] / [`StoreError::ComponentNotRegistered`].
    pub fn remove_component(&mut self, id: EntityId, component: ComponentType) -> StoreResult<bool> {
        let index = self.check_entity(id)?;
        self.check_component(component)?;

        let Some(slot) = self.grid.slot(index, component) else {
            tracing::warn!(entity = ?id, component, "component absent; remove ignored");
            return Ok(false);
        };

        self.pool_mut(component)?.release(slot)?;
        self.grid.remove(index, component);
        Ok(true)
    }

    /// Detaches a typed component.
    ///
    /// # Errors
    ///
    /// See [`EntityStore::remove_component`].
    pub fn remove<T: Component>(&mut self, id: EntityId) -> StoreResult<bool> {
        self.remove_component(id, T::TYPE)
    }

    /// Returns the bytes of a component.
    ///
    /// The slice stays valid until the next mutation of the store, which
    /// the borrow enforces.
    #[must_use]
    pub fn get_component(&self, id: EntityId, component: ComponentType) -> Option<&[u8]> {
        let slot = self.lookup(id, component)?;
        self.pool(component)?.slot(slot)
    }

    /// Returns the bytes of a component mutably.
    pub fn get_component_mut(
        &mut self,
        id: EntityId,
        component: ComponentType,
    ) -> Option<&mut [u8]> {
        let slot = self.lookup(id, component)?;
        self.pools.get_mut(usize::from(component))?.as_mut()?.slot_mut(slot)
    }

    /// Returns a copy of a typed component.
    ///
    /// `None` if absent, or if the type was registered with a slot size
    /// other than `size_of::<T>()`.
    #[must_use]
    pub fn get<T: Component>(&self, id: EntityId) -> Option<T> {
        let bytes = self.get_component(id, T::TYPE)?;
        bytemuck::try_pod_read_unaligned(bytes).ok()
    }

    /// Overwrites an existing typed component.
    ///
    /// Returns `Ok(false)` if the entity does not hold `T`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SizeMismatch`] if `T`'s pool has a different
    /// slot size.
    pub fn set<T: Component>(&mut self, id: EntityId, value: &T) -> StoreResult<bool> {
        let Some(bytes) = self.get_component_mut(id, T::TYPE) else {
            return Ok(false);
        };
        if bytes.len() != T::SIZE {
            return Err(StoreError::SizeMismatch {
                expected: bytes.len(),
                actual: T::SIZE,
            });
        }
        bytes.copy_from_slice(bytemuck::bytes_of(value));
        Ok(true)
    }

    /// Applies `f` to a typed component in place.
    ///
    /// Returns `Ok(false)` if the entity does not hold `T`.
    ///
    /// # Errors
    ///
    /// See [`EntityStore::set`].
    pub fn update<T, F>(&mut self, id: EntityId, f: F) -> StoreResult<bool>
    where
        T: Component,
        F: FnOnce(&mut T),
    {
        let Some(mut value) = self.get::<T>(id) else {
            return Ok(false);
        };
        f(&mut value);
        self.set(id, &value)
    }

    /// Returns `true` if `id` is live and holds `component`.
    #[inline]
    #[must_use]
    pub fn has_component(&self, id: EntityId, component: ComponentType) -> bool {
        self.is_valid(id) && self.grid.contains(id.index(), component)
    }

    /// Returns `true` if `id` is live and holds `T`.
    #[inline]
    #[must_use]
    pub fn has<T: Component>(&self, id: EntityId) -> bool {
        self.has_component(id, T::TYPE)
    }

    /// Returns `true` if `id` is live and holds every type in `components`.
    ///
    /// An empty list holds for any live entity.
    #[must_use]
    pub fn has_mask(&self, id: EntityId, components: &[ComponentType]) -> bool {
        self.is_valid(id)
            && components
                .iter()
                .all(|&component| self.grid.contains(id.index(), component))
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Starts a walk over every entity holding `component`.
    #[must_use]
    pub fn view(&self, component: ComponentType) -> View<'_> {
        View::single(self, component)
    }

    /// Starts a walk over every entity holding `T`.
    #[must_use]
    pub fn view_of<T: Component>(&self) -> View<'_> {
        View::single(self, T::TYPE)
    }

    // =========================================================================
    // Systems
    // =========================================================================

    /// Appends a system to the dispatch list, returning its position.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SystemCapacity`] once `system_count` systems are
    /// registered.
    pub fn register_system(&mut self, system: SystemFn, phase: Phase) -> StoreResult<usize> {
        self.systems.push(system, phase).map_err(|err| {
            tracing::warn!(phase = phase.0, %err, "system registration rejected");
            err
        })
    }

    /// Runs every system tagged `phase`, in registration order.
    ///
    /// Systems registered by a running system are dispatched in the same
    /// pass if their phase matches.
    pub fn run_systems(&mut self, phase: Phase) {
        let mut index = 0;
        while let Some((system, tag)) = self.systems.get(index) {
            if tag == phase {
                system(self);
            }
            index += 1;
        }
    }

    /// Runs the system at position `index`, whatever its phase.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SystemOutOfRange`] if no system is registered
    /// there.
    pub fn run_system(&mut self, index: usize) -> StoreResult<()> {
        let Some((system, _)) = self.systems.get(index) else {
            tracing::warn!(index, registered = self.systems.len(), "no system at position");
            return Err(StoreError::SystemOutOfRange {
                index,
                registered: self.systems.len(),
            });
        };
        system(self);
        Ok(())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Live handle in `slot`, for views.
    pub(crate) fn handle_at(&self, slot: u32) -> Option<EntityId> {
        self.entities.handle_at(slot)
    }

    /// Grid read by slot, for views.
    pub(crate) fn holds_slot(&self, slot: u32, component: ComponentType) -> bool {
        self.grid.contains(slot, component)
    }

    fn check_entity(&self, id: EntityId) -> StoreResult<u32> {
        if self.entities.is_valid(id) {
            Ok(id.index())
        } else {
            tracing::warn!(entity = ?id, "stale or out-of-range entity handle");
            Err(StoreError::StaleEntity(id))
        }
    }

    fn check_component(&self, component: ComponentType) -> StoreResult<()> {
        if usize::from(component) < self.pools.len() {
            Ok(())
        } else {
            tracing::warn!(component, component_count = self.pools.len(), "component type out of range");
            Err(StoreError::ComponentOutOfRange {
                component,
                component_count: self.pools.len(),
            })
        }
    }

    fn pool_mut(&mut self, component: ComponentType) -> StoreResult<&mut ComponentPool> {
        match self.pools.get_mut(usize::from(component)) {
            Some(Some(pool)) => Ok(pool),
            _ => {
                tracing::warn!(component, "component type not registered");
                Err(StoreError::ComponentNotRegistered(component))
            }
        }
    }

    fn lookup(&self, id: EntityId, component: ComponentType) -> Option<u32> {
        if !self.is_valid(id) {
            tracing::warn!(entity = ?id, "stale or out-of-range entity handle");
            return None;
        }
        let slot = self.grid.slot(id.index(), component);
        if slot.is_none() {
            tracing::warn!(entity = ?id, component, "component absent");
        }
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::{Pod, Zeroable};

    #[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
    #[repr(C)]
    struct Position {
        x: f32,
        y: f32,
    }

    impl Component for Position {
        const TYPE: ComponentType = 0;
    }

    #[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
    #[repr(C)]
    struct Ticks(u32);

    impl Component for Ticks {
        const TYPE: ComponentType = 1;
    }

    fn store() -> EntityStore {
        let mut store = EntityStore::new(8, 3, 4);
        store.register::<Position>(8, None).unwrap();
        store.register::<Ticks>(8, None).unwrap();
        store
    }

    #[test]
    fn test_store_creation() {
        let store = EntityStore::new(100, 4, 2);
        assert_eq!(store.max_entities(), 100);
        assert_eq!(store.component_count(), 4);
        assert_eq!(store.system_count(), 2);
        assert_eq!(store.alive_count(), 0);
        assert_eq!(store.watermark(), 0);
    }

    #[test]
    #[should_panic(expected = "max_entities")]
    fn test_zero_capacity_panics() {
        let _ = EntityStore::new(0, 1, 1);
    }

    #[test]
    fn test_make_destroy() {
        let mut store = store();

        let id1 = store.make().unwrap();
        assert!(store.is_valid(id1));
        let id2 = store.make().unwrap();
        assert_eq!(store.alive_count(), 2);

        store.destroy(id1).unwrap();
        assert!(!store.is_valid(id1));
        assert!(store.is_valid(id2));
        assert_eq!(store.destroy(id1), Err(StoreError::StaleEntity(id1)));

        // Slot reused with a newer generation
        let id3 = store.make().unwrap();
        assert_eq!(id3.index(), id1.index());
        assert_eq!(id3.generation(), id1.generation() + 1);
    }

    #[test]
    fn test_register_twice_keeps_pool() {
        let mut store = store();
        assert_eq!(
            store.register_component(0, 2, 1, None),
            Err(StoreError::AlreadyRegistered(0))
        );
        assert_eq!(store.pool(0).unwrap().capacity(), 8);
        assert_eq!(
            store.register_component(2, 0, 4, None),
            Err(StoreError::InvalidPoolLayout { count: 0, size: 4 })
        );
        assert!(!store.is_registered(2));
        assert!(matches!(
            store.register_component(3, 1, 1, None),
            Err(StoreError::ComponentOutOfRange { .. })
        ));
    }

    #[test]
    fn test_typed_roundtrip() {
        let mut store = store();
        let id = store.make().unwrap();

        assert_eq!(store.add(id, &Position { x: 1.0, y: 2.0 }), Ok(true));
        assert_eq!(store.get::<Position>(id), Some(Position { x: 1.0, y: 2.0 }));
        assert!(store.has::<Position>(id));
        assert!(!store.has::<Ticks>(id));

        assert_eq!(store.set(id, &Position { x: 3.0, y: 4.0 }), Ok(true));
        let pos = store.get::<Position>(id).unwrap();
        assert!((pos.x - 3.0).abs() < f32::EPSILON);
        assert!((pos.y - 4.0).abs() < f32::EPSILON);

        assert_eq!(store.remove::<Position>(id), Ok(true));
        assert_eq!(store.get::<Position>(id), None);
        assert_eq!(store.set(id, &Position { x: 0.0, y: 0.0 }), Ok(false));
    }

    #[test]
    fn test_update_in_place() {
        let mut store = store();
        let id = store.make().unwrap();
        store.add(id, &Ticks(1)).unwrap();

        assert_eq!(store.update::<Ticks, _>(id, |t| t.0 += 41), Ok(true));
        assert_eq!(store.get::<Ticks>(id).map(|t| t.0), Some(42));
    }

    #[test]
    fn test_add_without_data_zero_fills() {
        let mut store = store();
        let id = store.make().unwrap();
        store.add_component(id, 1, None).unwrap();
        assert_eq!(store.get_component(id, 1), Some(&[0u8; 4][..]));
    }

    #[test]
    fn test_add_rejects_unregistered_and_wrong_size() {
        let mut store = store();
        let id = store.make().unwrap();
        assert_eq!(
            store.add_component(id, 2, None),
            Err(StoreError::ComponentNotRegistered(2))
        );
        assert_eq!(
            store.add_component(id, 1, Some(&[1, 2])),
            Err(StoreError::SizeMismatch { expected: 4, actual: 2 })
        );
        assert!(!store.has_component(id, 1));
    }

    #[test]
    fn test_stale_handle_operations() {
        let mut store = store();
        let id = store.make().unwrap();
        store.add(id, &Ticks(5)).unwrap();
        store.destroy(id).unwrap();

        assert_eq!(store.add(id, &Ticks(1)), Err(StoreError::StaleEntity(id)));
        assert_eq!(store.remove::<Ticks>(id), Err(StoreError::StaleEntity(id)));
        assert!(store.get_component(id, 1).is_none());
        assert!(!store.has_component(id, 1));
        assert!(!store.has_mask(id, &[]));
    }

    #[test]
    fn test_has_mask() {
        let mut store = store();
        let id = store.make().unwrap();
        store.add(id, &Position { x: 0.0, y: 0.0 }).unwrap();
        store.add(id, &Ticks(0)).unwrap();

        assert!(store.has_mask(id, &[0, 1]));
        assert!(!store.has_mask(id, &[0, 1, 2]));
        assert!(store.has_mask(id, &[]));
    }

    #[test]
    fn test_destroy_releases_pool_slots() {
        let mut store = store();
        let id = store.make().unwrap();
        store.add(id, &Position { x: 0.0, y: 0.0 }).unwrap();
        store.add(id, &Ticks(0)).unwrap();
        assert_eq!(store.pool(0).unwrap().allocated_count(), 1);

        store.destroy(id).unwrap();
        assert_eq!(store.pool(0).unwrap().allocated_count(), 0);
        assert_eq!(store.pool(1).unwrap().allocated_count(), 0);
    }

    #[test]
    fn test_iter_alive() {
        let mut store = store();
        let ids: Vec<_> = (0..4).map(|_| store.make().unwrap()).collect();
        store.destroy(ids[1]).unwrap();

        let alive: Vec<_> = store.iter_alive().collect();
        assert_eq!(alive, vec![ids[0], ids[2], ids[3]]);
    }

    #[test]
    fn test_view_cursor() {
        let mut store = store();
        let ids: Vec<_> = (0..5).map(|_| store.make().unwrap()).collect();
        store.add(ids[1], &Ticks(0)).unwrap();
        store.add(ids[4], &Ticks(0)).unwrap();

        let mut view = store.view(Ticks::TYPE);
        assert!(view.is_valid());
        assert_eq!(view.entity(), ids[1]);
        view.advance();
        assert_eq!(view.entity(), ids[4]);
        view.advance();
        assert!(!view.is_valid());
        assert!(view.entity().is_null());

        assert_eq!(store.view(Position::TYPE).count(), 0);
        assert_eq!(store.view(200).count(), 0);
    }

    fn bump_ticks(store: &mut EntityStore) {
        let holders: Vec<EntityId> = store.view_of::<Ticks>().collect();
        for id in holders {
            store.update::<Ticks, _>(id, |t| t.0 += 1).unwrap();
        }
    }

    fn reset_ticks(store: &mut EntityStore) {
        let holders: Vec<EntityId> = store.view_of::<Ticks>().collect();
        for id in holders {
            store.set(id, &Ticks(0)).unwrap();
        }
    }

    #[test]
    fn test_run_systems_by_phase() {
        let mut store = store();
        let id = store.make().unwrap();
        store.add(id, &Ticks(0)).unwrap();

        store.register_system(bump_ticks, Phase(0)).unwrap();
        store.register_system(reset_ticks, Phase(1)).unwrap();
        store.register_system(bump_ticks, Phase(0)).unwrap();

        store.run_systems(Phase(0));
        assert_eq!(store.get::<Ticks>(id), Some(Ticks(2)));

        store.run_system(1).unwrap();
        assert_eq!(store.get::<Ticks>(id), Some(Ticks(0)));

        store.run_systems(Phase(7));
        assert_eq!(store.get::<Ticks>(id), Some(Ticks(0)));
    }

    #[test]
    fn test_system_bounds() {
        let mut store = EntityStore::new(1, 1, 1);
        assert_eq!(store.register_system(bump_ticks, Phase(0)), Ok(0));
        assert_eq!(
            store.register_system(bump_ticks, Phase(0)),
            Err(StoreError::SystemCapacity(1))
        );
        assert_eq!(store.registered_systems(), 1);
        assert_eq!(
            store.run_system(3),
            Err(StoreError::SystemOutOfRange { index: 3, registered: 1 })
        );
    }
}
