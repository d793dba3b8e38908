//! # Shared Store
//!
//! An [`EntityStore`] behind one external lock, for hosts that drive a
//! store from more than one thread.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::ecs::EntityStore;

/// Cloneable handle to a store guarded by a single mutex.
///
/// Every operation on the store happens under the lock, so a lock spans the
/// whole of each operation (and of any [`View`](crate::View) walk made
/// through the guard). The store itself stays single-threaded.
///
/// ## Usage
///
/// ```rust,ignore
/// let shared = SharedStore::new(EntityStore::new(1024, 8, 4));
///
/// let worker = shared.clone();
/// std::thread::spawn(move || {
///     worker.with(|store| store.make().map(|_| ()))
/// });
///
/// let alive = shared.lock().alive_count();
/// ```
#[derive(Clone, Debug)]
pub struct SharedStore {
    inner: Arc<Mutex<EntityStore>>,
}

impl SharedStore {
    /// Wraps a store.
    #[must_use]
    pub fn new(store: EntityStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Locks the store until the guard is dropped.
    pub fn lock(&self) -> MutexGuard<'_, EntityStore> {
        self.inner.lock()
    }

    /// Runs `f` with the store locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut EntityStore) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Unwraps the store if this is the last handle.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged if other handles are still alive.
    pub fn into_inner(self) -> Result<EntityStore, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_make_under_lock() {
        let shared = SharedStore::new(EntityStore::new(64, 1, 1));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let worker = shared.clone();
                thread::spawn(move || {
                    for _ in 0..8 {
                        worker.with(|store| store.make()).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let store = shared.into_inner().unwrap();
        assert_eq!(store.alive_count(), 32);
        assert_eq!(store.watermark(), 32);
    }

    #[test]
    fn test_into_inner_with_clones() {
        let shared = SharedStore::new(EntityStore::new(1, 1, 1));
        let other = shared.clone();
        let shared = shared.into_inner().unwrap_err();
        drop(other);
        assert!(shared.into_inner().is_ok());
    }
}
