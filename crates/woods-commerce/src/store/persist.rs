//! Write-through persistence for the store.
//!
//! The store calls [`StatePersister::save`] after every mutation and
//! [`StatePersister::load`] once when restoring. Tests inject
//! [`MemoryPersister`] or [`NoopPersister`] instead of real storage.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::CommerceError;
use crate::store::StoreState;

/// Fixed identifier of the persisted snapshot.
pub const STORAGE_KEY: &str = "artisan-woods-storage";

/// Durable home for the store snapshot.
pub trait StatePersister {
    /// Read the last saved snapshot, if one exists.
    fn load(&self) -> Result<Option<StoreState>, CommerceError>;

    /// Overwrite the saved snapshot.
    fn save(&self, state: &StoreState) -> Result<(), CommerceError>;
}

/// Persister that keeps nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPersister;

impl StatePersister for NoopPersister {
    fn load(&self) -> Result<Option<StoreState>, CommerceError> {
        Ok(None)
    }

    fn save(&self, _state: &StoreState) -> Result<(), CommerceError> {
        Ok(())
    }
}

/// In-memory persister.
///
/// Clones share the same slot, so a test can hand one clone to the store and
/// inspect what was written through the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersister {
    inner: Arc<MemorySlot>,
}

#[derive(Debug, Default)]
struct MemorySlot {
    snapshot: Mutex<Option<StoreState>>,
    saves: AtomicUsize,
}

impl MemoryPersister {
    /// Create an empty persister.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a persister that already holds a snapshot.
    pub fn with_snapshot(state: StoreState) -> Self {
        let persister = Self::new();
        if let Ok(mut slot) = persister.inner.snapshot.lock() {
            *slot = Some(state);
        }
        persister
    }

    /// The last snapshot written.
    pub fn snapshot(&self) -> Option<StoreState> {
        self.inner.snapshot.lock().ok().and_then(|slot| slot.clone())
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.inner.saves.load(Ordering::SeqCst)
    }
}

impl StatePersister for MemoryPersister {
    fn load(&self) -> Result<Option<StoreState>, CommerceError> {
        Ok(self.snapshot())
    }

    fn save(&self, state: &StoreState) -> Result<(), CommerceError> {
        let mut slot = self
            .inner
            .snapshot
            .lock()
            .map_err(|_| CommerceError::CacheError("memory snapshot lock poisoned".to_string()))?;
        *slot = Some(state.clone());
        self.inner.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Adapts a save callback into a persister. Nothing is ever loaded.
///
/// ```
/// use woods_commerce::store::{SaveHook, Store};
///
/// let mut store = Store::new(SaveHook::new(|state| {
///     println!("{} cart lines", state.cart.len());
///     Ok(())
/// }));
/// store.clear_cart();
/// ```
pub struct SaveHook<F> {
    hook: F,
}

impl<F> SaveHook<F>
where
    F: Fn(&StoreState) -> Result<(), CommerceError>,
{
    /// Wrap a callback.
    pub fn new(hook: F) -> Self {
        Self { hook }
    }
}

impl<F> StatePersister for SaveHook<F>
where
    F: Fn(&StoreState) -> Result<(), CommerceError>,
{
    fn load(&self) -> Result<Option<StoreState>, CommerceError> {
        Ok(None)
    }

    fn save(&self, state: &StoreState) -> Result<(), CommerceError> {
        (self.hook)(state)
    }
}

/// Persister backed by a [`woods_cache::Cache`], keyed by [`STORAGE_KEY`].
#[cfg(feature = "storage")]
#[derive(Debug)]
pub struct CachePersister {
    cache: woods_cache::Cache,
    key: String,
}

#[cfg(feature = "storage")]
impl CachePersister {
    /// Persist under the default storage key.
    pub fn new(cache: woods_cache::Cache) -> Self {
        Self::with_key(cache, STORAGE_KEY)
    }

    /// Persist under a custom key.
    pub fn with_key(cache: woods_cache::Cache, key: impl Into<String>) -> Self {
        Self {
            cache,
            key: key.into(),
        }
    }

    /// The key the snapshot is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying cache.
    pub fn cache(&self) -> &woods_cache::Cache {
        &self.cache
    }
}

#[cfg(feature = "storage")]
impl StatePersister for CachePersister {
    fn load(&self) -> Result<Option<StoreState>, CommerceError> {
        Ok(self.cache.get(&self.key)?)
    }

    fn save(&self, state: &StoreState) -> Result<(), CommerceError> {
        Ok(self.cache.set(&self.key, state)?)
    }
}
