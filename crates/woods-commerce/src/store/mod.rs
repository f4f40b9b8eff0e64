//! Cart and favorites store.
//!
//! Contains the cart and favorites snapshots, the persisted state layout,
//! the store that mutates them, and the persisters it writes through.

mod items;
mod persist;
mod state;
mod store;

pub use items::{CartItem, FavoriteItem};
#[cfg(feature = "storage")]
pub use persist::CachePersister;
pub use persist::{MemoryPersister, NoopPersister, SaveHook, StatePersister, STORAGE_KEY};
pub use state::StoreState;
pub use store::Store;
