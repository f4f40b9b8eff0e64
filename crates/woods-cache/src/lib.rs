//! Type-safe Key-Value storage for the Artisan Woods storefront.
//!
//! Provides a simple, ergonomic API for keeping small records on the local
//! machine with automatic JSON serialization. The storefront keeps its cart
//! and favorites snapshot here between runs.
//!
//! # Example
//!
//! ```rust,ignore
//! use woods_cache::Cache;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Snapshot {
//!     cart: Vec<CartItem>,
//! }
//!
//! let cache = Cache::open("./.woods")?;
//!
//! // Store a value
//! cache.set("artisan-woods-storage", &snapshot)?;
//!
//! // Retrieve a value
//! let snapshot: Option<Snapshot> = cache.get("artisan-woods-storage")?;
//!
//! // Delete a value
//! cache.delete("artisan-woods-storage")?;
//! ```

mod error;
mod kv;

pub use error::CacheError;
pub use kv::Cache;

