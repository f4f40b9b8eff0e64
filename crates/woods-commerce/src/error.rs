//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Store mutators never produce these; missing entries are no-ops there.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two catalog entries share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),

    /// Catalog could not be read.
    #[error("Catalog error: {0}")]
    CatalogError(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Checkout incomplete.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Cache error.
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[cfg(feature = "storage")]
impl From<woods_cache::CacheError> for CommerceError {
    fn from(e: woods_cache::CacheError) -> Self {
        CommerceError::CacheError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
