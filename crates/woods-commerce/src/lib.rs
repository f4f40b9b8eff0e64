//! Storefront core for Artisan Woods.
//!
//! This crate holds everything the storefront pages need that is not
//! presentation:
//!
//! - **Catalog**: the read-only product list
//! - **Store**: cart and favorites with write-through persistence
//! - **Search**: search, category and price filtering over the catalog
//! - **Checkout**: totals, form validation and the payment state machine
//!
//! # Example
//!
//! ```
//! use woods_commerce::prelude::*;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let mut store: Store = Store::default();
//!
//! let table = catalog.require(ProductId::new(1)).unwrap();
//! store.add_to_cart(table.to_cart_item(1));
//!
//! let totals = CheckoutTotals::calculate(store.cart(), ShippingMethod::Standard);
//! assert_eq!(totals.total.display(), "$1,402.92");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod checkout;
pub mod search;
pub mod store;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Product, ProductDetails};

    // Store
    pub use crate::store::{
        CartItem, FavoriteItem, MemoryPersister, NoopPersister, StatePersister, Store, StoreState,
    };
    #[cfg(feature = "storage")]
    pub use crate::store::CachePersister;

    // Search
    pub use crate::search::{
        category_options, filter_products, CategoryFilter, FilteredProducts, PriceRange,
        ProductQuery,
    };

    // Checkout
    pub use crate::checkout::{
        CheckoutConfirmation, CheckoutFlow, CheckoutForm, CheckoutState, CheckoutTotals,
        PaymentMethod, PaymentProcessor, PaymentReceipt, ShippingMethod, SimulatedPayment,
    };
}
