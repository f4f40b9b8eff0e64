//! Product catalog module.
//!
//! Contains the read-only product records and the ordered catalog that the
//! store and the query engine read from.

mod catalog;
mod product;

pub use catalog::{Catalog, SIMILAR_PRODUCTS_LIMIT};
pub use product::{Product, ProductDetails};
