//! Search module.
//!
//! Contains the product filters, the query that composes them, and the
//! filtered view handed back to listing pages.

mod filter;
mod query;
mod results;

pub use filter::{CategoryFilter, PriceRange, ALL_CATEGORIES};
pub use query::{category_options, filter_products, ProductQuery};
pub use results::FilteredProducts;
