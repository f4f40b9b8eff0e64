//! Product query: search text, category and price range composed with AND.

use crate::catalog::Product;
use crate::search::{CategoryFilter, FilteredProducts, PriceRange, ALL_CATEGORIES};
use serde::{Deserialize, Serialize};

/// Criteria for the product listing.
///
/// The default query is the listing page's initial state: no search text,
/// all categories, and the slider's `[$0, $2,000]` range.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Case-insensitive substring of the name or description.
    pub search: String,
    /// Category selection.
    pub category: CategoryFilter,
    /// Inclusive price bounds.
    pub price_range: PriceRange,
}

impl ProductQuery {
    /// A query that matches every product.
    pub fn new() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            price_range: PriceRange::unbounded(),
        }
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the price range.
    pub fn with_price_range(mut self, price_range: PriceRange) -> Self {
        self.price_range = price_range;
        self
    }

    /// Check one product against all three predicates.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_lowered(product, &self.search.to_lowercase())
    }

    /// Run the query over a catalog, keeping catalog order.
    pub fn apply<'a>(&self, catalog: &'a [Product]) -> FilteredProducts<'a> {
        let lowered = self.search.to_lowercase();
        let matches = catalog
            .iter()
            .filter(|p| self.matches_lowered(p, &lowered))
            .collect();
        FilteredProducts::new(matches, catalog.len())
    }

    fn matches_lowered(&self, product: &Product, lowered_search: &str) -> bool {
        product.mentions(lowered_search)
            && self.category.matches(&product.category)
            && self.price_range.contains(product.price)
    }
}

/// Filter a catalog by search text, category and inclusive price range.
///
/// Returns the matching products in catalog order; an empty result is not
/// an error.
pub fn filter_products<'a>(
    catalog: &'a [Product],
    search: &str,
    category: &CategoryFilter,
    price_range: &PriceRange,
) -> FilteredProducts<'a> {
    ProductQuery {
        search: search.to_string(),
        category: category.clone(),
        price_range: *price_range,
    }
    .apply(catalog)
}

/// Category picker options: `"all"` then each distinct category in the order
/// it first appears in the catalog.
pub fn category_options(catalog: &[Product]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for product in catalog {
        if !options[1..].contains(&product.category) {
            options.push(product.category.clone());
        }
    }
    options
}
