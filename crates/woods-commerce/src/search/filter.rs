//! Search filter types.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel category value that matches every product.
pub const ALL_CATEGORIES: &str = "all";

/// Category filter: everything, or one exact category tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Match every category.
    #[default]
    All,
    /// Match products whose category equals this tag exactly.
    Named(String),
}

impl CategoryFilter {
    /// Parse a category selection; `"all"` selects every category.
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value.to_string())
        }
    }

    /// Check a product category against this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }

    /// The selection as shown in the category picker.
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }

    /// Label with the first letter capitalized (e.g., "All").
    pub fn display_name(&self) -> String {
        let value = self.as_str();
        let mut chars = value.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value)
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        CategoryFilter::parse(value)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Named(name) => name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive price range. `max: None` has no upper bound.
///
/// A range whose minimum exceeds its maximum matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lowest accepted price.
    pub min: Money,
    /// Highest accepted price.
    pub max: Option<Money>,
}

impl PriceRange {
    /// Upper bound of the listing page's price slider.
    pub const SLIDER_MAX: Money = Money::from_dollars(2000);

    /// Every non-negative price: `[0, +inf)`.
    pub const fn unbounded() -> Self {
        Self {
            min: Money::zero(),
            max: None,
        }
    }

    /// `[min, max]`, both ends included.
    pub const fn between(min: Money, max: Money) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// `[min, +inf)`.
    pub const fn at_least(min: Money) -> Self {
        Self { min, max: None }
    }

    /// Check a price against the range.
    pub fn contains(&self, price: Money) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }
}

impl Default for PriceRange {
    /// The slider's initial position, `[$0, $2,000]`.
    fn default() -> Self {
        Self::between(Money::zero(), Self::SLIDER_MAX)
    }
}
