//! Filtered product views.

use crate::catalog::Product;
use crate::ids::ProductId;

/// Products that passed a query, in catalog order.
///
/// Borrowed from the catalog; an empty view is a valid result and is what
/// listing pages check to show their "no products" message.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredProducts<'a> {
    products: Vec<&'a Product>,
    catalog_len: usize,
}

impl<'a> FilteredProducts<'a> {
    pub(crate) fn new(products: Vec<&'a Product>, catalog_len: usize) -> Self {
        Self {
            products,
            catalog_len,
        }
    }

    /// Matching products in catalog order.
    pub fn products(&self) -> &[&'a Product] {
        &self.products
    }

    /// Iterate over matching products.
    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.products.iter().copied()
    }

    /// Ids of matching products, in order.
    pub fn ids(&self) -> Vec<ProductId> {
        self.products.iter().map(|p| p.id).collect()
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Size of the catalog the query ran over.
    pub fn catalog_len(&self) -> usize {
        self.catalog_len
    }

    /// Check if every catalog product matched.
    pub fn is_unfiltered(&self) -> bool {
        self.products.len() == self.catalog_len
    }
}

impl<'a> IntoIterator for FilteredProducts<'a> {
    type Item = &'a Product;
    type IntoIter = std::vec::IntoIter<&'a Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b FilteredProducts<'a> {
    type Item = &'a Product;
    type IntoIter = std::iter::Copied<std::slice::Iter<'b, &'a Product>>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter().copied()
    }
}
