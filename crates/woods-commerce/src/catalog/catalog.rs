//! The ordered, read-only product catalog.

use std::collections::HashSet;
use std::path::Path;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Number of related products shown on a product page.
pub const SIMILAR_PRODUCTS_LIMIT: usize = 3;

/// Furniture dataset bundled with the storefront.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// An ordered collection of products.
///
/// Order is significant: listings, best sellers and query results all follow
/// catalog order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProduct(product.id));
            }
        }
        Ok(Self { products })
    }

    /// Parse a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| CommerceError::CatalogError(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), products = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// The bundled furniture catalog.
    pub fn builtin() -> Result<Self, CommerceError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by id, failing if it does not exist.
    pub fn require(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.get(id).ok_or(CommerceError::ProductNotFound(id))
    }

    /// The first `limit` products, featured on the home page.
    pub fn best_sellers(&self, limit: usize) -> &[Product] {
        &self.products[..limit.min(self.products.len())]
    }

    /// Other products in the same category, in catalog order.
    pub fn similar_to(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductDetails;
    use crate::money::Money;

    fn product(id: u32, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            category: category.to_string(),
            price: Money::from_dollars(100),
            image: String::new(),
            description: String::new(),
            details: ProductDetails::default(),
        }
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 9);

        let table = catalog.require(ProductId::new(1)).unwrap();
        assert_eq!(table.name, "Artisan Dining Table");
        assert_eq!(table.price, Money::from_dollars(1299));
        assert_eq!(table.details.seating.as_deref(), Some("6-8 people"));
        assert_eq!(table.details.features.len(), 5);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![product(1, "A"), product(1, "B")]);
        assert!(matches!(result, Err(CommerceError::DuplicateProduct(id)) if id.get() == 1));
    }

    #[test]
    fn test_require_missing_product() {
        let catalog = Catalog::new(vec![product(1, "A")]).unwrap();
        assert!(matches!(
            catalog.require(ProductId::new(42)),
            Err(CommerceError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_best_sellers_are_first_products() {
        let catalog = Catalog::new(vec![product(1, "A"), product(2, "B")]).unwrap();
        assert_eq!(catalog.best_sellers(3).len(), 2);
        assert_eq!(catalog.best_sellers(1)[0].id, ProductId::new(1));
    }

    #[test]
    fn test_similar_excludes_self_and_other_categories() {
        let catalog = Catalog::new(vec![
            product(1, "Living Room"),
            product(2, "Bedroom"),
            product(3, "Living Room"),
            product(4, "Living Room"),
            product(5, "Living Room"),
            product(6, "Living Room"),
        ])
        .unwrap();

        let base = catalog.require(ProductId::new(3)).unwrap();
        let ids: Vec<u32> = catalog
            .similar_to(base, SIMILAR_PRODUCTS_LIMIT)
            .iter()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(ids, vec![1, 4, 5]);
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        assert!(matches!(
            Catalog::from_json("{"),
            Err(CommerceError::SerializationError(_))
        ));
    }
}
