//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use crate::store::{CartItem, FavoriteItem};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are built once when the catalog is loaded and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category tag (e.g., "Living Room").
    pub category: String,
    /// Unit price.
    pub price: Money,
    /// Primary image URL.
    pub image: String,
    /// Short description shown in listings.
    pub description: String,
    /// Construction details shown on the product page.
    pub details: ProductDetails,
}

/// Construction details of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductDetails {
    /// Overall dimensions (e.g., `72"L x 36"W x 30"H`).
    pub dimensions: String,
    /// Materials used.
    pub material: String,
    /// Surface finish.
    pub finish: String,
    /// Seating capacity, for tables and sofas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seating: Option<String>,
    /// Shipping weight.
    pub weight: String,
    /// Feature bullet points, in display order.
    #[serde(default)]
    pub features: Vec<String>,
}

impl Product {
    /// Snapshot this product as a cart line with the given quantity.
    ///
    /// The price is captured now; later catalog changes do not reprice it.
    pub fn to_cart_item(&self, quantity: i64) -> CartItem {
        CartItem {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            quantity,
            image: self.image.clone(),
        }
    }

    /// Snapshot this product as a favorites entry.
    pub fn to_favorite(&self) -> FavoriteItem {
        FavoriteItem {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            image: self.image.clone(),
        }
    }

    /// Whether `lowered_query` occurs in the lowercased name or description.
    pub(crate) fn mentions(&self, lowered_query: &str) -> bool {
        lowered_query.is_empty()
            || self.name.to_lowercase().contains(lowered_query)
            || self.description.to_lowercase().contains(lowered_query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Artisan Dining Table".to_string(),
            category: "Dining Room".to_string(),
            price: Money::from_dollars(1299),
            image: "table.jpg".to_string(),
            description: "Hand-crafted solid oak dining table".to_string(),
            details: ProductDetails {
                seating: Some("6-8 people".to_string()),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_to_cart_item_snapshots_price() {
        let item = table().to_cart_item(2);
        assert_eq!(item.id, ProductId::new(1));
        assert_eq!(item.price, Money::from_dollars(1299));
        assert_eq!(item.quantity, 2);
        assert_eq!(item.image, "table.jpg");
    }

    #[test]
    fn test_to_favorite() {
        let fav = table().to_favorite();
        assert_eq!(fav.name, "Artisan Dining Table");
        assert_eq!(fav.price, Money::from_dollars(1299));
    }

    #[test]
    fn test_mentions_is_case_insensitive() {
        let product = table();
        assert!(product.mentions("dining"));
        assert!(product.mentions("solid oak"));
        assert!(product.mentions(""));
        assert!(!product.mentions("walnut"));
    }

    #[test]
    fn test_seating_is_optional_in_json() {
        let json = r#"{"dimensions":"1","material":"m","finish":"f","weight":"w","features":[]}"#;
        let details: ProductDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.seating, None);
    }
}
