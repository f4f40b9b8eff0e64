//! Persisted store state.

use crate::ids::ProductId;
use crate::store::{CartItem, FavoriteItem};
use serde::{Deserialize, Serialize};

/// Everything the store owns, in the shape written to durable storage:
/// `{"cart": [...], "favorites": [...]}`, both in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StoreState {
    /// Cart lines in insertion order.
    #[serde(default)]
    pub cart: Vec<CartItem>,
    /// Favorites in insertion order.
    #[serde(default)]
    pub favorites: Vec<FavoriteItem>,
}

impl StoreState {
    /// Find the cart line for a product.
    pub fn cart_item(&self, id: ProductId) -> Option<&CartItem> {
        self.cart.iter().find(|i| i.id == id)
    }

    /// Check if a product is in favorites.
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.iter().any(|f| f.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_state_json_layout() {
        let state = StoreState {
            cart: vec![CartItem {
                id: ProductId::new(2),
                name: "Modern Lounge Chair".to_string(),
                price: Money::from_dollars(799),
                quantity: 1,
                image: "chair.jpg".to_string(),
            }],
            favorites: vec![],
        };

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["cart"][0]["id"], 2);
        assert_eq!(value["cart"][0]["price"], 79_900);
        assert_eq!(value["cart"][0]["quantity"], 1);
        assert!(value["favorites"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let state: StoreState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, StoreState::default());
    }
}
