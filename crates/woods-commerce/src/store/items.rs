//! Cart line and favorite entry types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A line in the cart.
///
/// At most one line exists per product id; adding the same product again
/// accumulates into `quantity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product being purchased.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price captured when the line was added.
    pub price: Money,
    /// Quantity. Not validated by the store.
    pub quantity: i64,
    /// Product image URL.
    pub image: String,
}

impl CartItem {
    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.price.multiply(self.quantity)
    }
}

/// A product marked as favorite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteItem {
    /// Product id.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Price when favorited.
    pub price: Money,
    /// Product image URL.
    pub image: String,
}
