//! Checkout totals.

use crate::checkout::ShippingMethod;
use crate::money::Money;
use crate::store::CartItem;
use serde::{Deserialize, Serialize};

/// Flat sales tax rate, in basis points (8%).
pub const TAX_RATE_BASIS_POINTS: i64 = 800;

/// Order summary derived from the cart and the shipping selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutTotals {
    /// Sum of line totals.
    pub subtotal: Money,
    pub shipping: Money,
    /// Tax on the subtotal only, rounded to the cent.
    pub tax: Money,
    pub total: Money,
}

impl CheckoutTotals {
    /// Compute totals. An empty cart yields a total equal to the shipping price.
    pub fn calculate(cart: &[CartItem], shipping_method: ShippingMethod) -> Self {
        let subtotal: Money = cart.iter().map(CartItem::line_total).sum();
        let shipping = shipping_method.price();
        let tax = subtotal.percentage(TAX_RATE_BASIS_POINTS);

        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

/// "1 item" or "N items".
pub fn item_count_label(lines: usize) -> String {
    if lines == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", lines)
    }
}
