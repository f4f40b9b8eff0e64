//! Shipping method types.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flat-rate shipping options offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    /// Free, 5-7 business days.
    #[default]
    Standard,
    /// 2-3 business days.
    Express,
    /// Next business day.
    Overnight,
}

impl ShippingMethod {
    /// Every method, in display order.
    pub const ALL: [ShippingMethod; 3] = [
        ShippingMethod::Standard,
        ShippingMethod::Express,
        ShippingMethod::Overnight,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "standard",
            ShippingMethod::Express => "express",
            ShippingMethod::Overnight => "overnight",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }

    pub fn title(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "Standard Shipping",
            ShippingMethod::Express => "Express Shipping",
            ShippingMethod::Overnight => "Overnight Shipping",
        }
    }

    /// Delivery window.
    pub fn description(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "5-7 business days",
            ShippingMethod::Express => "2-3 business days",
            ShippingMethod::Overnight => "Next business day",
        }
    }

    /// Flat shipping price.
    pub fn price(&self) -> Money {
        match self {
            ShippingMethod::Standard => Money::zero(),
            ShippingMethod::Express => Money::from_dollars(25),
            ShippingMethod::Overnight => Money::from_dollars(50),
        }
    }

    /// "FREE" for free shipping, otherwise the whole-dollar price.
    pub fn price_label(&self) -> String {
        let price = self.price();
        if price.is_zero() {
            "FREE".to_string()
        } else {
            price.display_whole()
        }
    }
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
