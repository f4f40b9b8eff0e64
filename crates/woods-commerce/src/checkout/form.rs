//! Checkout form and payment method.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    #[serde(rename = "paypal")]
    PayPal,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::CreditCard, PaymentMethod::PayPal];

    pub fn id(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit-card",
            PaymentMethod::PayPal => "paypal",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }

    pub fn title(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
        }
    }

    /// Card details are only collected for card payments.
    pub fn requires_card(&self) -> bool {
        matches!(self, PaymentMethod::CreditCard)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Contact, shipping address and card fields of the checkout page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    /// Optional.
    pub state: String,
    pub zip_code: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    /// Remember details for next time.
    pub save_info: bool,
}

impl CheckoutForm {
    /// Required fields that are blank, in form order.
    pub fn missing_fields(&self, payment: PaymentMethod) -> Vec<&'static str> {
        let mut required = vec![
            ("email", &self.email),
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("address", &self.address),
            ("city", &self.city),
            ("ZIP code", &self.zip_code),
        ];
        if payment.requires_card() {
            required.push(("card number", &self.card_number));
            required.push(("expiry date", &self.expiry_date));
            required.push(("CVV", &self.cvv));
        }

        required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Check if every required field is filled.
    pub fn is_complete(&self, payment: PaymentMethod) -> bool {
        self.missing_fields(payment).is_empty()
    }
}
