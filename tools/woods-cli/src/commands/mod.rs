//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod favorites;
pub mod products;

use clap::{Args, Subcommand};
use woods_commerce::checkout::{PaymentMethod, ShippingMethod};
use woods_commerce::ids::ProductId;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Match against product names and descriptions (case-insensitive).
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show this category ("all" for every category).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Minimum price in dollars.
    #[arg(long)]
    pub min: Option<f64>,

    /// Maximum price in dollars.
    #[arg(long)]
    pub max: Option<f64>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: ProductId,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart.
    Show,
    /// Add a product to the cart.
    Add {
        /// Product id.
        id: ProductId,

        /// Quantity to add (at least 1).
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a product from the cart.
    Remove {
        /// Product id.
        id: ProductId,
    },
    /// Set the quantity of a cart line (at least 1).
    Update {
        /// Product id.
        id: ProductId,

        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the favorites command.
#[derive(Args)]
pub struct FavoritesArgs {
    #[command(subcommand)]
    pub command: Option<FavoritesCommand>,
}

#[derive(Subcommand)]
pub enum FavoritesCommand {
    /// List favorites.
    List,
    /// Add or remove a product from favorites.
    Toggle {
        /// Product id.
        id: ProductId,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Shipping method: standard, express or overnight.
    #[arg(long, value_parser = parse_shipping)]
    pub shipping: Option<ShippingMethod>,

    /// Payment method: credit-card or paypal.
    #[arg(long, value_parser = parse_payment, default_value = "credit-card")]
    pub payment: PaymentMethod,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub state: Option<String>,

    #[arg(long = "zip")]
    pub zip_code: Option<String>,

    #[arg(long)]
    pub card_number: Option<String>,

    /// Card expiry, MM/YY.
    #[arg(long = "expiry")]
    pub expiry_date: Option<String>,

    #[arg(long)]
    pub cvv: Option<String>,

    /// Remember these details for next time.
    #[arg(long)]
    pub save_info: bool,
}

fn parse_shipping(value: &str) -> Result<ShippingMethod, String> {
    ShippingMethod::from_id(value).ok_or_else(|| {
        let ids: Vec<&str> = ShippingMethod::ALL.iter().map(|m| m.id()).collect();
        format!("unknown shipping method '{}' (expected {})", value, ids.join(", "))
    })
}

fn parse_payment(value: &str) -> Result<PaymentMethod, String> {
    PaymentMethod::from_id(value).ok_or_else(|| {
        let ids: Vec<&str> = PaymentMethod::ALL.iter().map(|m| m.id()).collect();
        format!("unknown payment method '{}' (expected {})", value, ids.join(", "))
    })
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Quantities typed by the user never go below one.
pub(crate) fn clamp_quantity(quantity: i64) -> i64 {
    quantity.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity(-3), 1);
        assert_eq!(clamp_quantity(0), 1);
        assert_eq!(clamp_quantity(4), 4);
    }

    #[test]
    fn test_parse_shipping() {
        assert_eq!(parse_shipping("overnight"), Ok(ShippingMethod::Overnight));
        assert!(parse_shipping("drone").unwrap_err().contains("standard, express, overnight"));
    }

    #[test]
    fn test_parse_payment() {
        assert_eq!(parse_payment("paypal"), Ok(PaymentMethod::PayPal));
        assert!(parse_payment("cash").is_err());
    }
}
