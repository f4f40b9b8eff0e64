//! Checkout module.
//!
//! Contains shipping and payment options, the checkout form, totals, the
//! simulated payment step and the checkout state machine.

mod flow;
mod form;
mod payment;
mod shipping;
mod totals;

pub use flow::{CheckoutConfirmation, CheckoutFlow, CheckoutState, CONTINUE_SHOPPING_PATH, SUCCESS_PATH};
pub use form::{CheckoutForm, PaymentMethod};
pub use payment::{PaymentProcessor, PaymentReceipt, SimulatedPayment, DEFAULT_PAYMENT_DELAY};
pub use shipping::ShippingMethod;
pub use totals::{item_count_label, CheckoutTotals, TAX_RATE_BASIS_POINTS};
