//! Checkout flow state machine.

use crate::checkout::{
    CheckoutForm, CheckoutTotals, PaymentMethod, PaymentProcessor, PaymentReceipt,
    ShippingMethod,
};
use crate::store::{CartItem, StatePersister, Store};
use crate::CommerceError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Where the empty-cart placeholder sends the customer.
pub const CONTINUE_SHOPPING_PATH: &str = "/products";

/// Where a completed checkout sends the customer.
pub const SUCCESS_PATH: &str = "/checkout/success";

/// States of the checkout page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutState {
    /// Nothing to check out. Shows a placeholder instead of the form.
    EmptyCart,
    /// Form is being filled in.
    Editing,
    /// Payment in progress; the form is disabled.
    Submitting,
    /// Paid and cart cleared.
    Complete,
}

impl CheckoutState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutState::EmptyCart => "empty_cart",
            CheckoutState::Editing => "editing",
            CheckoutState::Submitting => "submitting",
            CheckoutState::Complete => "complete",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutState::EmptyCart => "Your cart is empty",
            CheckoutState::Editing => "Checkout",
            CheckoutState::Submitting => "Processing",
            CheckoutState::Complete => "Order confirmed",
        }
    }
}

/// Result of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfirmation {
    pub receipt: PaymentReceipt,
    pub totals: CheckoutTotals,
    /// Cart lines paid for.
    pub line_count: usize,
}

/// One visit to the checkout page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutFlow {
    state: CheckoutState,
    pub shipping: ShippingMethod,
    pub payment: PaymentMethod,
    pub form: CheckoutForm,
}

impl CheckoutFlow {
    /// Open checkout for the given cart.
    pub fn open(cart: &[CartItem]) -> Self {
        let state = if cart.is_empty() {
            CheckoutState::EmptyCart
        } else {
            CheckoutState::Editing
        };
        debug!(state = state.as_str(), lines = cart.len(), "opened checkout");
        Self {
            state,
            shipping: ShippingMethod::default(),
            payment: PaymentMethod::default(),
            form: CheckoutForm::default(),
        }
    }

    /// Use a shipping method.
    pub fn with_shipping(mut self, shipping: ShippingMethod) -> Self {
        self.shipping = shipping;
        self
    }

    /// Use a payment method.
    pub fn with_payment(mut self, payment: PaymentMethod) -> Self {
        self.payment = payment;
        self
    }

    /// Use prefilled form fields.
    pub fn with_form(mut self, form: CheckoutForm) -> Self {
        self.form = form;
        self
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Follow cart edits made while the page is open.
    pub fn sync_cart(&mut self, cart: &[CartItem]) {
        let next = match (self.state, cart.is_empty()) {
            (CheckoutState::Editing, true) => CheckoutState::EmptyCart,
            (CheckoutState::EmptyCart, false) => CheckoutState::Editing,
            (state, _) => state,
        };
        if next != self.state {
            debug!(from = self.state.as_str(), to = next.as_str(), "checkout cart changed");
            self.state = next;
        }
    }

    /// Order summary. The empty-cart placeholder has none.
    pub fn totals(&self, cart: &[CartItem]) -> Option<CheckoutTotals> {
        match self.state {
            CheckoutState::EmptyCart => None,
            _ => Some(CheckoutTotals::calculate(cart, self.shipping)),
        }
    }

    /// Required fields still blank for the selected payment method.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.form.missing_fields(self.payment)
    }

    /// Move from `Editing` to `Submitting`.
    pub fn begin_submit(&mut self, cart: &[CartItem]) -> Result<CheckoutTotals, CommerceError> {
        match self.state {
            CheckoutState::EmptyCart => return Err(CommerceError::EmptyCart),
            CheckoutState::Editing if cart.is_empty() => {
                self.transition(CheckoutState::EmptyCart);
                return Err(CommerceError::EmptyCart);
            }
            CheckoutState::Editing => {}
            _ => return Err(self.invalid_transition(CheckoutState::Submitting)),
        }

        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CommerceError::CheckoutIncomplete(missing.join(", ")));
        }

        self.transition(CheckoutState::Submitting);
        Ok(CheckoutTotals::calculate(cart, self.shipping))
    }

    /// Move from `Submitting` to `Complete`, clearing the cart.
    pub fn complete<P: StatePersister>(
        &mut self,
        store: &mut Store<P>,
    ) -> Result<(), CommerceError> {
        if self.state != CheckoutState::Submitting {
            return Err(self.invalid_transition(CheckoutState::Complete));
        }
        store.clear_cart();
        self.transition(CheckoutState::Complete);
        Ok(())
    }

    /// Run the whole submission: validate, pay, then clear the cart.
    pub async fn submit<P, X>(
        &mut self,
        store: &mut Store<P>,
        processor: &X,
    ) -> Result<CheckoutConfirmation, CommerceError>
    where
        P: StatePersister,
        X: PaymentProcessor + ?Sized,
    {
        let totals = self.begin_submit(store.cart())?;
        let line_count = store.cart_len();

        let receipt = processor.process(totals.total, self.payment).await;
        self.complete(store)?;

        info!(
            total = %totals.total,
            lines = line_count,
            method = %self.payment,
            "checkout complete"
        );
        Ok(CheckoutConfirmation {
            receipt,
            totals,
            line_count,
        })
    }

    /// The form is disabled while payment is in progress.
    pub fn is_busy(&self) -> bool {
        self.state == CheckoutState::Submitting
    }

    /// Label of the pay button.
    pub fn submit_label(&self, cart: &[CartItem]) -> String {
        if self.is_busy() {
            return "Processing...".to_string();
        }
        let total = CheckoutTotals::calculate(cart, self.shipping).total;
        format!("Pay {}", total.display_whole())
    }

    /// Page the customer should be sent to, if any.
    pub fn redirect(&self) -> Option<&'static str> {
        match self.state {
            CheckoutState::EmptyCart => Some(CONTINUE_SHOPPING_PATH),
            CheckoutState::Complete => Some(SUCCESS_PATH),
            CheckoutState::Editing | CheckoutState::Submitting => None,
        }
    }

    fn transition(&mut self, to: CheckoutState) {
        debug!(from = self.state.as_str(), to = to.as_str(), "checkout transition");
        self.state = to;
    }

    fn invalid_transition(&self, to: CheckoutState) -> CommerceError {
        CommerceError::InvalidCheckoutTransition {
            from: self.state.as_str().to_string(),
            to: to.as_str().to_string(),
        }
    }
}
