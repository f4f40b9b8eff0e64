//! Checkout command.

use anyhow::{bail, Result};
use woods_commerce::checkout::{
    item_count_label, CheckoutFlow, CheckoutForm, CheckoutState, CheckoutTotals,
};

use super::cart::save;
use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let shipping = args
        .shipping
        .unwrap_or(ctx.config.checkout.default_shipping);
    let payment = args.payment;

    let mut flow = CheckoutFlow::open(store.cart())
        .with_shipping(shipping)
        .with_payment(payment)
        .with_form(form_from_args(args));

    let Some(totals) = flow.totals(store.cart()) else {
        if ctx.output.is_json() {
            ctx.output.json(&serde_json::json!({
                "state": CheckoutState::EmptyCart,
                "redirect": flow.redirect(),
            }));
        } else {
            ctx.output.warn(CheckoutState::EmptyCart.display_name());
            ctx.output
                .info("Add some items to your cart to proceed with checkout.");
        }
        return Ok(());
    };

    print_summary(&flow, &totals, store.cart_len(), ctx);

    let missing = flow.missing_fields();
    if !missing.is_empty() {
        bail!("Please fill in: {}", missing.join(", "));
    }

    let spinner = ctx.output.spinner(&format!(
        "{} - processing payment",
        flow.submit_label(store.cart())
    ));
    let result = flow.submit(&mut store, &ctx.payment_processor()).await;
    spinner.finish_and_clear();
    let confirmation = result?;
    save(&store)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "state": flow.state(),
            "redirect": flow.redirect(),
            "confirmation": confirmation,
        }));
        return Ok(());
    }

    ctx.output.success(&format!(
        "{}: paid {} by {}",
        flow.state().display_name(),
        confirmation.receipt.amount.display(),
        confirmation.receipt.method.title()
    ));
    ctx.output.kv(
        "processed at",
        &confirmation.receipt.processed_at.to_rfc3339(),
    );
    ctx.output
        .info("Thank you for your purchase. A confirmation email is on its way.");
    Ok(())
}

fn form_from_args(args: CheckoutArgs) -> CheckoutForm {
    CheckoutForm {
        email: args.email.unwrap_or_default(),
        first_name: args.first_name.unwrap_or_default(),
        last_name: args.last_name.unwrap_or_default(),
        address: args.address.unwrap_or_default(),
        city: args.city.unwrap_or_default(),
        state: args.state.unwrap_or_default(),
        zip_code: args.zip_code.unwrap_or_default(),
        card_number: args.card_number.unwrap_or_default(),
        expiry_date: args.expiry_date.unwrap_or_default(),
        cvv: args.cvv.unwrap_or_default(),
        save_info: args.save_info,
    }
}

fn print_summary(flow: &CheckoutFlow, totals: &CheckoutTotals, lines: usize, ctx: &Context) {
    ctx.output.header(&format!("Order Summary ({})", item_count_label(lines)));
    ctx.output.kv(
        "shipping",
        &format!(
            "{} ({}) {}",
            flow.shipping.title(),
            flow.shipping.description(),
            flow.shipping.price_label()
        ),
    );
    ctx.output.kv("payment", flow.payment.title());
    ctx.output.total_line("Subtotal", &totals.subtotal.display(), false);
    ctx.output.total_line("Shipping", &totals.shipping.display(), false);
    ctx.output.total_line("Tax", &totals.tax.display(), false);
    ctx.output.total_line("Total", &totals.total.display(), true);
}
