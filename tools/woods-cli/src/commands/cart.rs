//! Cart commands.

use anyhow::{Context as _, Result};
use dialoguer::Confirm;
use woods_commerce::checkout::item_count_label;
use woods_commerce::store::{CachePersister, Store};

use super::{clamp_quantity, CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;

    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => {}
        CartCommand::Add { id, quantity } => {
            let catalog = ctx.catalog()?;
            let product = catalog.require(id)?;
            let quantity = clamp_quantity(quantity);
            store.add_to_cart(product.to_cart_item(quantity));
            save(&store)?;
            ctx.output
                .success(&format!("Added {} x {} to your cart", quantity, product.name));
        }
        CartCommand::Remove { id } => {
            let Some(name) = store.cart_item(id).map(|item| item.name.clone()) else {
                ctx.output.warn(&format!("Product {} is not in your cart", id));
                return Ok(());
            };
            store.remove_from_cart(id);
            save(&store)?;
            ctx.output.success(&format!("Removed {} from your cart", name));
        }
        CartCommand::Update { id, quantity } => {
            if store.cart_item(id).is_none() {
                ctx.output.warn(&format!("Product {} is not in your cart", id));
                return Ok(());
            }
            let quantity = clamp_quantity(quantity);
            store.update_cart_quantity(id, quantity);
            save(&store)?;
            ctx.output.success(&format!("Quantity set to {}", quantity));
        }
        CartCommand::Clear { yes } => {
            if store.is_cart_empty() {
                ctx.output.info("Your cart is already empty");
                return Ok(());
            }
            if !yes && !ctx.output.is_json() {
                let confirmed = Confirm::new()
                    .with_prompt(format!(
                        "Remove {} from your cart?",
                        item_count_label(store.cart_len())
                    ))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    ctx.output.warn("Cart left unchanged");
                    return Ok(());
                }
            }
            store.clear_cart();
            save(&store)?;
            ctx.output.success("Cart cleared");
        }
    }

    print_cart(&store, ctx);
    Ok(())
}

/// Surface a failed write-through instead of only logging it.
pub(crate) fn save(store: &Store<CachePersister>) -> Result<()> {
    if store.persist_failures() > 0 {
        store.flush().context("Failed to save your cart")?;
    }
    Ok(())
}

fn print_cart(store: &Store<CachePersister>, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "cart": store.cart(),
            "subtotal": store.cart_subtotal(),
        }));
        return;
    }

    ctx.output.header(&format!(
        "Shopping Cart ({})",
        item_count_label(store.cart_len())
    ));
    if store.is_cart_empty() {
        ctx.output.info("Your cart is empty. Browse products with `woods products`.");
        return;
    }

    let widths = [4, 24, 5, 12];
    ctx.output.table_row(&["ID", "PRODUCT", "QTY", "TOTAL"], &widths);
    for item in store.cart() {
        ctx.output.table_row(
            &[
                item.id.to_string().as_str(),
                item.name.as_str(),
                item.quantity.to_string().as_str(),
                item.line_total().display().as_str(),
            ],
            &widths,
        );
    }
    ctx.output
        .total_line("Subtotal", &store.cart_subtotal().display(), true);
}
