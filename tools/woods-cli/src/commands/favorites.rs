//! Favorites commands.

use anyhow::Result;

use super::cart::save;
use super::{FavoritesArgs, FavoritesCommand};
use crate::context::Context;
use crate::output::price;

/// Run the favorites command.
pub async fn run(args: FavoritesArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;

    if let Some(FavoritesCommand::Toggle { id }) = args.command {
        let catalog = ctx.catalog()?;
        let product = catalog.require(id)?;
        store.toggle_favorite(product.to_favorite());
        save(&store)?;

        if store.is_favorite(id) {
            ctx.output.success(&format!("Added {} to favorites", product.name));
        } else {
            ctx.output.success(&format!("Removed {} from favorites", product.name));
        }
    }

    if ctx.output.is_json() {
        ctx.output.json(&store.favorites());
        return Ok(());
    }

    ctx.output
        .header(&format!("Favorites ({})", store.favorites_len()));
    if store.favorites().is_empty() {
        ctx.output.info("No favorites yet. Add one with `woods favorites toggle <id>`.");
        return Ok(());
    }
    for item in store.favorites() {
        ctx.output
            .list_item(&format!("{:>3}  {}  {}", item.id, item.name, price(item.price)));
    }
    Ok(())
}
