//! Catalog browsing commands.

use anyhow::Result;
use woods_commerce::catalog::{Product, SIMILAR_PRODUCTS_LIMIT};
use woods_commerce::money::Money;
use woods_commerce::search::{category_options, CategoryFilter, PriceRange, ProductQuery};

use super::{ProductsArgs, ShowArgs};
use crate::context::Context;
use crate::output::{favorite_marker, price};

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let store = ctx.open_store()?;
    let query = build_query(&args);
    let results = query.apply(catalog.products());

    if ctx.output.is_json() {
        let products: Vec<&Product> = results.iter().collect();
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} ({} of {})",
        query.category.display_name(),
        results.len(),
        results.catalog_len()
    ));

    if results.is_empty() {
        ctx.output.info("No products found matching your criteria.");
        return Ok(());
    }

    for product in &results {
        ctx.output.list_item(&format!(
            "{} {:>3}  {:<24} {:<12} {}",
            favorite_marker(store.is_favorite(product.id)),
            product.id,
            product.name,
            product.category,
            price(product.price)
        ));
    }

    Ok(())
}

/// Run the categories command.
pub async fn categories(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let options = category_options(catalog.products());

    if ctx.output.is_json() {
        ctx.output.json(&options);
        return Ok(());
    }

    ctx.output.header("Categories");
    for option in &options {
        ctx.output.list_item(&CategoryFilter::parse(option).display_name());
    }
    Ok(())
}

/// Run the show command.
pub async fn show(args: ShowArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let store = ctx.open_store()?;
    let product = catalog.require(args.id)?;
    let similar = catalog.similar_to(product, SIMILAR_PRODUCTS_LIMIT);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "product": product,
            "favorite": store.is_favorite(product.id),
            "in_cart": store.cart_item(product.id).map(|item| item.quantity),
            "similar": similar,
        }));
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} {}",
        product.name,
        favorite_marker(store.is_favorite(product.id))
    ));
    ctx.output.kv("price", &price(product.price));
    ctx.output.kv("category", &product.category);
    ctx.output.info(&product.description);

    let details = &product.details;
    ctx.output.kv("dimensions", &details.dimensions);
    ctx.output.kv("material", &details.material);
    ctx.output.kv("finish", &details.finish);
    if let Some(ref seating) = details.seating {
        ctx.output.kv("seating", seating);
    }
    ctx.output.kv("weight", &details.weight);
    for feature in &details.features {
        ctx.output.list_item(feature);
    }

    if let Some(item) = store.cart_item(product.id) {
        ctx.output.info(&format!("{} in your cart", item.quantity));
    }

    if !similar.is_empty() {
        ctx.output.header("You may also like");
        for other in similar {
            ctx.output
                .list_item(&format!("{:>3}  {}  {}", other.id, other.name, price(other.price)));
        }
    }

    Ok(())
}

fn build_query(args: &ProductsArgs) -> ProductQuery {
    let min = args.min.map(Money::from_decimal).unwrap_or_else(Money::zero);
    let price_range = match args.max {
        Some(max) => PriceRange::between(min, Money::from_decimal(max)),
        None => PriceRange::at_least(min),
    };

    let mut query = ProductQuery::new().with_price_range(price_range);
    if let Some(ref search) = args.search {
        query = query.with_search(search.as_str());
    }
    if let Some(ref category) = args.category {
        query = query.with_category(category.as_str());
    }
    query
}
