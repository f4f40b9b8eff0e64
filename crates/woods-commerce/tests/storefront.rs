//! End-to-end storefront scenarios against the builtin catalog.

use woods_commerce::catalog::SIMILAR_PRODUCTS_LIMIT;
use woods_commerce::prelude::*;

fn catalog() -> Catalog {
    Catalog::builtin().expect("builtin catalog should parse")
}

fn filled_form() -> CheckoutForm {
    CheckoutForm {
        email: "grace@example.com".to_string(),
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        address: "1 Harbor Way".to_string(),
        city: "Arlington".to_string(),
        state: "VA".to_string(),
        zip_code: "22201".to_string(),
        card_number: "4000056655665556".to_string(),
        expiry_date: "01/30".to_string(),
        cvv: "999".to_string(),
        save_info: false,
    }
}

#[test]
fn browse_living_room_under_600() {
    let catalog = catalog();
    let results = filter_products(
        catalog.products(),
        "",
        &CategoryFilter::from("Living Room"),
        &PriceRange::between(Money::zero(), Money::from_dollars(599)),
    );

    let ids: Vec<u32> = results.ids().into_iter().map(|id| id.get()).collect();
    assert_eq!(ids, vec![5, 7, 8]);
}

#[test]
fn search_is_case_insensitive_over_description() {
    let catalog = catalog();
    let results = ProductQuery::new().with_search("WALNUT").apply(catalog.products());

    assert!(!results.is_empty());
    for product in &results {
        let text = format!("{} {}", product.name, product.description).to_lowercase();
        assert!(text.contains("walnut"));
    }
}

#[test]
fn category_options_start_with_all() {
    let options = category_options(catalog().products());
    assert_eq!(options, vec!["all", "Dining Room", "Living Room", "Bedroom"]);
}

#[test]
fn cart_survives_restore_from_memory_snapshot() {
    let catalog = catalog();
    let persister = MemoryPersister::new();

    {
        let mut store = Store::new(persister.clone());
        let chair = catalog.require(ProductId::new(2)).unwrap();
        store.add_to_cart(chair.to_cart_item(1));
        store.add_to_cart(chair.to_cart_item(2));
        store.toggle_favorite(catalog.require(ProductId::new(9)).unwrap().to_favorite());
    }

    let restored = Store::restore(persister);
    assert_eq!(restored.cart_len(), 1);
    assert_eq!(restored.cart()[0].quantity, 3);
    assert!(restored.is_favorite(ProductId::new(9)));
}

#[tokio::test(start_paused = true)]
async fn browse_add_and_check_out() {
    let catalog = catalog();
    let mut store = Store::new(MemoryPersister::new());

    let table = catalog.require(ProductId::new(1)).unwrap();
    store.add_to_cart(table.to_cart_item(1));
    for similar in catalog.similar_to(table, SIMILAR_PRODUCTS_LIMIT) {
        store.toggle_favorite(similar.to_favorite());
    }
    let favorites_before = store.favorites_len();

    let mut flow = CheckoutFlow::open(store.cart())
        .with_shipping(ShippingMethod::Express)
        .with_form(filled_form());
    assert_eq!(flow.submit_label(store.cart()), "Pay $1,427.92");

    let confirmation = flow
        .submit(&mut store, &SimulatedPayment::default())
        .await
        .unwrap();

    assert_eq!(confirmation.totals.subtotal, Money::from_dollars(1299));
    assert_eq!(confirmation.totals.tax.display(), "$103.92");
    assert_eq!(flow.redirect(), Some("/checkout/success"));
    assert!(store.is_cart_empty());
    assert_eq!(store.favorites_len(), favorites_before);

    let reopened = CheckoutFlow::open(store.cart());
    assert_eq!(reopened.state(), CheckoutState::EmptyCart);
    assert_eq!(reopened.redirect(), Some("/products"));
}

#[cfg(feature = "storage")]
#[test]
fn cache_persister_restores_across_runs() {
    use woods_cache::Cache;

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let catalog = catalog();

    {
        let mut store = Store::restore(CachePersister::new(Cache::open(dir.path()).unwrap()));
        assert!(store.is_cart_empty());
        store.add_to_cart(catalog.require(ProductId::new(4)).unwrap().to_cart_item(2));
    }

    let store = Store::restore(CachePersister::new(Cache::open(dir.path()).unwrap()));
    assert_eq!(store.cart_quantity(), 2);
    assert_eq!(store.cart_subtotal(), Money::from_dollars(1798));
    assert_eq!(store.persist_failures(), 0);
}
