//! The cart and favorites store.

use tracing::{debug, warn};

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::store::{CartItem, FavoriteItem, NoopPersister, StatePersister, StoreState};

/// Single source of truth for the session's cart and favorites.
///
/// The store is an ordinary owned value: pages borrow it, nothing reaches it
/// through a global. Every mutator writes the new state through the
/// persister before returning. A failed write is logged and counted; the
/// in-memory state stays authoritative and [`Store::flush`] can retry.
///
/// # Example
///
/// ```
/// use woods_commerce::catalog::Catalog;
/// use woods_commerce::store::{MemoryPersister, Store};
///
/// let catalog = Catalog::builtin().unwrap();
/// let chair = &catalog.products()[1];
///
/// let mut store = Store::new(MemoryPersister::new());
/// store.add_to_cart(chair.to_cart_item(1));
/// store.add_to_cart(chair.to_cart_item(2));
///
/// assert_eq!(store.cart().len(), 1);
/// assert_eq!(store.cart()[0].quantity, 3);
/// ```
#[derive(Debug)]
pub struct Store<P = NoopPersister> {
    state: StoreState,
    persister: P,
    persist_failures: usize,
}

impl Default for Store<NoopPersister> {
    fn default() -> Self {
        Self::new(NoopPersister)
    }
}

impl<P: StatePersister> Store<P> {
    /// Create an empty store that writes through `persister`.
    pub fn new(persister: P) -> Self {
        Self {
            state: StoreState::default(),
            persister,
            persist_failures: 0,
        }
    }

    /// Create a store from the persister's last snapshot.
    ///
    /// A missing snapshot starts empty. An unreadable one also starts empty,
    /// with a warning; it is overwritten by the next mutation.
    pub fn restore(persister: P) -> Self {
        let state = match persister.load() {
            Ok(Some(state)) => {
                debug!(
                    cart_lines = state.cart.len(),
                    favorites = state.favorites.len(),
                    "restored store snapshot"
                );
                state
            }
            Ok(None) => StoreState::default(),
            Err(e) => {
                warn!(error = %e, "failed to restore store snapshot; starting empty");
                StoreState::default()
            }
        };
        Self {
            state,
            persister,
            persist_failures: 0,
        }
    }

    /// Add a line, or accumulate quantity into the existing line for the id.
    ///
    /// The existing line keeps its name, price and position; only its
    /// quantity grows. Quantities are not validated.
    pub fn add_to_cart(&mut self, item: CartItem) {
        if let Some(existing) = self.state.cart.iter_mut().find(|i| i.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
            debug!(id = %item.id, quantity = existing.quantity, "accumulated cart line");
        } else {
            debug!(id = %item.id, quantity = item.quantity, "added cart line");
            self.state.cart.push(item);
        }
        self.persist();
    }

    /// Remove the line for `id`. Absent ids are a no-op.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.state.cart.retain(|i| i.id != id);
        debug!(id = %id, "removed cart line");
        self.persist();
    }

    /// Set the quantity of the line for `id` verbatim.
    ///
    /// A quantity of zero leaves the line in place; callers remove lines
    /// explicitly. Absent ids are a no-op.
    pub fn update_cart_quantity(&mut self, id: ProductId, quantity: i64) {
        if let Some(item) = self.state.cart.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity;
            debug!(id = %id, quantity, "updated cart quantity");
        }
        self.persist();
    }

    /// Remove the favorite with this id if present, otherwise append it.
    pub fn toggle_favorite(&mut self, item: FavoriteItem) {
        let before = self.state.favorites.len();
        self.state.favorites.retain(|f| f.id != item.id);
        if self.state.favorites.len() == before {
            debug!(id = %item.id, "added favorite");
            self.state.favorites.push(item);
        } else {
            debug!(id = %item.id, "removed favorite");
        }
        self.persist();
    }

    /// Empty the cart. Favorites are untouched.
    pub fn clear_cart(&mut self) {
        self.state.cart.clear();
        debug!("cleared cart");
        self.persist();
    }

    /// Cart lines in insertion order.
    pub fn cart(&self) -> &[CartItem] {
        &self.state.cart
    }

    /// Favorites in insertion order.
    pub fn favorites(&self) -> &[FavoriteItem] {
        &self.state.favorites
    }

    /// The full state as persisted.
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// The cart line for a product.
    pub fn cart_item(&self, id: ProductId) -> Option<&CartItem> {
        self.state.cart_item(id)
    }

    /// Check if a product is in favorites.
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.state.is_favorite(id)
    }

    /// Number of cart lines (the cart badge count).
    pub fn cart_len(&self) -> usize {
        self.state.cart.len()
    }

    /// Number of favorites (the favorites badge count).
    pub fn favorites_len(&self) -> usize {
        self.state.favorites.len()
    }

    /// Sum of quantities across cart lines.
    pub fn cart_quantity(&self) -> i64 {
        self.state
            .cart
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Sum of price times quantity across cart lines.
    pub fn cart_subtotal(&self) -> Money {
        self.state.cart.iter().map(CartItem::line_total).sum()
    }

    /// Check if the cart has no lines.
    pub fn is_cart_empty(&self) -> bool {
        self.state.cart.is_empty()
    }

    /// Write the current state now, returning any persistence error.
    pub fn flush(&self) -> Result<(), CommerceError> {
        self.persister.save(&self.state)
    }

    /// How many write-throughs have failed since the store was created.
    pub fn persist_failures(&self) -> usize {
        self.persist_failures
    }

    /// The persister this store writes through.
    pub fn persister(&self) -> &P {
        &self.persister
    }

    fn persist(&mut self) {
        if let Err(e) = self.persister.save(&self.state) {
            self.persist_failures += 1;
            warn!(
                error = %e,
                failures = self.persist_failures,
                "failed to persist store snapshot"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryPersister, SaveHook};

    fn item(id: u32, price: i64, quantity: i64) -> CartItem {
        CartItem {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            price: Money::from_dollars(price),
            quantity,
            image: format!("{}.jpg", id),
        }
    }

    fn empty_store() -> Store {
        Store::default()
    }

    fn favorite(id: u32) -> FavoriteItem {
        FavoriteItem {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            price: Money::from_dollars(100),
            image: String::new(),
        }
    }

    #[test]
    fn test_store_starts_empty() {
        let store = empty_store();
        assert!(store.cart().is_empty());
        assert!(store.favorites().is_empty());
        assert!(store.is_cart_empty());
    }

    #[test]
    fn test_add_appends_in_insertion_order() {
        let mut store = empty_store();
        store.add_to_cart(item(3, 10, 1));
        store.add_to_cart(item(1, 10, 1));
        store.add_to_cart(item(2, 10, 1));

        let ids: Vec<u32> = store.cart().iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_repeated_add_accumulates_quantity() {
        let mut store = empty_store();
        for quantity in [1, 2, 4] {
            store.add_to_cart(item(7, 10, quantity));
        }

        assert_eq!(store.cart_len(), 1);
        assert_eq!(store.cart_item(ProductId::new(7)).unwrap().quantity, 7);
    }

    #[test]
    fn test_repeated_add_keeps_first_snapshot() {
        let mut store = empty_store();
        store.add_to_cart(item(1, 10, 1));
        store.add_to_cart(item(2, 10, 1));
        store.add_to_cart(item(1, 99, 2));

        let line = &store.cart()[0];
        assert_eq!(line.id, ProductId::new(1));
        assert_eq!(line.price, Money::from_dollars(10));
        assert_eq!(line.quantity, 3);
    }

    #[test]
    fn test_add_does_not_validate_quantity() {
        let mut store = empty_store();
        store.add_to_cart(item(1, 10, 0));
        store.add_to_cart(item(2, 10, -3));
        assert_eq!(store.cart_len(), 2);
        assert_eq!(store.cart()[1].quantity, -3);
    }

    #[test]
    fn test_remove_from_cart() {
        let mut store = empty_store();
        store.add_to_cart(item(1, 10, 1));
        store.add_to_cart(item(2, 10, 1));

        store.remove_from_cart(ProductId::new(1));
        assert_eq!(store.cart_len(), 1);
        assert_eq!(store.cart()[0].id, ProductId::new(2));

        store.remove_from_cart(ProductId::new(99));
        assert_eq!(store.cart_len(), 1);
    }

    #[test]
    fn test_update_quantity_sets_exact_value() {
        let mut store = empty_store();
        store.add_to_cart(item(1, 10, 5));

        store.update_cart_quantity(ProductId::new(1), 2);
        assert_eq!(store.cart()[0].quantity, 2);

        store.update_cart_quantity(ProductId::new(1), 11);
        assert_eq!(store.cart()[0].quantity, 11);
    }

    #[test]
    fn test_update_quantity_to_zero_keeps_line() {
        let mut store = empty_store();
        store.add_to_cart(item(1, 10, 1));

        store.update_cart_quantity(ProductId::new(1), 0);

        assert_eq!(store.cart_len(), 1);
        assert_eq!(store.cart()[0].quantity, 0);
        assert!(store.cart_subtotal().is_zero());
    }

    #[test]
    fn test_update_quantity_absent_id_is_noop() {
        let mut store = empty_store();
        store.add_to_cart(item(1, 10, 1));
        let before = store.state().clone();

        store.update_cart_quantity(ProductId::new(2), 9);
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_toggle_favorite_twice_restores_membership() {
        let mut store = empty_store();
        store.toggle_favorite(favorite(1));
        store.toggle_favorite(favorite(2));
        let before = store.favorites().to_vec();

        store.toggle_favorite(favorite(3));
        assert!(store.is_favorite(ProductId::new(3)));
        store.toggle_favorite(favorite(3));

        assert!(!store.is_favorite(ProductId::new(3)));
        assert_eq!(store.favorites(), before.as_slice());
    }

    #[test]
    fn test_toggle_removes_from_middle_preserving_order() {
        let mut store = empty_store();
        for id in [1, 2, 3] {
            store.toggle_favorite(favorite(id));
        }
        store.toggle_favorite(favorite(2));

        let ids: Vec<u32> = store.favorites().iter().map(|f| f.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(store.favorites_len(), 2);
    }

    #[test]
    fn test_clear_cart_keeps_favorites() {
        let mut store = empty_store();
        store.add_to_cart(item(1, 10, 1));
        store.toggle_favorite(favorite(1));
        store.toggle_favorite(favorite(2));
        let favorites_before = store.favorites_len();

        store.clear_cart();

        assert!(store.is_cart_empty());
        assert_eq!(store.favorites_len(), favorites_before);
    }

    #[test]
    fn test_derived_totals() {
        let mut store = empty_store();
        store.add_to_cart(item(1, 100, 2));
        store.add_to_cart(item(2, 50, 1));

        assert_eq!(store.cart_quantity(), 3);
        assert_eq!(store.cart_subtotal(), Money::from_dollars(250));
    }

    #[test]
    fn test_every_mutation_writes_through() {
        let persister = MemoryPersister::new();
        let mut store = Store::new(persister.clone());

        store.add_to_cart(item(1, 10, 1));
        store.update_cart_quantity(ProductId::new(1), 4);
        store.toggle_favorite(favorite(1));
        store.remove_from_cart(ProductId::new(42));
        store.clear_cart();

        assert_eq!(persister.save_count(), 5);
        let saved = persister.snapshot().unwrap();
        assert!(saved.cart.is_empty());
        assert_eq!(saved.favorites.len(), 1);
    }

    #[test]
    fn test_restore_rehydrates_snapshot() {
        let persister = MemoryPersister::new();
        {
            let mut store = Store::new(persister.clone());
            store.add_to_cart(item(1, 10, 2));
            store.toggle_favorite(favorite(4));
        }

        let restored = Store::restore(persister);
        assert_eq!(restored.cart_item(ProductId::new(1)).unwrap().quantity, 2);
        assert!(restored.is_favorite(ProductId::new(4)));
    }

    #[test]
    fn test_restore_from_failing_persister_starts_empty() {
        struct Broken;
        impl StatePersister for Broken {
            fn load(&self) -> Result<Option<StoreState>, CommerceError> {
                Err(CommerceError::CacheError("disk gone".to_string()))
            }
            fn save(&self, _state: &StoreState) -> Result<(), CommerceError> {
                Ok(())
            }
        }

        let store = Store::restore(Broken);
        assert!(store.is_cart_empty());
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let mut store = Store::new(SaveHook::new(|_: &StoreState| {
            Err(CommerceError::CacheError("quota exceeded".to_string()))
        }));

        store.add_to_cart(item(1, 10, 1));
        store.toggle_favorite(favorite(1));

        assert_eq!(store.cart_len(), 1);
        assert_eq!(store.favorites_len(), 1);
        assert_eq!(store.persist_failures(), 2);
        assert!(store.flush().is_err());
    }
}
