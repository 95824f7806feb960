//! Cart engine: the cart aggregate bound to its storage key.

use std::sync::Arc;

use crate::domain::aggregates::{Cart, Product, QuantityUpdate};
use crate::domain::events::DomainEvent;
use crate::domain::value_objects::{Price, ProductId, Quantity};
use crate::storage::{self, KeyValueStore, CART_KEY};

pub const CLEAR_CART_PROMPT: &str = "Vider le panier ?";

/// Pending clear, handed to the UI so it can ask the user.
///
/// Only [`CartEngine::request_clear`] creates one, and only
/// [`CartEngine::resolve_clear`] with an affirmative answer empties the cart.
#[must_use = "a clear request does nothing until resolved"]
#[derive(Debug, PartialEq, Eq)]
pub struct ClearCartRequest {
    lines: usize,
}

impl ClearCartRequest {
    pub fn prompt(&self) -> &'static str { CLEAR_CART_PROMPT }
    /// Lines in the cart when the request was made.
    pub fn lines(&self) -> usize { self.lines }
}

pub struct CartEngine {
    store: Arc<dyn KeyValueStore>,
    cart: Cart,
    loaded: bool,
}

impl CartEngine {
    /// An engine with an empty, not yet loaded cart. Nothing is written until
    /// [`CartEngine::init`] has run.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store, cart: Cart::new(), loaded: false }
    }

    /// Build and load in one step.
    pub fn restore(store: Arc<dyn KeyValueStore>) -> Self {
        let mut engine = Self::new(store);
        engine.init();
        engine
    }

    /// Read the persisted cart. Missing or unreadable data yields an empty cart.
    pub fn init(&mut self) {
        self.cart = storage::load_json(self.store.as_ref(), CART_KEY);
        self.loaded = true;
        tracing::debug!(lines = self.cart.line_count(), "cart restored");
    }

    pub fn is_loaded(&self) -> bool { self.loaded }
    pub fn cart(&self) -> &Cart { &self.cart }
    pub fn total_items(&self) -> u64 { self.cart.total_items() }
    pub fn total_price(&self) -> Price { self.cart.total_price() }

    pub fn add_to_cart(&mut self, product: &Product) -> Quantity {
        let quantity = self.cart.add_item(product);
        self.flush();
        quantity
    }

    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) -> QuantityUpdate {
        let update = self.cart.update_quantity(product_id, delta);
        if update != QuantityUpdate::Missing {
            self.flush();
        }
        update
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        let removed = self.cart.remove_item(product_id);
        if removed {
            self.flush();
        }
        removed
    }

    /// First step of clearing: nothing changes yet.
    pub fn request_clear(&self) -> ClearCartRequest {
        ClearCartRequest { lines: self.cart.line_count() }
    }

    /// Second step of clearing. Returns whether the cart was emptied.
    pub fn resolve_clear(&mut self, request: ClearCartRequest, confirmed: bool) -> bool {
        if !confirmed {
            tracing::debug!(lines = request.lines, "clear cart declined");
            return false;
        }
        self.cart.clear();
        self.flush();
        true
    }

    pub(crate) fn record_checkout(&mut self) {
        self.cart.record_checkout();
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> { self.cart.take_events() }

    fn flush(&self) {
        if !self.loaded {
            tracing::debug!("cart not loaded yet, skipping write");
            return;
        }
        storage::save_json(self.store.as_ref(), CART_KEY, &self.cart);
    }
}
