//! Storefront session: one owned handle over the catalog, the cart, loyalty and the
//! wishlist, all sharing a single store. The UI holds this and passes it down.

use std::sync::Arc;

use thiserror::Error;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::domain::aggregates::{generate_order_message, product_inquiry_message, Cart, Product, QuantityUpdate, WhatsAppLink};
use crate::domain::events::{DomainEvent, LoyaltyEvent};
use crate::domain::value_objects::{ProductId, Quantity};
use crate::engine::{CartEngine, ClearCartRequest, LoyaltyCounter, LoyaltyStatus, Wishlist, ADD_TO_CART_POINTS, CHECKOUT_POINTS_PER_LINE};
use crate::storage::KeyValueStore;
use crate::variants::VariantSelection;
use crate::Result;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Votre panier est vide")]
    EmptyCart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddToCartOutcome {
    pub product_id: ProductId,
    pub quantity: Quantity,
    pub points_awarded: u64,
    pub points_total: u64,
    /// The cart was empty before this add.
    pub first_item: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutHandoff {
    pub link: WhatsAppLink,
    pub bonus_points: u64,
    pub points_total: u64,
}

pub struct Storefront {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: CartEngine,
    loyalty: LoyaltyCounter,
    wishlist: Wishlist,
}

impl Storefront {
    /// Restore every engine from `store` and check the catalog.
    pub fn open(config: StorefrontConfig, catalog: Catalog, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        config.validate()?;
        catalog.validate()?;
        let cart = CartEngine::restore(store.clone());
        let loyalty = LoyaltyCounter::restore(store.clone());
        let wishlist = Wishlist::restore(store);
        tracing::info!(
            lines = cart.cart().line_count(),
            points = loyalty.points(),
            wishlist = wishlist.ids().len(),
            "storefront session opened"
        );
        Ok(Self { config, catalog, cart, loyalty, wishlist })
    }

    /// The LM Cycle lineup on the store the configuration points at.
    pub fn from_config(config: StorefrontConfig) -> Result<Self> {
        let store = config.open_store()?;
        Self::open(config, Catalog::lmcycle(), store)
    }

    pub fn config(&self) -> &StorefrontConfig { &self.config }
    pub fn catalog(&self) -> &Catalog { &self.catalog }
    pub fn cart(&self) -> &Cart { self.cart.cart() }
    pub fn total_items(&self) -> u64 { self.cart.total_items() }
    pub fn loyalty(&self) -> LoyaltyStatus { self.loyalty.status() }
    pub fn wishlist(&self) -> &[ProductId] { self.wishlist.ids() }

    pub fn add_to_cart(&mut self, product: &Product) -> AddToCartOutcome {
        let first_item = self.cart.cart().is_empty();
        let quantity = self.cart.add_to_cart(product);
        let points_total = self.award(ADD_TO_CART_POINTS);
        self.drain_events();
        AddToCartOutcome { product_id: product.id(), quantity, points_awarded: ADD_TO_CART_POINTS, points_total, first_item }
    }

    /// Add whichever variant the detail view currently shows.
    pub fn add_selected_to_cart(&mut self, selection: &VariantSelection) -> Option<AddToCartOutcome> {
        let product = selection.active_product(&self.catalog)?.clone();
        Some(self.add_to_cart(&product))
    }

    pub fn add_product_by_id(&mut self, id: ProductId) -> Option<AddToCartOutcome> {
        let product = self.catalog.get_product_by_id(id)?.clone();
        Some(self.add_to_cart(&product))
    }

    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) -> QuantityUpdate {
        let update = self.cart.update_quantity(product_id, delta);
        self.drain_events();
        update
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        let removed = self.cart.remove_from_cart(product_id);
        self.drain_events();
        removed
    }

    pub fn request_clear(&self) -> ClearCartRequest { self.cart.request_clear() }

    pub fn resolve_clear(&mut self, request: ClearCartRequest, confirmed: bool) -> bool {
        let cleared = self.cart.resolve_clear(request, confirmed);
        self.drain_events();
        cleared
    }

    /// Build the WhatsApp order handoff and award the checkout bonus.
    ///
    /// The bonus is per distinct cart line, not per unit. The cart is left as is;
    /// delivery of the message is up to the messaging app.
    pub fn checkout(&mut self, note: Option<&str>) -> std::result::Result<CheckoutHandoff, CheckoutError> {
        let lines = self.cart.cart().line_count();
        if lines == 0 {
            tracing::info!("checkout rejected: cart is empty");
            return Err(CheckoutError::EmptyCart);
        }
        let bonus_points = CHECKOUT_POINTS_PER_LINE.saturating_mul(lines as u64);
        let points_total = self.award(bonus_points);
        self.cart.record_checkout();
        self.drain_events();

        let message = generate_order_message(self.cart.cart(), note);
        let link = self.link(message);
        Ok(CheckoutHandoff { link, bonus_points, points_total })
    }

    /// Deep link asking about a single product.
    pub fn inquiry_link(&self, product: &Product) -> WhatsAppLink {
        self.link(product_inquiry_message(product))
    }

    pub fn toggle_wishlist(&mut self, id: ProductId) -> bool {
        let added = self.wishlist.toggle(id);
        tracing::debug!(product_id = %id, added, "wishlist toggled");
        added
    }

    fn link(&self, text: String) -> WhatsAppLink {
        WhatsAppLink::new(&self.config.whatsapp_base_url, &self.config.whatsapp_number, text)
    }

    fn award(&mut self, points: u64) -> u64 {
        let total = self.loyalty.award(points);
        log_event(&DomainEvent::Loyalty(LoyaltyEvent::Awarded { points, total }));
        total
    }

    fn drain_events(&mut self) {
        for event in self.cart.take_events() {
            log_event(&event);
        }
    }
}

fn log_event(event: &DomainEvent) {
    tracing::debug!(event = event.name(), detail = ?event, "domain event");
}
