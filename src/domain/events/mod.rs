//! Domain events
use crate::domain::value_objects::{Price, ProductId, Quantity};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomainEvent {
    Cart(CartEvent),
    Loyalty(LoyaltyEvent),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartEvent {
    ItemAdded { product_id: ProductId, quantity: Quantity },
    QuantityChanged { product_id: ProductId, from: Quantity, to: Quantity },
    ItemRemoved { product_id: ProductId },
    Cleared { lines: usize },
    CheckoutStarted { lines: usize, total: Price },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoyaltyEvent {
    Awarded { points: u64, total: u64 },
}

impl DomainEvent {
    /// Short name used as the `event` field in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cart(CartEvent::ItemAdded { .. }) => "cart.item_added",
            Self::Cart(CartEvent::QuantityChanged { .. }) => "cart.quantity_changed",
            Self::Cart(CartEvent::ItemRemoved { .. }) => "cart.item_removed",
            Self::Cart(CartEvent::Cleared { .. }) => "cart.cleared",
            Self::Cart(CartEvent::CheckoutStarted { .. }) => "cart.checkout_started",
            Self::Loyalty(LoyaltyEvent::Awarded { .. }) => "loyalty.awarded",
        }
    }
}
