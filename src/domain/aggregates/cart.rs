//! Cart Aggregate

use serde::{Deserialize, Serialize};
use crate::domain::aggregates::Product;
use crate::domain::events::{CartEvent, DomainEvent};
use crate::domain::value_objects::{Price, ProductId, Quantity};

/// Ordered cart lines, unique by product id.
///
/// Serializes as a bare JSON array of items. Totals are never stored; every read
/// folds over the lines.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
    events: Vec<DomainEvent>,
}

/// A product snapshot taken when the line was created, plus its quantity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: Quantity,
}

impl CartItem {
    pub fn id(&self) -> ProductId { self.product.id() }
    pub fn line_total(&self) -> Price { self.product.price().multiply(self.quantity) }
}

/// Result of a quantity update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// No line with that id.
    Missing,
    Updated(Quantity),
    Removed,
}

impl Cart {
    pub fn new() -> Self { Self::default() }

    pub fn items(&self) -> &[CartItem] { &self.items }
    pub fn get(&self, id: ProductId) -> Option<&CartItem> { self.items.iter().find(|i| i.id() == id) }
    pub fn line_count(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity.value())).sum()
    }

    pub fn total_price(&self) -> Price {
        self.items.iter().fold(Price::ZERO, |acc, i| acc.add(i.line_total()))
    }

    /// Merge by id: an existing line gains one unit and keeps its first snapshot.
    pub fn add_item(&mut self, product: &Product) -> Quantity {
        let product_id = product.id();
        if let Some(existing) = self.items.iter_mut().find(|i| i.id() == product_id) {
            let from = existing.quantity;
            let to = from.increment();
            existing.quantity = to;
            self.raise_event(DomainEvent::Cart(CartEvent::QuantityChanged { product_id, from, to }));
            return to;
        }
        self.items.push(CartItem { product: product.clone(), quantity: Quantity::ONE });
        self.raise_event(DomainEvent::Cart(CartEvent::ItemAdded { product_id, quantity: Quantity::ONE }));
        Quantity::ONE
    }

    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) -> QuantityUpdate {
        let Some(pos) = self.items.iter().position(|i| i.id() == product_id) else { return QuantityUpdate::Missing };
        let from = self.items[pos].quantity;
        match from.apply_delta(delta) {
            Some(to) => {
                self.items[pos].quantity = to;
                if to != from {
                    self.raise_event(DomainEvent::Cart(CartEvent::QuantityChanged { product_id, from, to }));
                }
                QuantityUpdate::Updated(to)
            }
            None => {
                self.items.remove(pos);
                self.raise_event(DomainEvent::Cart(CartEvent::ItemRemoved { product_id }));
                QuantityUpdate::Removed
            }
        }
    }

    /// Returns whether a line was dropped.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id() != product_id);
        let removed = self.items.len() != before;
        if removed { self.raise_event(DomainEvent::Cart(CartEvent::ItemRemoved { product_id })); }
        removed
    }

    /// Returns the number of lines dropped.
    pub fn clear(&mut self) -> usize {
        let lines = self.items.len();
        self.items.clear();
        self.raise_event(DomainEvent::Cart(CartEvent::Cleared { lines }));
        lines
    }

    pub(crate) fn record_checkout(&mut self) {
        let event = CartEvent::CheckoutStarted { lines: self.line_count(), total: self.total_price() };
        self.raise_event(DomainEvent::Cart(event));
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> { std::mem::take(&mut self.events) }
    fn raise_event(&mut self, e: DomainEvent) { self.events.push(e); }
}

impl PartialEq for Cart {
    fn eq(&self, other: &Self) -> bool { self.items == other.items }
}
impl Eq for Cart {}

impl TryFrom<Vec<CartItem>> for Cart {
    type Error = CartError;
    fn try_from(items: Vec<CartItem>) -> Result<Self, Self::Error> {
        for (idx, item) in items.iter().enumerate() {
            if items[..idx].iter().any(|prev| prev.id() == item.id()) {
                return Err(CartError::DuplicateItem(item.id()));
            }
        }
        Ok(Self { items, events: vec![] })
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self { cart.items }
}

#[derive(Debug, Clone, PartialEq, Eq)] pub enum CartError { DuplicateItem(ProductId) }
impl std::error::Error for CartError {}
impl std::fmt::Display for CartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self { Self::DuplicateItem(id) => write!(f, "Duplicate cart line for product {id}") }
    }
}
