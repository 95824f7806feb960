//! Value Objects for the storefront

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency suffix used on every price shown to the customer.
pub const CURRENCY: &str = "TND";

/// Catalog identity of a product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    pub const fn new(value: u32) -> Self { Self(value) }
    pub fn value(&self) -> u32 { self.0 }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Price value object, whole dinars.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn new(amount: u64) -> Self { Self(amount) }
    pub fn amount(&self) -> u64 { self.0 }
    pub fn add(&self, other: Price) -> Price { Price(self.0.saturating_add(other.0)) }
    pub fn multiply(&self, qty: Quantity) -> Price { Price(self.0.saturating_mul(u64::from(qty.value()))) }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{} {}", self.0, CURRENCY) }
}

/// Quantity of a cart line. Never zero: a line that would drop to zero leaves the cart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    pub fn new(value: u32) -> Result<Self, QuantityError> {
        if value == 0 { return Err(QuantityError::Zero); }
        Ok(Self(value))
    }
    pub fn value(&self) -> u32 { self.0 }
    pub fn increment(&self) -> Self { Self(self.0.saturating_add(1)) }

    /// Shift by a signed delta. `None` when the result is zero or negative.
    pub fn apply_delta(&self, delta: i64) -> Option<Self> {
        let next = i64::from(self.0).saturating_add(delta);
        if next <= 0 { return None; }
        Some(Self(u32::try_from(next).unwrap_or(u32::MAX)))
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;
    fn try_from(value: u32) -> Result<Self, Self::Error> { Self::new(value) }
}

impl From<Quantity> for u32 {
    fn from(qty: Quantity) -> u32 { qty.0 }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

#[derive(Debug, Clone, PartialEq, Eq)] pub enum QuantityError { Zero }
impl std::error::Error for QuantityError {}
impl fmt::Display for QuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Quantity must be at least 1") }
}
