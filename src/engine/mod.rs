//! Stateful engines, each bound to one storage key.
pub mod cart;
pub mod loyalty;
pub mod wishlist;

pub use cart::{CartEngine, ClearCartRequest, CLEAR_CART_PROMPT};
pub use loyalty::{LoyaltyCounter, LoyaltyStatus, LoyaltyTier, ADD_TO_CART_POINTS, CHECKOUT_POINTS_PER_LINE};
pub use wishlist::Wishlist;
