//! Aggregates module
pub mod product;
pub mod order;
pub mod cart;

pub use product::{Product, ProductFamily};
pub use order::{generate_order_message, product_inquiry_message, WhatsAppLink};
pub use cart::{Cart, CartError, CartItem, QuantityUpdate};
