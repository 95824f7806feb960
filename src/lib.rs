//! LM Cycle Storefront
//!
//! Catalog browsing, cart and WhatsApp order handoff for a children's-bicycle shop.
//!
//! ## Features
//! - Product catalog with color-variant families
//! - Cart with merge-by-id semantics and derived totals
//! - Order message and `wa.me` deep link generation
//! - Loyalty points and wishlist
//! - Fail-soft persistence to a local key-value store

use thiserror::Error;

pub mod catalog;
pub mod config;
pub mod domain;
pub mod engine;
pub mod storage;
pub mod storefront;
pub mod telemetry;
pub mod variants;

pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, StorefrontConfig};
pub use domain::aggregates::{generate_order_message, Cart, CartItem, Product, ProductFamily, QuantityUpdate, WhatsAppLink};
pub use domain::value_objects::{Price, ProductId, Quantity};
pub use engine::{CartEngine, ClearCartRequest, LoyaltyCounter, LoyaltyStatus, LoyaltyTier, Wishlist};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use storefront::{AddToCartOutcome, CheckoutError, CheckoutHandoff, Storefront};
pub use variants::VariantSelection;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
