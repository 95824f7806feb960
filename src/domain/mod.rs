//! Storefront domain: value objects, aggregates and the events they record
pub mod aggregates;
pub mod events;
pub mod value_objects;
