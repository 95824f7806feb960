//! Wishlist: a persisted set of product ids.

use std::sync::Arc;

use crate::domain::value_objects::ProductId;
use crate::storage::{self, KeyValueStore, WISHLIST_KEY};

pub struct Wishlist {
    store: Arc<dyn KeyValueStore>,
    ids: Vec<ProductId>,
}

impl Wishlist {
    /// Load the stored ids; duplicates collapse to their first occurrence.
    pub fn restore(store: Arc<dyn KeyValueStore>) -> Self {
        let stored: Vec<ProductId> = storage::load_json(store.as_ref(), WISHLIST_KEY);
        let mut ids = Vec::with_capacity(stored.len());
        for id in stored {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self { store, ids }
    }

    pub fn ids(&self) -> &[ProductId] { &self.ids }
    pub fn contains(&self, id: ProductId) -> bool { self.ids.contains(&id) }

    /// Flip membership and return whether the product is now wishlisted.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        let added = match self.ids.iter().position(|x| *x == id) {
            Some(pos) => { self.ids.remove(pos); false }
            None => { self.ids.push(id); true }
        };
        storage::save_json(self.store.as_ref(), WISHLIST_KEY, &self.ids);
        added
    }
}
