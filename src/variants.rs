//! Variant selection for the product detail view.
//!
//! A selection is a `(family_id, active_product_id)` pair kept by the view. Swapping
//! the active variant never touches the cart and never changes the family.

use crate::catalog::Catalog;
use crate::domain::aggregates::Product;
use crate::domain::value_objects::ProductId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantSelection {
    family_id: String,
    active_product_id: ProductId,
}

impl VariantSelection {
    /// Open the detail view on `product_id` within `family_id`.
    ///
    /// `None` when the product is unknown, so the view renders nothing.
    pub fn open(catalog: &Catalog, product_id: ProductId, family_id: &str) -> Option<Self> {
        catalog.get_product_by_id(product_id)?;
        Some(Self { family_id: family_id.to_string(), active_product_id: product_id })
    }

    /// Open a family on its default variant.
    pub fn open_family(catalog: &Catalog, family_id: &str) -> Option<Self> {
        let family = catalog.get_family(family_id)?;
        Self::open(catalog, family.default_product_id(), family_id)
    }

    /// Open the detail view from a catalogue card. `None` when the product
    /// belongs to no family.
    pub fn for_product(catalog: &Catalog, product_id: ProductId) -> Option<Self> {
        let family = catalog.family_of(product_id)?;
        Self::open(catalog, product_id, family.id())
    }

    pub fn family_id(&self) -> &str { &self.family_id }
    pub fn active_product_id(&self) -> ProductId { self.active_product_id }

    pub fn active_product<'a>(&self, catalog: &'a Catalog) -> Option<&'a Product> {
        catalog.get_product_by_id(self.active_product_id)
    }

    /// Swatches for the family, in declared order.
    pub fn variants<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog.get_family_products(&self.family_id)
    }

    /// Switch to another member of the family. Returns whether it switched.
    pub fn select(&mut self, catalog: &Catalog, product_id: ProductId) -> bool {
        let is_member = self.variants(catalog).iter().any(|p| p.id() == product_id);
        if is_member {
            self.active_product_id = product_id;
        }
        is_member
    }
}
