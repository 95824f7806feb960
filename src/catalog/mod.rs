//! Catalog store
//!
//! Static, fully materialized registry of products, the families that group them,
//! and the size guide. Every lookup is pure; nothing here mutates after construction.

mod data;
pub mod size_guide;

use std::collections::HashSet;
use thiserror::Error;
use validator::Validate;
use crate::domain::aggregates::{Product, ProductFamily};
use crate::domain::value_objects::ProductId;

pub use size_guide::{recommend_size, SizeGuideEntry, SizeRecommendation};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate product id {0}")]
    DuplicateProduct(ProductId),

    #[error("Invalid product {id}: {source}")]
    InvalidProduct { id: ProductId, source: validator::ValidationErrors },

    #[error("Invalid family {family}: {source}")]
    InvalidFamily { family: String, source: validator::ValidationErrors },

    #[error("Family {family} references unknown product {product_id}")]
    UnknownMember { family: String, product_id: ProductId },
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    families: Vec<ProductFamily>,
    size_guide: Vec<SizeGuideEntry>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, families: Vec<ProductFamily>) -> Self {
        Self { products, families, size_guide: vec![] }
    }

    /// The shop's lineup.
    pub fn lmcycle() -> Self {
        Self { products: data::products(), families: data::families(), size_guide: data::size_guide() }
    }

    pub fn products(&self) -> &[Product] { &self.products }
    pub fn families(&self) -> &[ProductFamily] { &self.families }
    pub fn size_guide(&self) -> &[SizeGuideEntry] { &self.size_guide }

    pub fn get_product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn get_family(&self, family_id: &str) -> Option<&ProductFamily> {
        self.families.iter().find(|f| f.id() == family_id)
    }

    /// Members of a family in declared order. Dangling ids are skipped; an unknown
    /// family yields nothing.
    pub fn get_family_products(&self, family_id: &str) -> Vec<&Product> {
        let Some(family) = self.get_family(family_id) else { return vec![] };
        family.product_ids().iter().filter_map(|id| self.get_product_by_id(*id)).collect()
    }

    /// First family listing the product, if any.
    pub fn family_of(&self, id: ProductId) -> Option<&ProductFamily> {
        self.families.iter().find(|f| f.contains(id))
    }

    /// Catalogue grid filter. `family` narrows to a family's members (catalog order)
    /// when it names a known family; a non-blank `query` matches name or aura.
    pub fn filter_products(&self, family: Option<&str>, query: &str) -> Vec<&Product> {
        let family = family.and_then(|id| self.get_family(id));
        let query = query.trim();
        self.products
            .iter()
            .filter(|p| family.map_or(true, |f| f.contains(p.id())))
            .filter(|p| query.is_empty() || p.matches(query))
            .collect()
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for product in &self.products {
            if !seen.insert(product.id()) {
                return Err(CatalogError::DuplicateProduct(product.id()));
            }
            product.validate().map_err(|source| CatalogError::InvalidProduct { id: product.id(), source })?;
        }
        for family in &self.families {
            family.validate().map_err(|source| CatalogError::InvalidFamily { family: family.id().to_string(), source })?;
            if let Some(missing) = family.product_ids().iter().find(|id| !seen.contains(*id)) {
                return Err(CatalogError::UnknownMember { family: family.id().to_string(), product_id: *missing });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(products: &[&Product]) -> Vec<u32> { products.iter().map(|p| p.id().value()).collect() }

    #[test]
    fn test_lineup_is_valid() {
        let catalog = Catalog::lmcycle();
        catalog.validate().unwrap();
        assert_eq!(catalog.products().len(), 18);
        assert_eq!(catalog.families().len(), 5);
        assert_eq!(catalog.size_guide().len(), 6);
    }

    #[test]
    fn test_get_product_by_id() {
        let catalog = Catalog::lmcycle();
        assert_eq!(catalog.get_product_by_id(ProductId::new(1)).map(|p| p.name()), Some("TY BIKE ROUGE"));
        assert!(catalog.get_product_by_id(ProductId::new(999)).is_none());
    }

    #[test]
    fn test_frozen_family_in_declared_order() {
        let catalog = Catalog::lmcycle();
        assert_eq!(ids(&catalog.get_family_products("frozen")), vec![14, 13]);
    }

    #[test]
    fn test_family_resolution_completeness() {
        let catalog = Catalog::lmcycle();
        for family in catalog.families() {
            let members = catalog.get_family_products(family.id());
            assert!(members.len() <= family.product_ids().len());
            let declared: Vec<u32> = family.product_ids().iter().map(|id| id.value()).collect();
            assert_eq!(ids(&members), declared);
            assert!(members.iter().any(|p| p.id() == family.default_product_id()));
        }
    }

    #[test]
    fn test_unknown_family_is_empty() {
        assert!(Catalog::lmcycle().get_family_products("bmx").is_empty());
    }

    #[test]
    fn test_dangling_member_is_skipped_but_invalid() {
        let catalog = Catalog::new(
            vec![Product::new(1, "A", "", 10, ""), Product::new(2, "B", "", 10, "")],
            vec![ProductFamily::new("ab", "AB", "", 1, &[2, 42, 1])],
        );
        assert_eq!(ids(&catalog.get_family_products("ab")), vec![2, 1]);
        assert!(matches!(catalog.validate(), Err(CatalogError::UnknownMember { product_id, .. }) if product_id == ProductId::new(42)));
    }

    #[test]
    fn test_duplicate_product_rejected() {
        let catalog = Catalog::new(vec![Product::new(1, "A", "", 10, ""), Product::new(1, "B", "", 10, "")], vec![]);
        assert!(matches!(catalog.validate(), Err(CatalogError::DuplicateProduct(_))));
    }

    #[test]
    fn test_filter_products() {
        let catalog = Catalog::lmcycle();
        assert_eq!(catalog.filter_products(None, "").len(), 18);
        assert_eq!(ids(&catalog.filter_products(Some("frozen"), "")), vec![14, 13]);
        assert_eq!(ids(&catalog.filter_products(Some("ty-bike"), "rose")), vec![3]);
        assert_eq!(catalog.filter_products(Some("unknown"), "").len(), 18);
        assert_eq!(ids(&catalog.filter_products(None, "vroom")), vec![18, 16, 17, 15]);
    }

    #[test]
    fn test_family_of() {
        let catalog = Catalog::lmcycle();
        assert_eq!(catalog.family_of(ProductId::new(10)).map(|f| f.id()), Some("power-bike"));
    }
}
