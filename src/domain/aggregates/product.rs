//! Product and ProductFamily Aggregates

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::{Validate, ValidationError};
use crate::domain::value_objects::{Price, ProductId};

/// A catalog product. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Product {
    id: ProductId,
    #[validate(length(min = 1))]
    name: String,
    aura: String,
    specs: BTreeMap<String, String>,
    price: Price,
    image: String,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, aura: impl Into<String>, price: u64, image: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(id), name: name.into(), aura: aura.into(),
            specs: BTreeMap::new(), price: Price::new(price), image: image.into(),
        }
    }

    pub fn with_spec(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.specs.insert(label.into(), value.into());
        self
    }

    pub fn id(&self) -> ProductId { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn aura(&self) -> &str { &self.aura }
    pub fn specs(&self) -> &BTreeMap<String, String> { &self.specs }
    pub fn price(&self) -> Price { self.price }
    pub fn image(&self) -> &str { &self.image }

    /// Case-insensitive substring match on name or aura.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.aura.to_lowercase().contains(&query)
    }
}

/// A group of color/size variants of the same model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "default_is_member"))]
pub struct ProductFamily {
    #[validate(length(min = 1))]
    id: String,
    #[validate(length(min = 1))]
    name: String,
    description: String,
    default_product_id: ProductId,
    #[validate(length(min = 1))]
    product_ids: Vec<ProductId>,
}

impl ProductFamily {
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>, default_product_id: u32, product_ids: &[u32]) -> Self {
        Self {
            id: id.into(), name: name.into(), description: description.into(),
            default_product_id: ProductId::new(default_product_id),
            product_ids: product_ids.iter().copied().map(ProductId::new).collect(),
        }
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn description(&self) -> &str { &self.description }
    pub fn default_product_id(&self) -> ProductId { self.default_product_id }
    pub fn product_ids(&self) -> &[ProductId] { &self.product_ids }
    pub fn contains(&self, id: ProductId) -> bool { self.product_ids.contains(&id) }
}

fn default_is_member(family: &ProductFamily) -> Result<(), ValidationError> {
    if family.contains(family.default_product_id) { return Ok(()); }
    let mut err = ValidationError::new("default_not_member");
    err.add_param("default_product_id".into(), &family.default_product_id.value());
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_product_create() {
        let p = Product::new(1, "TY BIKE ROUGE", "Sportive", 99, "./images/1.jpeg").with_spec("taille", "12/16/20");
        assert_eq!(p.name(), "TY BIKE ROUGE");
        assert_eq!(p.price(), Price::new(99));
        assert_eq!(p.specs().get("taille").map(String::as_str), Some("12/16/20"));
    }
    #[test]
    fn test_product_matches() {
        let p = Product::new(14, "FROZEN ROSE", "Le rythme de l'aventure", 99, "");
        assert!(p.matches("frozen"));
        assert!(p.matches("AVENTURE"));
        assert!(!p.matches("moto"));
    }
    #[test]
    fn test_product_json_shape() {
        let p = Product::new(7, "POWER BIKE ROSE", "Puissante", 99, "./images/7.jpeg").with_spec("taille", "20");
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json, serde_json::json!({
            "id": 7, "name": "POWER BIKE ROSE", "aura": "Puissante",
            "specs": {"taille": "20"}, "price": 99, "image": "./images/7.jpeg"
        }));
    }
    #[test]
    fn test_family_validation() {
        assert!(ProductFamily::new("ty-bike", "TY BIKE", "", 1, &[1, 2, 3]).validate().is_ok());
        assert!(ProductFamily::new("ty-bike", "TY BIKE", "", 9, &[1, 2, 3]).validate().is_err());
        assert!(ProductFamily::new("empty", "EMPTY", "", 1, &[]).validate().is_err());
    }
}
