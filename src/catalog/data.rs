//! The LM Cycle lineup.

use crate::catalog::size_guide::SizeGuideEntry;
use crate::domain::aggregates::{Product, ProductFamily};

const SIZES_12_16: &str = "Disponible en 12/16 pouces";
const SIZES_12_16_20: &str = "Disponible en 12/16/20 pouces";

fn bike(id: u32, name: &str, aura: &str, sizes: &str) -> Product {
    Product::new(id, name, aura, 99, format!("./images/{id}.jpeg")).with_spec("taille", sizes)
}

/// Catalog order, as shown in the "all" grid.
pub(crate) fn products() -> Vec<Product> {
    vec![
        bike(18, "MOTO V1 ROUGE", "VROOM VROOM", SIZES_12_16),
        bike(16, "MOTO V2 VERT", "VROOM VROOM", SIZES_12_16),
        bike(17, "MOTO V3 ROUGE", "VROOM VROOM", SIZES_12_16),
        bike(15, "MOTO V4 ROUGE", "VROOM VROOM", "Disponible en 16 pouces"),
        bike(4, "JEXICA ROUGE", "Sportive", SIZES_12_16_20),
        bike(5, "JEXICA ORANGE", "Sportive", SIZES_12_16_20),
        bike(6, "JEXICA VERT", "Sportive", SIZES_12_16_20),
        bike(8, "JEXICA BLEU", "Sportive", SIZES_12_16_20),
        bike(7, "POWER BIKE ROSE", "Puissante", SIZES_12_16_20),
        bike(9, "POWER BIKE ROUGE", "Puissante", SIZES_12_16_20),
        bike(10, "POWER BIKE BLEU", "Puissante", SIZES_12_16_20),
        bike(11, "POWER BIKE JAUNE", "Puissante", SIZES_12_16_20),
        bike(12, "POWER BIKE ORANGE", "Puissante", SIZES_12_16_20),
        bike(1, "TY BIKE ROUGE", "Sportive", SIZES_12_16_20),
        bike(2, "TY BIKE BLEU", "Sportive", SIZES_12_16_20),
        bike(3, "TY BIKE ROSE", "Sportive", SIZES_12_16_20),
        bike(14, "FROZEN ROSE", "Le rythme de l'aventure", SIZES_12_16_20),
        bike(13, "Frozen V2 ROSE", "Élégance féerique.", SIZES_12_16),
    ]
}

pub(crate) fn families() -> Vec<ProductFamily> {
    vec![
        ProductFamily::new("moto-bike", "MOTO BIKE", "Collection dynamique pour l'aventure.", 18, &[18, 16, 17, 15]),
        ProductFamily::new("jexica", "JEXICA", "Vélos sportifs aux couleurs vives.", 4, &[4, 5, 6, 8]),
        ProductFamily::new("power-bike", "POWER BIKE", "Style et performance réunis.", 7, &[7, 9, 10, 11, 12]),
        ProductFamily::new("ty-bike", "TY BIKE", "Légers et maniables pour débuter.", 1, &[1, 2, 3]),
        ProductFamily::new("frozen", "FROZEN", "L'univers enchanté pour les petits.", 14, &[14, 13]),
    ]
}

pub(crate) fn size_guide() -> Vec<SizeGuideEntry> {
    [
        ("2-4 ans", "85-100 cm", "12\""),
        ("3-5 ans", "95-110 cm", "14\""),
        ("4-6 ans", "105-120 cm", "16\""),
        ("5-8 ans", "115-135 cm", "20\""),
        ("7-10 ans", "130-150 cm", "24\""),
        ("9+ ans", "145+ cm", "26\""),
    ]
    .into_iter()
    .map(|(age, height, size)| SizeGuideEntry { age: age.into(), height: height.into(), size: size.into() })
    .collect()
}
