//! Built-in wardrobe presets.

use crate::config::Material;
use crate::error::{CutlistError, Result};
use crate::model::{DoorStyle, WardrobeConfig};
use serde::Serialize;

/// A named starting configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WardrobePreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub config: WardrobeConfig,
}

fn preset_config(
    width_cm: f64,
    height_cm: f64,
    depth_cm: f64,
    shelves: u32,
    material: Material,
    thickness_mm: f64,
) -> WardrobeConfig {
    WardrobeConfig {
        width_cm,
        height_cm,
        depth_cm,
        shelves,
        thickness_mm,
        material,
        back_panel: true,
        doors: false,
        door_style: DoorStyle::None,
        price_per_m2: material.default_price_per_m2(),
        band_price_per_m: 2.5,
        door_sections: Vec::new(),
    }
}

/// All built-in presets, smallest first.
pub fn wardrobe_presets() -> Vec<WardrobePreset> {
    vec![
        WardrobePreset {
            id: "small",
            name: "Small Wardrobe",
            description: "Compact single wardrobe for small bedrooms",
            config: preset_config(300.0, 500.0, 300.0, 2, Material::Mdf, 16.0),
        },
        WardrobePreset {
            id: "medium",
            name: "Medium Wardrobe",
            description: "Standard wardrobe with extra shelving",
            config: preset_config(350.0, 550.0, 350.0, 3, Material::Mdf, 18.0),
        },
        WardrobePreset {
            id: "large",
            name: "Large Wardrobe",
            description: "Spacious plywood wardrobe",
            config: preset_config(400.0, 600.0, 400.0, 4, Material::Plywood, 18.0),
        },
        WardrobePreset {
            id: "walkin",
            name: "Walk-in Wardrobe",
            description: "Room-sized storage unit",
            config: preset_config(500.0, 700.0, 500.0, 5, Material::Plywood, 18.0),
        },
    ]
}

/// Look up a preset by id (case-insensitive).
pub fn find_preset(id: &str) -> Result<WardrobePreset> {
    wardrobe_presets()
        .into_iter()
        .find(|p| p.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| CutlistError::UnknownPreset {
            name: id.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_wardrobe_strict;

    #[test]
    fn test_presets_are_valid() {
        for preset in wardrobe_presets() {
            let result = validate_wardrobe_strict(&preset.config);
            assert!(result.passed, "{} failed: {:?}", preset.id, result.errors);
        }
    }

    #[test]
    fn test_find_preset() {
        let large = find_preset("LARGE").unwrap();
        assert_eq!(large.config.material, Material::Plywood);
        assert_eq!(large.config.shelves, 4);
        assert_eq!(large.config.price_per_m2, 200.0);

        let small = find_preset("small").unwrap();
        assert_eq!(small.config.thickness_mm, 16.0);
        assert_eq!(small.config.price_per_m2, 150.0);
    }

    #[test]
    fn test_unknown_preset() {
        let err = find_preset("tiny").unwrap_err();
        assert!(matches!(err, CutlistError::UnknownPreset { ref name } if name == "tiny"));
    }
}
