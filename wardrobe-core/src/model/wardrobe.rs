//! Simple-model wardrobe configuration.

use crate::config::{
    units, Material, DEFAULT_SECTION_SPAN_CM, DOOR_CLEARANCE_MM, FULL_DOOR_OVERLAP_MM,
    SPLIT_DOOR_OVERLAP_MM,
};
use serde::{Deserialize, Serialize};

/// How the front of a wardrobe (or a section of it) is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorStyle {
    /// Open front.
    #[default]
    None,
    /// One door across the full width.
    Full,
    /// Two leaves meeting in the middle.
    Split,
}

impl DoorStyle {
    /// Number of leaves cut for this style.
    pub fn leaf_count(&self) -> u32 {
        match self {
            DoorStyle::None => 0,
            DoorStyle::Full => 1,
            DoorStyle::Split => 2,
        }
    }
}

impl std::fmt::Display for DoorStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DoorStyle::None => write!(f, "none"),
            DoorStyle::Full => write!(f, "full"),
            DoorStyle::Split => write!(f, "split"),
        }
    }
}

/// A vertical span of the wardrobe front with its own door style.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DoorSection {
    /// Lower edge, cm from the floor.
    pub start_y_cm: f64,
    /// Upper edge, cm from the floor.
    pub end_y_cm: f64,
    pub door_type: DoorStyle,
}

impl DoorSection {
    pub fn new(start_y_cm: f64, end_y_cm: f64, door_type: DoorStyle) -> Self {
        Self {
            start_y_cm,
            end_y_cm,
            door_type,
        }
    }

    /// Section height in mm.
    pub fn span_mm(&self) -> f64 {
        units::cm_to_mm(self.end_y_cm - self.start_y_cm)
    }

    /// Check whether two sections share any height.
    pub fn overlaps(&self, other: &DoorSection) -> bool {
        self.start_y_cm < other.end_y_cm && other.start_y_cm < self.end_y_cm
    }
}

/// Dimensions, material and pricing of a single-carcass wardrobe.
///
/// Dimensions are in centimetres except the sheet thickness, which is in
/// millimetres like every generated panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardrobeConfig {
    pub width_cm: f64,
    pub height_cm: f64,
    pub depth_cm: f64,
    /// Number of loose shelves.
    pub shelves: u32,
    pub thickness_mm: f64,
    pub material: Material,
    /// Whether a full back panel is cut.
    pub back_panel: bool,
    /// Whether any doors are cut at all.
    pub doors: bool,
    pub door_style: DoorStyle,
    pub price_per_m2: f64,
    /// Edge banding price per metre.
    pub band_price_per_m: f64,
    /// Per-section doors; when non-empty they replace `door_style`.
    #[serde(default)]
    pub door_sections: Vec<DoorSection>,
}

impl Default for WardrobeConfig {
    fn default() -> Self {
        Self {
            width_cm: 120.0,
            height_cm: 220.0,
            depth_cm: 60.0,
            shelves: 3,
            thickness_mm: 18.0,
            material: Material::Mdf,
            back_panel: true,
            doors: false,
            door_style: DoorStyle::None,
            price_per_m2: 25.0,
            band_price_per_m: 2.5,
            door_sections: Vec::new(),
        }
    }
}

impl WardrobeConfig {
    pub fn width_mm(&self) -> f64 {
        units::cm_to_mm(self.width_cm)
    }

    pub fn height_mm(&self) -> f64 {
        units::cm_to_mm(self.height_cm)
    }

    pub fn depth_mm(&self) -> f64 {
        units::cm_to_mm(self.depth_cm)
    }

    /// Width of the panels fitted between the two sides (mm).
    pub fn inner_width_mm(&self) -> f64 {
        self.width_mm() - 2.0 * self.thickness_mm
    }

    /// Switch to `material`, resetting thickness and price to its catalogue values.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self.thickness_mm = material.default_thickness_mm();
        self.price_per_m2 = material.default_price_per_m2();
        self
    }

    /// Enable or disable doors. Disabling also drops the style and all sections.
    pub fn with_doors(mut self, enabled: bool) -> Self {
        self.doors = enabled;
        if !enabled {
            self.door_style = DoorStyle::None;
            self.door_sections.clear();
        }
        self
    }

    /// Propose the section following the last configured one.
    pub fn next_door_section(&self) -> DoorSection {
        let start = self
            .door_sections
            .last()
            .map(|s| s.end_y_cm)
            .unwrap_or(0.0);
        let end = (start + DEFAULT_SECTION_SPAN_CM).min(self.height_cm);
        DoorSection::new(start, end, DoorStyle::None)
    }

    /// Check whether per-section doors are in effect.
    pub fn uses_door_sections(&self) -> bool {
        !self.door_sections.is_empty()
    }

    /// Cut size (width, height) in mm of one leaf of a `style` door.
    ///
    /// With `section` the leaf spans that door section; otherwise it spans the
    /// full height less the bottom clearance. `None` for open fronts and for
    /// section indices that do not exist.
    pub fn door_leaf_size_mm(&self, style: DoorStyle, section: Option<usize>) -> Option<(f64, f64)> {
        let width = match style {
            DoorStyle::None => return None,
            DoorStyle::Full => self.width_mm() + FULL_DOOR_OVERLAP_MM,
            DoorStyle::Split => self.width_mm() / 2.0 + SPLIT_DOOR_OVERLAP_MM,
        };
        let height = match section {
            Some(idx) => self.door_sections.get(idx)?.span_mm(),
            None => self.height_mm() - DOOR_CLEARANCE_MM,
        };
        Some((width, height))
    }
}
