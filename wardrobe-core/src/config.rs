//! Manufacturing constants, material catalogue and numeric helpers.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Centimetres to millimetres.
pub const MM_PER_CM: f64 = 10.0;

/// Millimetres per metre (lengths and areas are reported in m / m²).
pub const MM_PER_M: f64 = 1000.0;

/// Overlap added to a full-width door (mm).
pub const FULL_DOOR_OVERLAP_MM: f64 = 4.0;

/// Overlap added to each leaf of a split door (mm).
pub const SPLIT_DOOR_OVERLAP_MM: f64 = 2.0;

/// Clearance left below a full-height door (mm).
pub const DOOR_CLEARANCE_MM: f64 = 20.0;

/// Door panels are always cut from this thickness (mm).
pub const DOOR_THICKNESS_MM: f64 = 18.0;

/// Smallest panel edge that can still be cut (mm).
pub const MIN_PANEL_SIZE_MM: f64 = 50.0;

/// Overlap added to column door leaves (cm).
pub const COLUMN_DOOR_OVERLAP_CM: f64 = 0.4;

/// Shelf height used when a column does not specify one (cm).
pub const DEFAULT_SHELF_HEIGHT_CM: f64 = 40.0;

/// Shelf gap used when a column does not specify one (cm).
pub const DEFAULT_SHELF_GAP_CM: f64 = 2.0;

/// Vertical splitters are cut from this thickness (mm).
pub const SPLITTER_THICKNESS_MM: f64 = 18.0;

/// Allowed mismatch between the column widths and the wardrobe width (cm).
pub const COLUMN_WIDTH_TOLERANCE_CM: f64 = 0.1;

/// Vertical gap between consecutive parts in the DXF export.
pub const DXF_PART_SPACING: f64 = 50.0;

/// Span proposed for a newly added door section (cm).
pub const DEFAULT_SECTION_SPAN_CM: f64 = 50.0;

/// Minimum buildable width under strict validation (cm).
pub const STRICT_MIN_WIDTH_CM: f64 = 50.0;

/// Minimum buildable height under strict validation (cm).
pub const STRICT_MIN_HEIGHT_CM: f64 = 180.0;

/// Minimum buildable depth under strict validation (cm).
pub const STRICT_MIN_DEPTH_CM: f64 = 40.0;

/// Sheet material a wardrobe is cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Material {
    #[default]
    #[serde(rename = "MDF")]
    Mdf,
    #[serde(rename = "Plywood")]
    Plywood,
}

impl Material {
    /// Every material in the catalogue.
    pub const ALL: [Material; 2] = [Material::Mdf, Material::Plywood];

    /// Sheet thicknesses stocked for this material (mm).
    pub fn allowed_thicknesses(&self) -> &'static [f64] {
        match self {
            Material::Mdf | Material::Plywood => &[16.0, 18.0, 22.0],
        }
    }

    /// Thickness selected when the material is picked (mm).
    pub fn default_thickness_mm(&self) -> f64 {
        18.0
    }

    /// Catalogue price per square metre.
    pub fn default_price_per_m2(&self) -> f64 {
        match self {
            Material::Mdf => 150.0,
            Material::Plywood => 200.0,
        }
    }

    /// Check whether a sheet of `thickness_mm` is stocked.
    pub fn allows_thickness(&self, thickness_mm: f64) -> bool {
        self.allowed_thicknesses()
            .iter()
            .any(|&t| float_cmp::approx_eq(t, thickness_mm))
    }

    /// Parse a material from its catalogue name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mdf" => Some(Material::Mdf),
            "plywood" => Some(Material::Plywood),
            _ => None,
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Material::Mdf => write!(f, "MDF"),
            Material::Plywood => write!(f, "Plywood"),
        }
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }
}

/// Unit conversions used throughout the generators.
pub mod units {
    use super::{MM_PER_CM, MM_PER_M};

    #[inline]
    pub fn cm_to_mm(cm: f64) -> f64 {
        cm * MM_PER_CM
    }

    #[inline]
    pub fn mm_to_m(mm: f64) -> f64 {
        mm / MM_PER_M
    }

    /// Area in m² of `quantity` rectangles of `width_mm` × `height_mm`.
    #[inline]
    pub fn area_m2(width_mm: f64, height_mm: f64, quantity: u32) -> f64 {
        mm_to_m(width_mm) * mm_to_m(height_mm) * f64::from(quantity)
    }
}
