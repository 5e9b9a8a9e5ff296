//! Column/door (advanced) model: input configuration and generated layout.

use super::{DoorStyle, EdgeBanding};
use crate::config::{Material, DEFAULT_SHELF_GAP_CM, DEFAULT_SHELF_HEIGHT_CM};
use serde::{Deserialize, Serialize};

/// A door zone spanning shelves `start_shelf..=end_shelf` of a split column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShelfRange {
    pub start_shelf: usize,
    pub end_shelf: usize,
}

impl ShelfRange {
    pub fn new(start_shelf: usize, end_shelf: usize) -> Self {
        Self {
            start_shelf,
            end_shelf,
        }
    }
}

/// User configuration of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInput {
    pub width_cm: f64,
    pub shelf_count: usize,
    /// Per-shelf compartment height; missing entries fall back to 40 cm.
    #[serde(default)]
    pub shelf_heights: Vec<f64>,
    /// Per-shelf gap above the compartment; missing entries fall back to 2 cm.
    #[serde(default)]
    pub shelf_gaps: Vec<f64>,
    pub door_type: DoorStyle,
    #[serde(default)]
    pub split_door_ranges: Vec<ShelfRange>,
    /// Splitter offsets from the column's left edge (cm).
    #[serde(default)]
    pub vertical_splitters: Vec<f64>,
}

impl Default for ColumnInput {
    fn default() -> Self {
        Self {
            width_cm: 100.0,
            shelf_count: 3,
            shelf_heights: vec![60.0; 3],
            shelf_gaps: vec![2.0; 3],
            door_type: DoorStyle::None,
            split_door_ranges: Vec::new(),
            vertical_splitters: Vec::new(),
        }
    }
}

impl ColumnInput {
    /// Configured or default height of shelf `index` (cm).
    pub fn shelf_height(&self, index: usize) -> f64 {
        self.shelf_heights
            .get(index)
            .copied()
            .unwrap_or(DEFAULT_SHELF_HEIGHT_CM)
    }

    /// Configured or default gap above shelf `index` (cm).
    pub fn shelf_gap(&self, index: usize) -> f64 {
        self.shelf_gaps
            .get(index)
            .copied()
            .unwrap_or(DEFAULT_SHELF_GAP_CM)
    }
}

/// Full input of the column/door model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorInput {
    pub total_width_cm: f64,
    pub total_height_cm: f64,
    pub columns: Vec<ColumnInput>,
    pub door_thickness_mm: f64,
    pub material: Material,
    pub price_per_m2: f64,
    pub band_price_per_m: f64,
}

impl Default for DoorInput {
    fn default() -> Self {
        Self {
            total_width_cm: 300.0,
            total_height_cm: 240.0,
            columns: vec![ColumnInput {
                width_cm: 100.0,
                shelf_count: 4,
                shelf_heights: vec![50.0, 60.0, 50.0, 60.0],
                shelf_gaps: vec![2.0; 4],
                door_type: DoorStyle::Full,
                split_door_ranges: Vec::new(),
                vertical_splitters: Vec::new(),
            }],
            door_thickness_mm: 18.0,
            material: Material::Mdf,
            price_per_m2: 25.0,
            band_price_per_m: 3.5,
        }
    }
}

/// A shelf placed inside a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelf {
    pub id: String,
    /// Bottom of the compartment, cm from the column floor.
    pub position_cm: f64,
    pub height_cm: f64,
    pub gap_cm: f64,
}

/// A full-height divider inside a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalSplitter {
    pub id: String,
    /// Offset from the column's left edge (cm).
    pub position_cm: f64,
    pub height_cm: f64,
    pub thickness_mm: f64,
}

/// A door leaf of the column model (dimensions in cm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorPanel {
    pub id: String,
    pub column_id: String,
    pub start_y_cm: f64,
    pub end_y_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
    pub thickness_mm: f64,
    pub edge_banding: Vec<EdgeBanding>,
}

/// Doors of one style hung on a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorConfiguration {
    pub id: String,
    pub door_type: DoorStyle,
    pub panels: Vec<DoorPanel>,
}

/// A generated column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub index: usize,
    /// Left edge offset from the wardrobe's left side (cm).
    pub x_offset_cm: f64,
    pub width_cm: f64,
    pub total_height_cm: f64,
    pub door_type: DoorStyle,
    pub shelves: Vec<Shelf>,
    pub doors: Vec<DoorConfiguration>,
    pub vertical_splitters: Vec<VerticalSplitter>,
}

impl Column {
    /// Every door leaf across all door configurations, in order.
    pub fn door_panels(&self) -> impl Iterator<Item = &DoorPanel> {
        self.doors.iter().flat_map(|d| d.panels.iter())
    }
}

/// Count of columns by configured door type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DoorTypeCounts {
    pub full: usize,
    pub split: usize,
    pub none: usize,
}

/// Totals over a column/door calculation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DoorSummary {
    pub total_doors: usize,
    pub total_area: f64,
    pub total_cost: f64,
    /// Total banding length in metres.
    pub total_band_length: f64,
    pub columns: usize,
    pub door_types: DoorTypeCounts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shelf_defaults_when_unspecified() {
        let column = ColumnInput {
            shelf_count: 3,
            shelf_heights: vec![30.0],
            shelf_gaps: vec![0.0],
            ..Default::default()
        };
        assert_eq!(column.shelf_height(0), 30.0);
        assert_eq!(column.shelf_height(2), 40.0);
        assert_eq!(column.shelf_gap(0), 0.0); // an explicit zero gap is kept
        assert_eq!(column.shelf_gap(1), 2.0);
    }

    #[test]
    fn test_column_input_serde_defaults() {
        let json = r#"{"width_cm": 80, "shelf_count": 2, "door_type": "split"}"#;
        let column: ColumnInput = serde_json::from_str(json).unwrap();
        assert_eq!(column.door_type, DoorStyle::Split);
        assert!(column.split_door_ranges.is_empty());
        assert!(column.vertical_splitters.is_empty());
    }

    #[test]
    fn test_default_door_input() {
        let input = DoorInput::default();
        assert_eq!(input.columns.len(), 1);
        assert_eq!(input.columns[0].door_type, DoorStyle::Full);
        assert_eq!(input.band_price_per_m, 3.5);
    }
}
