//! Panel definition representing a single rectangular cut-list entry.

use super::DoorStyle;
use crate::config::{units, Material};
use serde::{Deserialize, Serialize};

/// Structural role of a panel in the carcass; banding rules key on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartRole {
    SidePanel,
    TopBottom,
    Shelf,
    BackPanel,
    /// A door or door pair. `section` indexes `WardrobeConfig::door_sections`
    /// when the door belongs to a section rather than the whole front.
    Door {
        style: DoorStyle,
        section: Option<usize>,
    },
    /// One leaf of a column-model door.
    DoorLeaf,
}

/// Edge of a panel, as seen when it is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeSide {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl EdgeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeSide::Front => "front",
            EdgeSide::Back => "back",
            EdgeSide::Left => "left",
            EdgeSide::Right => "right",
            EdgeSide::Top => "top",
            EdgeSide::Bottom => "bottom",
        }
    }

    /// Capitalised name, e.g. `Front`.
    pub fn title(&self) -> &'static str {
        match self {
            EdgeSide::Front => "Front",
            EdgeSide::Back => "Back",
            EdgeSide::Left => "Left",
            EdgeSide::Right => "Right",
            EdgeSide::Top => "Top",
            EdgeSide::Bottom => "Bottom",
        }
    }
}

impl std::fmt::Display for EdgeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One banded edge run: `quantity` identical edges of `length_mm`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeBanding {
    pub side: EdgeSide,
    pub length_mm: f64,
    pub quantity: u32,
}

impl EdgeBanding {
    pub fn new(side: EdgeSide, length_mm: f64, quantity: u32) -> Self {
        Self {
            side,
            length_mm,
            quantity,
        }
    }

    /// Total strip length for this run in metres.
    pub fn total_m(&self) -> f64 {
        units::mm_to_m(self.length_mm) * f64::from(self.quantity)
    }
}

/// A rectangular CNC-cut piece, possibly repeated `quantity` times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Stable identifier, e.g. `side-panels`.
    pub id: String,
    /// Display name, also used as DXF layer.
    pub name: String,
    pub role: PartRole,
    pub width_mm: f64,
    pub height_mm: f64,
    pub thickness_mm: f64,
    pub quantity: u32,
    pub material: Material,
    /// Area of all instances in m².
    pub area_m2: f64,
    /// Material cost, plus banding cost once banding is attached.
    pub cost: f64,
    pub edge_banding: Vec<EdgeBanding>,
}

impl Panel {
    /// Create a panel and price its material at `price_per_m2`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: PartRole,
        width_mm: f64,
        height_mm: f64,
        thickness_mm: f64,
        quantity: u32,
        material: Material,
        price_per_m2: f64,
    ) -> Self {
        let area_m2 = units::area_m2(width_mm, height_mm, quantity);
        Self {
            id: id.into(),
            name: name.into(),
            role,
            width_mm,
            height_mm,
            thickness_mm,
            quantity,
            material,
            area_m2,
            cost: area_m2 * price_per_m2,
            edge_banding: Vec::new(),
        }
    }

    /// Total banding strip length on this panel in metres.
    pub fn banding_length_m(&self) -> f64 {
        self.edge_banding.iter().map(EdgeBanding::total_m).sum()
    }

    /// Attach banding and add its cost at `band_price_per_m`.
    pub fn with_banding(mut self, edges: Vec<EdgeBanding>, band_price_per_m: f64) -> Self {
        self.edge_banding = edges;
        self.cost += self.banding_length_m() * band_price_per_m;
        self
    }

    /// Banded sides in rule order.
    pub fn banded_sides(&self) -> Vec<EdgeSide> {
        self.edge_banding.iter().map(|e| e.side).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;

    fn shelf() -> Panel {
        Panel::new(
            "shelves",
            "Shelves",
            PartRole::Shelf,
            1164.0,
            600.0,
            18.0,
            3,
            Material::Mdf,
            25.0,
        )
    }

    #[test]
    fn test_panel_area_counts_quantity() {
        let panel = shelf();
        assert!(approx_eq(panel.area_m2, 1.164 * 0.6 * 3.0));
        assert!(approx_eq(panel.cost, panel.area_m2 * 25.0));
        assert!(panel.edge_banding.is_empty());
    }

    #[test]
    fn test_with_banding_adds_cost() {
        let panel = shelf();
        let material_cost = panel.cost;
        let banded = panel.with_banding(vec![EdgeBanding::new(EdgeSide::Front, 1164.0, 3)], 2.5);
        assert!(approx_eq(banded.banding_length_m(), 3.492));
        assert!(approx_eq(banded.cost, material_cost + 3.492 * 2.5));
        assert_eq!(banded.banded_sides(), vec![EdgeSide::Front]);
    }

    #[test]
    fn test_edge_side_names() {
        assert_eq!(EdgeSide::Front.to_string(), "front");
        assert_eq!(EdgeSide::Bottom.title(), "Bottom");
    }

    #[test]
    fn test_part_role_wire_names() {
        let role = PartRole::Door {
            style: DoorStyle::Full,
            section: None,
        };
        assert_eq!(
            serde_json::to_string(&role).unwrap(),
            r#"{"door":{"style":"full","section":null}}"#
        );
        assert_eq!(
            serde_json::to_string(&PartRole::DoorLeaf).unwrap(),
            "\"door_leaf\""
        );
    }
}
