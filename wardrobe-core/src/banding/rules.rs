//! Fixed edge-banding policy.
//!
//! Only edges that stay visible once the carcass is assembled are banded:
//! - side panels: front edge, plus top and bottom edges
//! - top/bottom panels: front, left and right edges
//! - shelves: front edge only
//! - back panel: nothing
//! - doors: all four edges

use crate::model::{EdgeBanding, EdgeSide, Panel, PartRole, WardrobeConfig};

/// Banded edges of the part playing `role` in the wardrobe `config`.
///
/// Column-model leaves are sized by their column, not by a
/// [`WardrobeConfig`]; band those with [`door_edges`] when they are built.
pub fn edges_for(role: PartRole, config: &WardrobeConfig) -> Vec<EdgeBanding> {
    match role {
        PartRole::SidePanel => vec![
            EdgeBanding::new(EdgeSide::Front, config.height_mm(), 2),
            EdgeBanding::new(EdgeSide::Top, config.depth_mm(), 2),
            EdgeBanding::new(EdgeSide::Bottom, config.depth_mm(), 2),
        ],
        PartRole::TopBottom => vec![
            EdgeBanding::new(EdgeSide::Front, config.inner_width_mm(), 2),
            EdgeBanding::new(EdgeSide::Left, config.depth_mm(), 2),
            EdgeBanding::new(EdgeSide::Right, config.depth_mm(), 2),
        ],
        PartRole::Shelf => vec![EdgeBanding::new(
            EdgeSide::Front,
            config.inner_width_mm(),
            config.shelves,
        )],
        PartRole::BackPanel => Vec::new(),
        PartRole::Door { style, section } => config
            .door_leaf_size_mm(style, section)
            .map(|(width, height)| door_edges(width, height, style.leaf_count()))
            .unwrap_or_default(),
        PartRole::DoorLeaf => Vec::new(),
    }
}

/// Four-edge banding of `quantity` door leaves of `width_mm` × `height_mm`.
pub fn door_edges(width_mm: f64, height_mm: f64, quantity: u32) -> Vec<EdgeBanding> {
    vec![
        EdgeBanding::new(EdgeSide::Top, width_mm, quantity),
        EdgeBanding::new(EdgeSide::Bottom, width_mm, quantity),
        EdgeBanding::new(EdgeSide::Left, height_mm, quantity),
        EdgeBanding::new(EdgeSide::Right, height_mm, quantity),
    ]
}

/// Attach banding to every part and fold its cost into the part cost.
///
/// Column-model leaves already carry their banding and its cost from
/// [`to_cnc_parts`](crate::generator::to_cnc_parts) and pass through unchanged.
pub fn annotate(parts: Vec<Panel>, config: &WardrobeConfig) -> Vec<Panel> {
    parts
        .into_iter()
        .map(|part| match part.role {
            PartRole::DoorLeaf => part,
            role => {
                let edges = edges_for(role, config);
                part.with_banding(edges, config.band_price_per_m)
            }
        })
        .collect()
}
