//! Panel generation for the simple (single carcass) model.

use crate::config::DOOR_THICKNESS_MM;
use crate::model::{DoorStyle, Panel, PartRole, WardrobeConfig};
use tracing::debug;

/// Build the cut-list panels for `config`, without banding.
///
/// Parts are emitted in a fixed order: sides, top/bottom, shelves, back, doors.
pub fn generate_panels(config: &WardrobeConfig) -> Vec<Panel> {
    let mut parts = Vec::new();
    let panel = |id: &str, name: &str, role: PartRole, width: f64, height: f64, quantity: u32| {
        Panel::new(
            id,
            name,
            role,
            width,
            height,
            config.thickness_mm,
            quantity,
            config.material,
            config.price_per_m2,
        )
    };

    let depth = config.depth_mm();
    let inner_width = config.inner_width_mm();

    parts.push(panel(
        "side-panels",
        "Side Panels",
        PartRole::SidePanel,
        depth,
        config.height_mm(),
        2,
    ));

    parts.push(panel(
        "top-bottom-panels",
        "Top & Bottom Panels",
        PartRole::TopBottom,
        inner_width,
        depth,
        2,
    ));

    if config.shelves > 0 {
        parts.push(panel(
            "shelves",
            "Shelves",
            PartRole::Shelf,
            inner_width,
            depth,
            config.shelves,
        ));
    }

    if config.back_panel {
        parts.push(panel(
            "back-panel",
            "Back Panel",
            PartRole::BackPanel,
            config.width_mm(),
            config.height_mm(),
            1,
        ));
    }

    parts.extend(generate_door_panels(config));

    debug!("Generated {} panel entries", parts.len());
    parts
}

/// Build the door panels for `config`.
///
/// Door sections, when present, replace the whole-front door style.
pub fn generate_door_panels(config: &WardrobeConfig) -> Vec<Panel> {
    if !config.doors {
        return Vec::new();
    }

    if !config.uses_door_sections() {
        let (id, name) = match config.door_style {
            DoorStyle::None => return Vec::new(),
            DoorStyle::Full => ("door-full", "Full Door"),
            DoorStyle::Split => ("doors-split", "Split Doors"),
        };
        return door_panel(config, id.to_string(), name.to_string(), config.door_style, None)
            .into_iter()
            .collect();
    }

    config
        .door_sections
        .iter()
        .enumerate()
        .filter(|(_, section)| section.door_type != DoorStyle::None)
        .filter_map(|(index, section)| {
            door_panel(
                config,
                format!("door-section-{}", index),
                format!("Door Section {} ({})", index + 1, section.door_type),
                section.door_type,
                Some(index),
            )
        })
        .collect()
}

fn door_panel(
    config: &WardrobeConfig,
    id: String,
    name: String,
    style: DoorStyle,
    section: Option<usize>,
) -> Option<Panel> {
    let (width, height) = config.door_leaf_size_mm(style, section)?;
    Some(Panel::new(
        id,
        name,
        PartRole::Door { style, section },
        width,
        height,
        DOOR_THICKNESS_MM,
        style.leaf_count(),
        config.material,
        config.price_per_m2,
    ))
}
