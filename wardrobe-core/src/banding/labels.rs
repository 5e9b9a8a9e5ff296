//! Display labels for banding runs.

use crate::model::{EdgeSide, PartRole};

/// Label for the `side` edge of a part playing `role`.
///
/// Falls back to `"<part name> - <Side> Edge"` for combinations without a
/// dedicated label (door sections among them).
pub fn edge_label(role: PartRole, side: EdgeSide, part_name: &str) -> String {
    match known_label(role, side) {
        Some(label) => label.to_string(),
        None => format!("{} - {} Edge", part_name, side.title()),
    }
}

fn known_label(role: PartRole, side: EdgeSide) -> Option<&'static str> {
    use EdgeSide::*;

    let label = match (role, side) {
        (PartRole::SidePanel, Front) => "Side Panels Front Edge",
        (PartRole::SidePanel, Top) => "Side Panels Top Edge",
        (PartRole::SidePanel, Bottom) => "Side Panels Bottom Edge",
        (PartRole::TopBottom, Front) => "Top & Bottom Panels Front Edge",
        (PartRole::TopBottom, Left) => "Top & Bottom Panels Left Edge",
        (PartRole::TopBottom, Right) => "Top & Bottom Panels Right Edge",
        (PartRole::Shelf, Front) => "Shelves Front Edge",
        (PartRole::Door { section: None, .. } | PartRole::DoorLeaf, side) => match side {
            Front => "Door Panel Front Edge",
            Back => "Door Panel Back Edge",
            Left => "Door Panel Left Edge",
            Right => "Door Panel Right Edge",
            Top => "Door Panel Top Edge",
            Bottom => "Door Panel Bottom Edge",
        },
        _ => return None,
    };
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DoorStyle;

    #[test]
    fn test_known_labels() {
        assert_eq!(
            edge_label(PartRole::SidePanel, EdgeSide::Front, "Side Panels"),
            "Side Panels Front Edge"
        );
        assert_eq!(
            edge_label(PartRole::Shelf, EdgeSide::Front, "Shelves"),
            "Shelves Front Edge"
        );
        let door = PartRole::Door {
            style: DoorStyle::Split,
            section: None,
        };
        assert_eq!(
            edge_label(door, EdgeSide::Left, "Split Doors"),
            "Door Panel Left Edge"
        );
    }

    #[test]
    fn test_fallback_label() {
        assert_eq!(
            edge_label(PartRole::Shelf, EdgeSide::Back, "Shelves"),
            "Shelves - Back Edge"
        );
        let section_door = PartRole::Door {
            style: DoorStyle::Full,
            section: Some(0),
        };
        assert_eq!(
            edge_label(section_door, EdgeSide::Top, "Door Section 1 (full)"),
            "Door Section 1 (full) - Top Edge"
        );
    }
}
