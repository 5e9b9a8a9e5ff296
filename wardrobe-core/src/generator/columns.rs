//! Column/door generation for segmented wardrobes.
//!
//! Each column stacks its shelves bottom-up and hangs either one full door
//! over the whole shelf stack or pairs of split leaves over shelf ranges.

use crate::banding::door_edges;
use crate::config::{units, Material, COLUMN_DOOR_OVERLAP_CM, SPLITTER_THICKNESS_MM};
use crate::model::{
    Column, ColumnInput, DoorConfiguration, DoorInput, DoorPanel, DoorStyle, DoorSummary,
    DoorTypeCounts, Panel, PartRole, Shelf, ShelfRange, VerticalSplitter,
};
use tracing::debug;

/// Lay out every column of `input`, left to right.
pub fn generate_columns(input: &DoorInput) -> Vec<Column> {
    let mut columns = Vec::with_capacity(input.columns.len());
    let mut x_offset = 0.0;

    for (index, column_input) in input.columns.iter().enumerate() {
        columns.push(create_column(
            column_input,
            index,
            x_offset,
            input.total_height_cm,
            input.door_thickness_mm,
        ));
        x_offset += column_input.width_cm;
    }

    debug!("Generated {} column(s)", columns.len());
    columns
}

fn create_column(
    input: &ColumnInput,
    index: usize,
    x_offset_cm: f64,
    total_height_cm: f64,
    door_thickness_mm: f64,
) -> Column {
    let id = format!("column-{}", index + 1);
    let shelves = create_shelves(input);
    let vertical_splitters = create_splitters(&input.vertical_splitters, total_height_cm);
    let doors = create_doors(input, &id, &shelves, door_thickness_mm);

    Column {
        id,
        index,
        x_offset_cm,
        width_cm: input.width_cm,
        total_height_cm,
        door_type: input.door_type,
        shelves,
        doors,
        vertical_splitters,
    }
}

fn create_shelves(input: &ColumnInput) -> Vec<Shelf> {
    let mut shelves = Vec::with_capacity(input.shelf_count);
    let mut position = 0.0;

    for i in 0..input.shelf_count {
        let height_cm = input.shelf_height(i);
        let gap_cm = input.shelf_gap(i);
        shelves.push(Shelf {
            id: format!("shelf-{}", i + 1),
            position_cm: position,
            height_cm,
            gap_cm,
        });
        position += height_cm + gap_cm;
    }

    shelves
}

fn create_splitters(positions: &[f64], total_height_cm: f64) -> Vec<VerticalSplitter> {
    positions
        .iter()
        .enumerate()
        .map(|(i, &position_cm)| VerticalSplitter {
            id: format!("splitter-{}", i + 1),
            position_cm,
            height_cm: total_height_cm,
            thickness_mm: SPLITTER_THICKNESS_MM,
        })
        .collect()
}

fn create_doors(
    input: &ColumnInput,
    column_id: &str,
    shelves: &[Shelf],
    thickness_mm: f64,
) -> Vec<DoorConfiguration> {
    match input.door_type {
        DoorStyle::None => Vec::new(),
        DoorStyle::Full => {
            let height = shelf_stack_height(shelves);
            let panel = door_panel(
                format!("{}-door-full", column_id),
                column_id,
                0.0,
                height,
                input.width_cm + COLUMN_DOOR_OVERLAP_CM,
                thickness_mm,
            );
            vec![DoorConfiguration {
                id: format!("{}-config-full", column_id),
                door_type: DoorStyle::Full,
                panels: vec![panel],
            }]
        }
        DoorStyle::Split => {
            let width = input.width_cm / 2.0 + COLUMN_DOOR_OVERLAP_CM;
            let panels = input
                .split_door_ranges
                .iter()
                .enumerate()
                .flat_map(|(i, range)| {
                    let (start, end) = range_span(range, shelves);
                    ["left", "right"].map(|leaf| {
                        door_panel(
                            format!("{}-door-{}-{}", column_id, leaf, i + 1),
                            column_id,
                            start,
                            end,
                            width,
                            thickness_mm,
                        )
                    })
                })
                .collect();
            vec![DoorConfiguration {
                id: format!("{}-config-split", column_id),
                door_type: DoorStyle::Split,
                panels,
            }]
        }
    }
}

fn door_panel(
    id: String,
    column_id: &str,
    start_y_cm: f64,
    end_y_cm: f64,
    width_cm: f64,
    thickness_mm: f64,
) -> DoorPanel {
    let height_cm = end_y_cm - start_y_cm;
    DoorPanel {
        id,
        column_id: column_id.to_string(),
        start_y_cm,
        end_y_cm,
        width_cm,
        height_cm,
        thickness_mm,
        edge_banding: door_edges(units::cm_to_mm(width_cm), units::cm_to_mm(height_cm), 1),
    }
}

/// Height of the shelf stack: every shelf and gap except the last gap.
pub fn shelf_stack_height(shelves: &[Shelf]) -> f64 {
    match shelves.last() {
        Some(last) => shelves.iter().map(|s| s.height_cm + s.gap_cm).sum::<f64>() - last.gap_cm,
        None => 0.0,
    }
}

/// Bottom of shelf `index`: the sum of every lower shelf and its gap.
pub fn shelf_bottom(index: usize, shelves: &[Shelf]) -> f64 {
    shelves
        .iter()
        .take(index)
        .map(|s| s.height_cm + s.gap_cm)
        .sum()
}

/// Top of shelf `index`: its bottom plus its own height, without its gap.
pub fn shelf_top(index: usize, shelves: &[Shelf]) -> f64 {
    let own_height = shelves.get(index).map(|s| s.height_cm).unwrap_or(0.0);
    shelf_bottom(index, shelves) + own_height
}

fn range_span(range: &ShelfRange, shelves: &[Shelf]) -> (f64, f64) {
    (
        shelf_bottom(range.start_shelf, shelves),
        shelf_top(range.end_shelf, shelves),
    )
}

/// Flatten every door leaf into priced cut-list panels.
///
/// Dimensions are rounded to whole millimetres; cost is material plus banding.
pub fn to_cnc_parts(
    columns: &[Column],
    material: Material,
    price_per_m2: f64,
    band_price_per_m: f64,
) -> Vec<Panel> {
    columns
        .iter()
        .flat_map(|column| column.door_panels())
        .map(|panel| {
            Panel::new(
                panel.id.clone(),
                format!("Door Panel {}", panel.id),
                PartRole::DoorLeaf,
                units::cm_to_mm(panel.width_cm).round(),
                units::cm_to_mm(panel.height_cm).round(),
                panel.thickness_mm,
                1,
                material,
                price_per_m2,
            )
            .with_banding(panel.edge_banding.clone(), band_price_per_m)
        })
        .collect()
}

/// Totals over the generated door parts plus a count of columns per door type.
pub fn summarize(columns: &[Column], parts: &[Panel]) -> DoorSummary {
    let mut door_types = DoorTypeCounts::default();
    for column in columns {
        match column.door_type {
            DoorStyle::Full => door_types.full += 1,
            DoorStyle::Split => door_types.split += 1,
            DoorStyle::None => door_types.none += 1,
        }
    }

    DoorSummary {
        total_doors: parts.len(),
        total_area: parts.iter().map(|p| p.area_m2).sum(),
        total_cost: parts.iter().map(|p| p.cost).sum(),
        total_band_length: parts.iter().map(Panel::banding_length_m).sum(),
        columns: columns.len(),
        door_types,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;
    use crate::model::EdgeSide;

    fn column(door_type: DoorStyle) -> ColumnInput {
        ColumnInput {
            width_cm: 100.0,
            shelf_count: 3,
            shelf_heights: vec![50.0, 60.0, 40.0],
            shelf_gaps: vec![2.0, 3.0, 4.0],
            door_type,
            split_door_ranges: Vec::new(),
            vertical_splitters: Vec::new(),
        }
    }

    fn input(columns: Vec<ColumnInput>) -> DoorInput {
        DoorInput {
            total_width_cm: columns.iter().map(|c| c.width_cm).sum(),
            columns,
            ..Default::default()
        }
    }

    // ==================== layout tests ====================

    #[test]
    fn test_columns_left_to_right() {
        let mut second = column(DoorStyle::None);
        second.width_cm = 80.0;
        let columns = generate_columns(&input(vec![column(DoorStyle::None), second]));
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].id, "column-1");
        assert_eq!(columns[0].x_offset_cm, 0.0);
        assert_eq!(columns[1].id, "column-2");
        assert_eq!(columns[1].x_offset_cm, 100.0);
    }

    #[test]
    fn test_shelves_stack_bottom_up() {
        let columns = generate_columns(&input(vec![column(DoorStyle::None)]));
        let positions: Vec<f64> = columns[0].shelves.iter().map(|s| s.position_cm).collect();
        assert_eq!(positions, vec![0.0, 52.0, 115.0]);
    }

    #[test]
    fn test_shelf_defaults() {
        let col = ColumnInput {
            shelf_count: 2,
            shelf_heights: Vec::new(),
            shelf_gaps: Vec::new(),
            ..column(DoorStyle::None)
        };
        let shelves = create_shelves(&col);
        assert_eq!(shelves[0].height_cm, 40.0);
        assert_eq!(shelves[1].position_cm, 42.0);
    }

    #[test]
    fn test_splitters_span_full_height() {
        let col = ColumnInput {
            vertical_splitters: vec![30.0, 60.0],
            ..column(DoorStyle::None)
        };
        let columns = generate_columns(&input(vec![col]));
        let splitters = &columns[0].vertical_splitters;
        assert_eq!(splitters.len(), 2);
        assert_eq!(splitters[1].id, "splitter-2");
        assert_eq!(splitters[1].position_cm, 60.0);
        assert_eq!(splitters[1].height_cm, 240.0);
        assert!(columns[0].doors.is_empty());
    }

    // ==================== shelf position tests ====================

    #[test]
    fn test_shelf_positions() {
        let shelves = create_shelves(&column(DoorStyle::None));
        assert_eq!(shelf_bottom(0, &shelves), 0.0);
        assert_eq!(shelf_bottom(2, &shelves), 115.0);
        assert_eq!(shelf_top(0, &shelves), 50.0);
        assert_eq!(shelf_top(1, &shelves), 112.0);
        assert_eq!(shelf_stack_height(&shelves), 155.0);
        assert_eq!(shelf_stack_height(&[]), 0.0);
    }

    // ==================== door tests ====================

    #[test]
    fn test_full_door_spans_shelf_stack() {
        let columns = generate_columns(&input(vec![column(DoorStyle::Full)]));
        let panels: Vec<&DoorPanel> = columns[0].door_panels().collect();
        assert_eq!(panels.len(), 1);
        assert_eq!(panels[0].id, "column-1-door-full");
        assert_eq!(panels[0].start_y_cm, 0.0);
        assert_eq!(panels[0].height_cm, 155.0);
        assert!(approx_eq(panels[0].width_cm, 100.4));
        assert_eq!(panels[0].edge_banding.len(), 4);
    }

    #[test]
    fn test_split_range_emits_leaf_pair() {
        let col = ColumnInput {
            split_door_ranges: vec![ShelfRange::new(1, 2)],
            ..column(DoorStyle::Split)
        };
        let columns = generate_columns(&input(vec![col]));
        let panels: Vec<&DoorPanel> = columns[0].door_panels().collect();
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].id, "column-1-door-left-1");
        assert_eq!(panels[1].id, "column-1-door-right-1");
        for panel in panels {
            assert_eq!(panel.start_y_cm, 52.0);
            assert_eq!(panel.end_y_cm, 155.0);
            assert_eq!(panel.height_cm, 103.0);
            assert!(approx_eq(panel.width_cm, 50.4));
            let sides: Vec<EdgeSide> = panel.edge_banding.iter().map(|e| e.side).collect();
            assert_eq!(
                sides,
                vec![EdgeSide::Top, EdgeSide::Bottom, EdgeSide::Left, EdgeSide::Right]
            );
        }
    }

    #[test]
    fn test_none_column_has_no_doors() {
        let columns = generate_columns(&input(vec![column(DoorStyle::None)]));
        assert_eq!(columns[0].door_panels().count(), 0);
    }

    // ==================== CNC part tests ====================

    #[test]
    fn test_cnc_parts_cost_includes_banding() {
        let columns = generate_columns(&input(vec![column(DoorStyle::Full)]));
        let parts = to_cnc_parts(&columns, Material::Mdf, 25.0, 3.5);
        assert_eq!(parts.len(), 1);

        let part = &parts[0];
        assert_eq!(part.name, "Door Panel column-1-door-full");
        assert_eq!(part.width_mm, 1004.0);
        assert_eq!(part.height_mm, 1550.0);
        assert_eq!(part.role, PartRole::DoorLeaf);

        let area = 1.004 * 1.55;
        let band_m = 2.0 * 1.004 + 2.0 * 1.55;
        assert!(approx_eq(part.area_m2, area));
        assert!(approx_eq(part.cost, area * 25.0 + band_m * 3.5));
    }

    #[test]
    fn test_summary_counts_columns_by_door_type() {
        let split = ColumnInput {
            split_door_ranges: vec![ShelfRange::new(0, 0), ShelfRange::new(1, 2)],
            ..column(DoorStyle::Split)
        };
        let columns = generate_columns(&input(vec![
            column(DoorStyle::Full),
            split,
            column(DoorStyle::None),
        ]));
        let parts = to_cnc_parts(&columns, Material::Mdf, 25.0, 3.5);
        let summary = summarize(&columns, &parts);

        assert_eq!(summary.total_doors, 5);
        assert_eq!(summary.columns, 3);
        assert_eq!(
            summary.door_types,
            DoorTypeCounts {
                full: 1,
                split: 1,
                none: 1
            }
        );
        let area: f64 = parts.iter().map(|p| p.area_m2).sum();
        assert!(approx_eq(summary.total_area, area));
    }
}
