//! DXF (Drawing Exchange Format) outline export.
//!
//! Every part is drawn once as a closed rectangle of four LINE entities on a
//! layer named after the part. Parts are stacked along Y with a fixed gap, so
//! the drawing is an inspection aid rather than a nested sheet layout.

use crate::config::DXF_PART_SPACING;
use crate::model::Panel;

/// Writer for a minimal ASCII DXF group-code stream.
#[derive(Debug, Default)]
pub struct DxfWriter {
    output: String,
}

impl DxfWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the generated DXF content.
    pub fn into_string(self) -> String {
        self.output
    }

    /// Write a DXF group code and value.
    fn write_group(&mut self, code: i32, value: &str) {
        self.output.push_str(&code.to_string());
        self.output.push('\n');
        self.output.push_str(value);
        self.output.push('\n');
    }

    /// Format a coordinate with 3 decimal places, rounding half away from zero.
    fn format_coord(value: f64) -> String {
        let scaled = value * 1000.0;
        let rounded = if scaled >= 0.0 {
            (scaled + 0.5).floor()
        } else {
            (scaled - 0.5).ceil()
        };
        format!("{:.3}", rounded / 1000.0)
    }

    /// Write an empty header section.
    pub fn write_header(&mut self) {
        self.write_group(0, "SECTION");
        self.write_group(2, "HEADER");
        self.write_group(0, "ENDSEC");
    }

    /// Begin the entities section.
    pub fn begin_entities(&mut self) {
        self.write_group(0, "SECTION");
        self.write_group(2, "ENTITIES");
    }

    /// End the entities section and write EOF.
    pub fn end_entities(&mut self) {
        self.write_group(0, "ENDSEC");
        self.write_group(0, "EOF");
    }

    /// Write a LINE entity.
    pub fn write_line_entity(&mut self, layer: &str, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.write_group(0, "LINE");
        self.write_group(8, layer);
        self.write_group(10, &Self::format_coord(x1));
        self.write_group(20, &Self::format_coord(y1));
        self.write_group(30, "0.000");
        self.write_group(11, &Self::format_coord(x2));
        self.write_group(21, &Self::format_coord(y2));
        self.write_group(31, "0.000");
    }

    /// Write a closed axis-aligned rectangle as four LINE entities.
    pub fn write_rectangle(&mut self, layer: &str, x: f64, y: f64, width: f64, height: f64) {
        let (x2, y2) = (x + width, y + height);
        self.write_line_entity(layer, x, y, x2, y);
        self.write_line_entity(layer, x2, y, x2, y2);
        self.write_line_entity(layer, x2, y2, x, y2);
        self.write_line_entity(layer, x, y2, x, y);
    }
}

/// Render `parts` as outline rectangles stacked along Y.
pub fn export_dxf(parts: &[Panel]) -> String {
    let mut dxf = DxfWriter::new();

    dxf.write_header();
    dxf.begin_entities();

    let mut y = 0.0;
    for part in parts {
        dxf.write_rectangle(&part.name, 0.0, y, part.width_mm, part.height_mm);
        y += part.height_mm + DXF_PART_SPACING;
    }

    dxf.end_entities();
    dxf.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Material;
    use crate::model::PartRole;

    fn part(name: &str, width: f64, height: f64) -> Panel {
        Panel::new(
            name.to_lowercase(),
            name,
            PartRole::Shelf,
            width,
            height,
            18.0,
            1,
            Material::Mdf,
            25.0,
        )
    }

    #[test]
    fn test_format_coord() {
        assert_eq!(DxfWriter::format_coord(0.0), "0.000");
        assert_eq!(DxfWriter::format_coord(1164.0), "1164.000");
        assert_eq!(DxfWriter::format_coord(0.0005), "0.001");
        assert_eq!(DxfWriter::format_coord(-0.0005), "-0.001");
    }

    #[test]
    fn test_empty_document() {
        let dxf = export_dxf(&[]);
        insta::assert_snapshot!(dxf, @r###"
        0
        SECTION
        2
        HEADER
        0
        ENDSEC
        0
        SECTION
        2
        ENTITIES
        0
        ENDSEC
        0
        EOF
        "###);
    }

    #[test]
    fn test_rectangle_per_part() {
        let dxf = export_dxf(&[part("Shelf", 100.0, 40.0), part("Door", 50.0, 20.0)]);
        let lines: Vec<&str> = dxf.lines().collect();

        let line_entities = lines.iter().filter(|l| **l == "LINE").count();
        assert_eq!(line_entities, 8);

        let shelf_layers = lines.windows(2).filter(|w| w[0] == "8" && w[1] == "Shelf").count();
        assert_eq!(shelf_layers, 4);

        // second part starts at 40 + 50 spacing
        assert!(dxf.contains("8\nDoor\n10\n0.000\n20\n90.000\n"));
        // closing edge of the second rectangle runs from its top-left back down
        assert!(dxf.contains("8\nDoor\n10\n0.000\n20\n110.000\n30\n0.000\n11\n0.000\n21\n90.000\n"));
        assert!(dxf.ends_with("0\nENDSEC\n0\nEOF\n"));
    }
}
