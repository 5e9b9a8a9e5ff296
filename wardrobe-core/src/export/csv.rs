//! CSV cut-list export.

use crate::model::Panel;

/// Column headers of the CSV cut-list, in order.
pub const CSV_HEADERS: [&str; 11] = [
    "Part ID",
    "Name",
    "Width (mm)",
    "Height (mm)",
    "Thickness (mm)",
    "Quantity",
    "Material",
    "Area (m²)",
    "Cost (€)",
    "Banding Sides",
    "Banding Details",
];

/// Render `parts` as a CSV table with every field quoted.
pub fn export_csv(parts: &[Panel]) -> String {
    let mut output = String::new();

    write_row(&mut output, CSV_HEADERS.iter().map(|h| h.to_string()));

    for part in parts {
        let sides = part
            .edge_banding
            .iter()
            .map(|e| e.side.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let details = part
            .edge_banding
            .iter()
            .map(|e| format!("{}: {}mm × {}", e.side, format_mm(e.length_mm), e.quantity))
            .collect::<Vec<_>>()
            .join("; ");

        write_row(
            &mut output,
            [
                part.id.clone(),
                part.name.clone(),
                format_mm(part.width_mm),
                format_mm(part.height_mm),
                format_mm(part.thickness_mm),
                part.quantity.to_string(),
                part.material.to_string(),
                format!("{:.4}", part.area_m2),
                format!("{:.2}", part.cost),
                sides,
                details,
            ],
        );
    }

    output
}

fn write_row(output: &mut String, fields: impl IntoIterator<Item = String>) {
    let row = fields
        .into_iter()
        .map(|f| format!("\"{}\"", f.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",");
    output.push_str(&row);
    output.push('\n');
}

/// Format a millimetre value rounded to 0.01 without trailing zeros.
pub fn format_mm(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}
