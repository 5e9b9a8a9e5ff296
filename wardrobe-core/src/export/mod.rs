//! Cut-list exporters.

mod csv;
mod dxf;

pub use csv::{export_csv, format_mm, CSV_HEADERS};
pub use dxf::{export_dxf, DxfWriter};
