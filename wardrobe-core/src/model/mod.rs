//! Data model types for wardrobe cut-list calculation.

mod calculation;
mod column;
mod panel;
mod wardrobe;

pub use calculation::{BandCalculation, BandEdge, CalculationResult, DoorCalculation};
pub use column::{
    Column, ColumnInput, DoorConfiguration, DoorInput, DoorPanel, DoorSummary, DoorTypeCounts,
    Shelf, ShelfRange, VerticalSplitter,
};
pub use panel::{EdgeBanding, EdgeSide, PartRole, Panel};
pub use wardrobe::{DoorSection, DoorStyle, WardrobeConfig};
