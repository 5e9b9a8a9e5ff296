//! Calculation results handed back to callers and exporters.

use super::{Column, DoorSummary, Panel};
use serde::{Deserialize, Serialize};

/// One labelled banding run in the manufacturing breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandEdge {
    pub name: String,
    pub length_mm: f64,
    pub quantity: u32,
}

/// Banding totals over a part list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BandCalculation {
    pub total_band_meters: f64,
    pub band_cost: f64,
    pub edges: Vec<BandEdge>,
}

/// Full result of a simple-model calculation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculationResult {
    pub parts: Vec<Panel>,
    pub total_cost: f64,
    pub total_area: f64,
    pub band_calculation: BandCalculation,
}

/// Full result of a column/door calculation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DoorCalculation {
    pub columns: Vec<Column>,
    pub parts: Vec<Panel>,
    pub summary: DoorSummary,
}
