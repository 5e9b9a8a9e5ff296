//! wardrobe-core - Core library for wardrobe cut-lists and edge banding.
//!
//! This library turns a wardrobe configuration into a priced list of panels to
//! cut, decides which panel edges need edge banding, and renders the result as
//! CSV or DXF for the workshop.
//!
//! Two models are supported: a simple single-carcass wardrobe
//! ([`WardrobeConfig`]) and a segmented wardrobe of columns with per-column
//! doors ([`DoorInput`]).
//!
//! # Example
//!
//! ```no_run
//! use wardrobe_core::{calculate_wardrobe, export_csv, WardrobeConfig};
//!
//! let config = WardrobeConfig::default();
//! let result = calculate_wardrobe(&config).unwrap();
//! println!("{}", export_csv(&result.parts));
//! ```

pub mod aggregate;
pub mod banding;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod input;
pub mod model;
pub mod presets;
pub mod validation;

// Re-exports for convenience
pub use config::Material;
pub use error::{CutlistError, Result, ValidationError};
pub use export::{export_csv, export_dxf};
pub use input::{load_door_input, load_wardrobe_config};
pub use model::{
    CalculationResult, Column, ColumnInput, DoorCalculation, DoorInput, DoorSection, DoorStyle,
    Panel, WardrobeConfig,
};
pub use presets::{find_preset, wardrobe_presets, WardrobePreset};
pub use validation::{
    validate_door_input, validate_wardrobe, validate_wardrobe_strict, ValidationResult,
};

/// Validate `config` and calculate its cut-list.
///
/// Warnings are logged and do not stop the calculation. Any validation error
/// is returned as [`CutlistError::Validation`] carrying every violated rule.
pub fn calculate_wardrobe(config: &WardrobeConfig) -> Result<CalculationResult> {
    let validation = validate_wardrobe(config);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    validation.into_result()?;

    Ok(calculate_wardrobe_parts(config))
}

/// Calculate the cut-list of `config` without validating it.
///
/// The pipeline is:
/// 1. Generate the panels
/// 2. Annotate every panel with its edge banding
/// 3. Aggregate costs, areas and banding
pub fn calculate_wardrobe_parts(config: &WardrobeConfig) -> CalculationResult {
    let parts = banding::annotate(generator::generate_panels(config), config);
    let totals = aggregate::aggregate(&parts, config.band_price_per_m);

    tracing::info!(
        "Calculated {} part(s): {:.4} m², {:.2} total, {:.3} m of banding",
        parts.len(),
        totals.total_area,
        totals.total_cost,
        totals.band_calculation.total_band_meters
    );

    CalculationResult {
        parts,
        total_cost: totals.total_cost,
        total_area: totals.total_area,
        band_calculation: totals.band_calculation,
    }
}

/// Validate a column/door configuration and lay out its columns and doors.
pub fn calculate_doors(input: &DoorInput) -> Result<DoorCalculation> {
    let validation = validate_door_input(input);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    validation.into_result()?;

    let columns = generator::generate_columns(input);
    let parts = generator::to_cnc_parts(
        &columns,
        input.material,
        input.price_per_m2,
        input.band_price_per_m,
    );
    let summary = generator::summarize(&columns, &parts);

    tracing::info!(
        "Calculated {} door leaf/leaves over {} column(s): {:.2} total",
        summary.total_doors,
        summary.columns,
        summary.total_cost
    );

    Ok(DoorCalculation {
        columns,
        parts,
        summary,
    })
}
