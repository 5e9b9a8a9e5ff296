//! Validation logic for wardrobe and column/door configurations.
//!
//! Validators never stop at the first violation: every rule is checked and
//! all errors are reported together.

use crate::config::{
    COLUMN_WIDTH_TOLERANCE_CM, MIN_PANEL_SIZE_MM, STRICT_MIN_DEPTH_CM, STRICT_MIN_HEIGHT_CM,
    STRICT_MIN_WIDTH_CM,
};
use crate::error::{CutlistError, Result, ValidationError};
use crate::model::{ColumnInput, DoorInput, DoorStyle, WardrobeConfig};

/// Validation result with warnings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Non-fatal findings.
    pub warnings: Vec<String>,
    /// Every violated rule.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationError::new(field, message));
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }

    /// Check whether `field` has at least one error.
    pub fn has_error_for(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Convert into `Err(CutlistError::Validation)` when any rule failed.
    pub fn into_result(self) -> Result<()> {
        if self.passed {
            Ok(())
        } else {
            Err(CutlistError::Validation {
                errors: self.errors,
            })
        }
    }
}

fn check_finite(result: &mut ValidationResult, field: &str, value: f64) {
    if !value.is_finite() {
        result.add_error(field, format!("{} must be a finite number", field));
    }
}

/// Validate a configuration while it is being edited.
///
/// Zero dimensions are accepted here; callers skip calculation until the
/// configuration passes.
pub fn validate_wardrobe(config: &WardrobeConfig) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (field, value) in [
        ("width_cm", config.width_cm),
        ("height_cm", config.height_cm),
        ("depth_cm", config.depth_cm),
        ("thickness_mm", config.thickness_mm),
        ("price_per_m2", config.price_per_m2),
        ("band_price_per_m", config.band_price_per_m),
    ] {
        check_finite(&mut result, field, value);
    }

    if config.width_cm < 0.0 {
        result.add_error("width_cm", "Width must not be negative");
    }
    if config.height_cm < 0.0 {
        result.add_error("height_cm", "Height must not be negative");
    }
    if config.depth_cm < 0.0 {
        result.add_error("depth_cm", "Depth must not be negative");
    }
    if config.price_per_m2 <= 0.0 {
        result.add_error("price_per_m2", "Price per m² must be greater than 0");
    }
    if config.band_price_per_m <= 0.0 {
        result.add_error(
            "band_price_per_m",
            "Band price per metre must be greater than 0",
        );
    }

    for (idx, section) in config.door_sections.iter().enumerate() {
        let field = format!("door_sections[{}]", idx);
        let number = idx + 1;

        if !section.start_y_cm.is_finite() || !section.end_y_cm.is_finite() {
            result.add_error(&field, format!("Door section {} has a non-finite height", number));
            continue;
        }
        if section.start_y_cm < 0.0 || section.end_y_cm > config.height_cm {
            result.add_error(
                &field,
                format!("Door section {} must be within wardrobe height", number),
            );
        }
        if section.start_y_cm >= section.end_y_cm {
            result.add_error(
                &field,
                format!(
                    "Door section {}: start height must be less than end height",
                    number
                ),
            );
        }
    }

    for i in 0..config.door_sections.len() {
        for j in i + 1..config.door_sections.len() {
            if config.door_sections[i].overlaps(&config.door_sections[j]) {
                result.add_warning(format!("Door sections {} and {} overlap", i + 1, j + 1));
            }
        }
    }

    if config.doors && config.door_style == DoorStyle::None && !config.uses_door_sections() {
        result.add_warning("Doors are enabled but no door style is selected");
    }

    result
}

/// Validate a configuration that must describe a buildable wardrobe.
///
/// Runs every check of [`validate_wardrobe`] plus realistic minimum sizes,
/// stocked thicknesses and minimum cut sizes.
pub fn validate_wardrobe_strict(config: &WardrobeConfig) -> ValidationResult {
    let mut result = validate_wardrobe(config);

    if config.width_cm < STRICT_MIN_WIDTH_CM {
        result.add_error(
            "width_cm",
            format!("Width must be at least {} cm", STRICT_MIN_WIDTH_CM),
        );
    }
    if config.height_cm < STRICT_MIN_HEIGHT_CM {
        result.add_error(
            "height_cm",
            format!("Height must be at least {} cm", STRICT_MIN_HEIGHT_CM),
        );
    }
    if config.depth_cm < STRICT_MIN_DEPTH_CM {
        result.add_error(
            "depth_cm",
            format!("Depth must be at least {} cm", STRICT_MIN_DEPTH_CM),
        );
    }

    if !config.material.allows_thickness(config.thickness_mm) {
        let valid = config
            .material
            .allowed_thicknesses()
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        result.add_error(
            "thickness_mm",
            format!(
                "Thickness {}mm is not valid for {}. Valid thicknesses: {}mm",
                config.thickness_mm, config.material, valid
            ),
        );
    }

    if config.width_cm <= 0.0 {
        result.add_error("width_cm", "Width must be positive");
    }
    if config.height_cm <= 0.0 {
        result.add_error("height_cm", "Height must be positive");
    }
    if config.depth_cm <= 0.0 {
        result.add_error("depth_cm", "Depth must be positive");
    }

    let inner_width = config.inner_width_mm();
    if inner_width <= 0.0 {
        result.add_error(
            "width_cm",
            format!(
                "Width ({}cm) is too small for thickness {}mm. Minimum width: {:.1}cm",
                config.width_cm,
                config.thickness_mm,
                2.0 * config.thickness_mm / 10.0 + 0.1
            ),
        );
    }
    if config.depth_mm() < MIN_PANEL_SIZE_MM {
        result.add_error("depth_cm", "Depth results in parts smaller than 50mm");
    }
    if config.height_mm() < MIN_PANEL_SIZE_MM {
        result.add_error("height_cm", "Height results in parts smaller than 50mm");
    }
    if inner_width < MIN_PANEL_SIZE_MM {
        result.add_error(
            "width_cm",
            "Width minus thickness results in parts smaller than 50mm",
        );
    }

    result
}

/// Validate a column/door configuration.
pub fn validate_door_input(input: &DoorInput) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (field, value) in [
        ("total_width_cm", input.total_width_cm),
        ("total_height_cm", input.total_height_cm),
        ("door_thickness_mm", input.door_thickness_mm),
        ("price_per_m2", input.price_per_m2),
        ("band_price_per_m", input.band_price_per_m),
    ] {
        check_finite(&mut result, field, value);
    }

    if input.total_width_cm <= 0.0 {
        result.add_error("total_width_cm", "Total width must be positive");
    }
    if input.total_height_cm <= 0.0 {
        result.add_error("total_height_cm", "Total height must be positive");
    }
    if input.door_thickness_mm <= 0.0 {
        result.add_error("door_thickness_mm", "Door thickness must be positive");
    }
    if input.price_per_m2 <= 0.0 {
        result.add_error("price_per_m2", "Price per m² must be greater than 0");
    }
    if input.band_price_per_m <= 0.0 {
        result.add_error(
            "band_price_per_m",
            "Band price per metre must be greater than 0",
        );
    }

    if input.columns.is_empty() {
        result.add_error("columns", "At least one column is required");
        return result;
    }

    let width_sum: f64 = input.columns.iter().map(|c| c.width_cm).sum();
    if (width_sum - input.total_width_cm).abs() > COLUMN_WIDTH_TOLERANCE_CM {
        result.add_error(
            "columns",
            format!(
                "Column widths sum to {}cm but the wardrobe is {}cm wide",
                width_sum, input.total_width_cm
            ),
        );
    }

    for (idx, column) in input.columns.iter().enumerate() {
        result.merge(validate_column(column, idx, input.total_height_cm));
    }

    result
}

fn validate_column(column: &ColumnInput, idx: usize, total_height_cm: f64) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let prefix = format!("columns[{}]", idx);
    let number = idx + 1;

    check_finite(&mut result, &format!("{}.width_cm", prefix), column.width_cm);
    if column.width_cm <= 0.0 {
        result.add_error(
            format!("{}.width_cm", prefix),
            format!("Column {} width must be positive", number),
        );
    }

    for shelf in 0..column.shelf_count {
        let height = column.shelf_height(shelf);
        let gap = column.shelf_gap(shelf);
        if !(height.is_finite() && height > 0.0) {
            result.add_error(
                format!("{}.shelf_heights[{}]", prefix, shelf),
                format!("Column {} shelf {} height must be positive", number, shelf + 1),
            );
        }
        if !(gap.is_finite() && gap >= 0.0) {
            result.add_error(
                format!("{}.shelf_gaps[{}]", prefix, shelf),
                format!("Column {} shelf {} gap must not be negative", number, shelf + 1),
            );
        }
    }
    if column.shelf_heights.len() > column.shelf_count
        || column.shelf_gaps.len() > column.shelf_count
    {
        result.add_warning(format!(
            "Column {}: shelf heights/gaps beyond shelf {} are ignored",
            number, column.shelf_count
        ));
    }

    match column.door_type {
        DoorStyle::Full if column.shelf_count == 0 => {
            result.add_error(
                format!("{}.door_type", prefix),
                format!("Column {}: a full door needs at least one shelf", number),
            );
        }
        DoorStyle::Split if column.split_door_ranges.is_empty() => {
            result.add_warning(format!(
                "Column {}: split doors selected but no shelf ranges configured",
                number
            ));
        }
        _ => {}
    }

    if column.door_type == DoorStyle::Split {
        for (r, range) in column.split_door_ranges.iter().enumerate() {
            let field = format!("{}.split_door_ranges[{}]", prefix, r);
            if range.start_shelf > range.end_shelf {
                result.add_error(
                    &field,
                    format!(
                        "Column {}: door range {} starts above its end shelf",
                        number,
                        r + 1
                    ),
                );
            }
            if range.end_shelf >= column.shelf_count {
                result.add_error(
                    &field,
                    format!(
                        "Column {}: door range {} references shelf {} but the column has {} shelves",
                        number,
                        r + 1,
                        range.end_shelf + 1,
                        column.shelf_count
                    ),
                );
            }
        }
    }

    for (s, &offset) in column.vertical_splitters.iter().enumerate() {
        if !(offset.is_finite() && offset > 0.0 && offset < column.width_cm) {
            result.add_error(
                format!("{}.vertical_splitters[{}]", prefix, s),
                format!(
                    "Column {}: splitter {} must lie strictly inside the column (0-{}cm)",
                    number,
                    s + 1,
                    column.width_cm
                ),
            );
        }
    }

    if column.shelf_count > 0 {
        let stack = stack_height_cm(column);
        if stack > total_height_cm {
            result.add_warning(format!(
                "Column {}: shelf stack of {}cm exceeds the wardrobe height of {}cm",
                number, stack, total_height_cm
            ));
        }
    }

    result
}

fn stack_height_cm(column: &ColumnInput) -> f64 {
    let n = column.shelf_count;
    let total: f64 = (0..n)
        .map(|i| column.shelf_height(i) + column.shelf_gap(i))
        .sum();
    total - column.shelf_gap(n.saturating_sub(1))
}

/// Quick validation returning `Err` with every error on failure.
pub fn quick_validate(config: &WardrobeConfig) -> Result<()> {
    validate_wardrobe(config).into_result()
}
