//! Configuration validation.

mod validate;

pub use validate::{
    quick_validate, validate_door_input, validate_wardrobe, validate_wardrobe_strict,
    ValidationResult,
};
