//! Panel and column/door generators.

pub mod columns;
mod panels;

pub use columns::{generate_columns, summarize, to_cnc_parts};
pub use panels::{generate_door_panels, generate_panels};
