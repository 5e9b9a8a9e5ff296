//! Edge-banding rule engine.

mod labels;
mod rules;

pub use labels::edge_label;
pub use rules::{annotate, door_edges, edges_for};
