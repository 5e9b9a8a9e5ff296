//! Totals and banding breakdown over a generated part list.

use crate::banding::edge_label;
use crate::model::{BandCalculation, BandEdge, Panel};

/// Aggregated totals of a part list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Totals {
    /// Σ part cost, banding included.
    pub total_cost: f64,
    /// Σ part area in m².
    pub total_area: f64,
    pub band_calculation: BandCalculation,
}

/// Sum costs, areas and banding over `parts`, pricing banding at `band_price_per_m`.
pub fn aggregate(parts: &[Panel], band_price_per_m: f64) -> Totals {
    let band_calculation = band_requirements(parts, band_price_per_m);

    Totals {
        total_cost: parts.iter().map(|p| p.cost).sum(),
        total_area: parts.iter().map(|p| p.area_m2).sum(),
        band_calculation,
    }
}

/// Labelled breakdown of every banding run plus its total length and cost.
pub fn band_requirements(parts: &[Panel], band_price_per_m: f64) -> BandCalculation {
    let edges: Vec<BandEdge> = parts
        .iter()
        .flat_map(|part| {
            part.edge_banding.iter().map(move |edge| BandEdge {
                name: edge_label(part.role, edge.side, &part.name),
                length_mm: edge.length_mm,
                quantity: edge.quantity,
            })
        })
        .collect();

    let total_band_meters: f64 = parts.iter().map(Panel::banding_length_m).sum();

    BandCalculation {
        total_band_meters,
        band_cost: total_band_meters * band_price_per_m,
        edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banding::annotate;
    use crate::config::float_cmp::approx_eq;
    use crate::generator::generate_panels;
    use crate::model::{DoorStyle, WardrobeConfig};

    fn annotated(config: &WardrobeConfig) -> Vec<Panel> {
        annotate(generate_panels(config), config)
    }

    #[test]
    fn test_totals_match_parts() {
        let config = WardrobeConfig {
            doors: true,
            door_style: DoorStyle::Full,
            ..Default::default()
        };
        let parts = annotated(&config);
        let totals = aggregate(&parts, config.band_price_per_m);

        let cost: f64 = parts.iter().map(|p| p.cost).sum();
        let area: f64 = parts.iter().map(|p| p.area_m2).sum();
        assert!(approx_eq(totals.total_cost, cost));
        assert!(approx_eq(totals.total_area, area));
    }

    #[test]
    fn test_band_meters() {
        let config = WardrobeConfig::default();
        let parts = annotated(&config);
        let band = band_requirements(&parts, config.band_price_per_m);

        // sides: 2.2*2 + 0.6*2 + 0.6*2, top/bottom: 1.164*2 + 0.6*2 + 0.6*2, shelves: 1.164*3
        let expected = 6.8 + 4.728 + 3.492;
        assert!(approx_eq(band.total_band_meters, expected));
        assert!(approx_eq(band.band_cost, expected * 2.5));
    }

    #[test]
    fn test_band_edges_are_labelled() {
        let config = WardrobeConfig::default();
        let parts = annotated(&config);
        let band = band_requirements(&parts, config.band_price_per_m);

        // 3 side + 3 top/bottom + 1 shelf edge runs, none for the back panel
        assert_eq!(band.edges.len(), 7);
        assert_eq!(band.edges[0].name, "Side Panels Front Edge");
        assert_eq!(band.edges[6].name, "Shelves Front Edge");
        assert_eq!(band.edges[6].quantity, 3);
    }

    #[test]
    fn test_empty_parts() {
        let totals = aggregate(&[], 2.5);
        assert_eq!(totals, Totals::default());
    }
}
