//! Per-field confidence scores.
//!
//! A confidence is a float in [0, 1] estimating how likely an extracted
//! value is correct. It ranks competing matches and feeds the weighted
//! overall accuracy score; it is not a calibrated probability.

use serde::{Deserialize, Serialize};

/// Confidence score per extracted field.
///
/// The first seven fields participate in the weighted overall accuracy;
/// `side` shares the position extractor's scoring rules but carries no
/// weight of its own.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldConfidences {
    pub category: f64,
    pub models: f64,
    pub position: f64,
    pub drive_type: f64,
    pub years: f64,
    pub dimensions: f64,
    pub engine: f64,
    pub side: f64,
}

impl FieldConfidences {
    /// The seven weighted fields, in the aggregator's weight order.
    pub fn weighted(&self) -> [f64; 7] {
        [
            self.category,
            self.models,
            self.position,
            self.drive_type,
            self.years,
            self.dimensions,
            self.engine,
        ]
    }

    /// True when every score (weighted and side) lies in [0, 1].
    pub fn all_in_bounds(&self) -> bool {
        self.weighted()
            .iter()
            .chain(std::iter::once(&self.side))
            .all(|c| (0.0..=1.0).contains(c))
    }
}
