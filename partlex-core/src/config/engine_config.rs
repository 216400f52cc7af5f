//! Engine tunables.
//!
//! The defaults reproduce the hand-tuned constants of the original
//! classifier. Changing any of them changes classification behavior, so
//! they are carried as configuration rather than re-derived.

use serde::{Deserialize, Serialize};

/// Aggregation weights for the seven scored fields. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub category: f64,
    pub models: f64,
    pub position: f64,
    pub drive_type: f64,
    pub years: f64,
    pub dimensions: f64,
    pub engine: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            category: 0.25,
            models: 0.20,
            position: 0.15,
            drive_type: 0.15,
            years: 0.10,
            dimensions: 0.10,
            engine: 0.05,
        }
    }
}

impl FieldWeights {
    pub fn as_array(&self) -> [f64; 7] {
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

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

/// Tunables for the extraction and association pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Max char distance between a model mention and a year mention for
    /// the two to be associated.
    pub proximity_window_chars: usize,
    /// Years above this are penalized (not rejected) by the year extractor.
    pub year_ceiling: i32,
    /// Plausible engine displacement range, inclusive.
    pub displacement_min: f64,
    pub displacement_max: f64,
    /// Max coverage bonus added to the weighted accuracy.
    pub coverage_bonus_max: f64,
    /// A field counts as covered when its confidence exceeds this.
    pub coverage_threshold: f64,
    /// Worker threads for batch classification. None = available cores.
    pub threads: Option<usize>,
    /// Aggregation weights.
    pub weights: FieldWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            proximity_window_chars: 15,
            year_ceiling: 2025,
            displacement_min: 0.5,
            displacement_max: 6.0,
            coverage_bonus_max: 0.1,
            coverage_threshold: 0.5,
            threads: None,
            weights: FieldWeights::default(),
        }
    }
}
