//! The structured part record — the engine's sole output type.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::confidence::FieldConfidences;

/// Drive type extracted from the `4x4` / `4x2` markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriveType {
    FourWheel,
    TwoWheel,
}

impl DriveType {
    /// The literal token as it appears in descriptions.
    pub fn token(&self) -> &'static str {
        match self {
            Self::FourWheel => "4x4",
            Self::TwoWheel => "4x2",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::FourWheel => "Four-wheel drive",
            Self::TwoWheel => "Two-wheel drive",
        }
    }
}

impl fmt::Display for DriveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Engine fuel/propulsion type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineType {
    Diesel,
    Gasoline,
    Hybrid,
}

impl EngineType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Diesel => "Diesel",
            Self::Gasoline => "Gasoline",
            Self::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for EngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a dimension token measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DimensionKind {
    /// Belt length following a rib count (`6PK 1230`).
    BeltLength,
    /// Explicit millimeter mention.
    Millimeters,
    /// Brake-disc diameter.
    Diameter,
    /// Bare decimal interpreted as engine displacement.
    Displacement,
}

impl DimensionKind {
    pub fn unit(&self) -> &'static str {
        match self {
            Self::BeltLength | Self::Millimeters | Self::Diameter => "mm",
            Self::Displacement => "L",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BeltLength => "length",
            Self::Millimeters => "dimension",
            Self::Diameter => "diameter",
            Self::Displacement => "engine displacement",
        }
    }
}

/// An extracted dimension (belt length, diameter, displacement...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub value: f64,
    pub kind: DimensionKind,
}

/// A model-year range. Either bound may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct YearRange {
    pub from: Option<i32>,
    pub to: Option<i32>,
}

impl YearRange {
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// An inverted range (from > to) is stored but penalized, never rejected.
    pub fn is_inverted(&self) -> bool {
        matches!((self.from, self.to), (Some(f), Some(t)) if f > t)
    }
}

/// A (brand, model) pair. Brand is always canonical; model may be the
/// "Generic Model" placeholder when a brand was found without a model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelRef {
    pub brand: String,
    pub model: String,
}

impl fmt::Display for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.brand, self.model)
    }
}

/// A year range attached to a specific model mention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelYearRange {
    pub brand: String,
    pub model: String,
    pub years: YearRange,
    pub confidence: f64,
}

/// The structured output of one classification call.
///
/// Created once per input line and immutable after construction; a
/// re-classification produces a new record rather than updating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartRecord {
    pub raw_text: String,

    /// Canonical English part category ("Air Filter", "Brake Discs", ...).
    pub category: Option<String>,
    /// The lexicon source term that produced the category.
    pub category_term: Option<String>,

    /// Compatible brands, first-seen order, no duplicates.
    pub brands: Vec<String>,
    /// Compatible (brand, model) pairs, first-seen order, no duplicates.
    pub models: Vec<ModelRef>,
    /// Year ranges associated with specific models.
    pub model_years: Vec<ModelYearRange>,
    /// Year range not attached to any model mention.
    pub general_years: YearRange,

    pub drive_type: Option<DriveType>,
    /// Joined position markers, e.g. "Front" or "Front/Rear".
    pub position: Option<String>,
    /// Joined side markers, e.g. "Right" or "Right/Left".
    pub side: Option<String>,

    pub engine_code: Option<String>,
    pub engine_displacement: Option<f64>,
    pub engine_type: Option<EngineType>,

    pub dimension: Option<Dimension>,

    pub confidences: FieldConfidences,
    /// Weighted overall accuracy in [0, 1].
    pub accuracy: f64,
}

impl PartRecord {
    /// An all-default record for empty or unparseable input.
    pub fn empty(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            category: None,
            category_term: None,
            brands: Vec::new(),
            models: Vec::new(),
            model_years: Vec::new(),
            general_years: YearRange::default(),
            drive_type: None,
            position: None,
            side: None,
            engine_code: None,
            engine_displacement: None,
            engine_type: None,
            dimension: None,
            confidences: FieldConfidences::default(),
            accuracy: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_has_zero_accuracy() {
        let rec = PartRecord::empty("");
        assert_eq!(rec.accuracy, 0.0);
        assert!(rec.brands.is_empty());
        assert!(rec.general_years.is_empty());
    }

    #[test]
    fn inverted_range_detected() {
        let r = YearRange { from: Some(2015), to: Some(2012) };
        assert!(r.is_inverted());
        let ok = YearRange { from: Some(2012), to: Some(2015) };
        assert!(!ok.is_inverted());
    }

    #[test]
    fn drive_type_tokens_round_trip() {
        assert_eq!(DriveType::FourWheel.token(), "4x4");
        assert_eq!(DriveType::TwoWheel.token(), "4x2");
        assert_eq!(DriveType::FourWheel.description(), "Four-wheel drive");
    }
}
