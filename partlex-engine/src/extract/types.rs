//! Transient extraction types. These never leave the engine; the resolver
//! and aggregator fold them into the final record.

use partlex_core::types::{Dimension, DriveType, EngineType, YearRange};

/// A half-open char-offset range into the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Gap in chars between two non-overlapping spans; zero when they touch
    /// or overlap.
    pub fn distance(&self, other: &Span) -> usize {
        if self.end <= other.start {
            other.start - self.end
        } else if other.end <= self.start {
            self.start - other.end
        } else {
            0
        }
    }

    /// Whether `other` starts after this span ends.
    pub fn precedes(&self, other: &Span) -> bool {
        self.end <= other.start
    }
}

#[derive(Debug, Clone)]
pub struct CategoryExtraction {
    pub category: String,
    pub term: String,
    pub confidence: f64,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct BrandMatch {
    pub brand: String,
    pub confidence: f64,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ModelMatch {
    pub brand: String,
    pub model: String,
    pub term: String,
    pub confidence: f64,
    pub span: Span,
    /// The term collides with engine-code shapes and lacked brand context.
    /// The resolver drops or reassigns these.
    pub ambiguous_without_context: bool,
}

#[derive(Debug, Clone, Default)]
pub struct VehicleExtraction {
    pub brands: Vec<BrandMatch>,
    pub models: Vec<ModelMatch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearKind {
    /// `מNN` — in production from year NN.
    From,
    /// `עד NN` — in production until year NN.
    Until,
    /// Bare `NN-NN`.
    Range,
}

#[derive(Debug, Clone, Copy)]
pub struct YearMention {
    pub kind: YearKind,
    pub from: Option<i32>,
    pub to: Option<i32>,
    pub span: Span,
}

#[derive(Debug, Clone, Default)]
pub struct YearExtraction {
    pub mentions: Vec<YearMention>,
    /// Range built from the most specific mentions, before association.
    pub range: YearRange,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct DriveExtraction {
    pub drive: DriveType,
    pub confidence: f64,
    pub span: Span,
}

/// Joined position or side markers ("Front", "Front/Rear", "Right"...).
#[derive(Debug, Clone)]
pub struct PlacementExtraction {
    pub value: String,
    pub confidence: f64,
}

#[derive(Debug, Clone)]
pub struct EngineCodeMatch {
    pub code: String,
    pub confidence: f64,
    pub span: Span,
    /// Matched by the generic uppercase-token fallback, not the code table.
    pub generic: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct DisplacementMatch {
    pub liters: f64,
    pub confidence: f64,
    pub span: Span,
}

#[derive(Debug, Clone, Default)]
pub struct EngineExtraction {
    pub code: Option<EngineCodeMatch>,
    pub displacement: Option<DisplacementMatch>,
    pub engine_type: Option<EngineType>,
}

#[derive(Debug, Clone, Copy)]
pub struct DimensionExtraction {
    pub dimension: Dimension,
    pub confidence: f64,
}
