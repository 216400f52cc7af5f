//! Lexicon entry and axis types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One semantic axis of the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Part category terms (Hebrew term -> English category).
    Category,
    /// Brand terms. Includes model names that imply a brand
    /// (e.g. "אוקטביה" implies Skoda).
    Brand,
    /// Model terms, each parented to a brand.
    Model,
    /// Front/Rear/Upper/Lower markers.
    Position,
    /// Left/Right markers.
    Side,
    /// Known engine codes (whole-word matched).
    EngineCode,
    /// 4x4 / 4x2 drive markers.
    Drive,
}

impl Axis {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Brand => "brand",
            Self::Model => "model",
            Self::Position => "position",
            Self::Side => "side",
            Self::EngineCode => "engine_code",
            Self::Drive => "drive",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One lexicon entry: a source term mapped to a canonical label.
///
/// `parent` is the owning brand label for model entries and `None` on every
/// other axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub term: String,
    pub label: String,
    pub parent: Option<String>,
}

impl LexiconEntry {
    pub fn new(term: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            label: label.into(),
            parent: None,
        }
    }

    pub fn with_parent(
        term: impl Into<String>,
        label: impl Into<String>,
        parent: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            label: label.into(),
            parent: Some(parent.into()),
        }
    }

    /// Term length in chars, the sort key for longest-first matching.
    pub fn term_chars(&self) -> usize {
        self.term.chars().count()
    }
}
