//! Lexicon load/validation errors. All of these are fatal at startup:
//! the engine refuses to initialize with an inconsistent lexicon.

use super::error_code::{self, PartlexErrorCode};

/// Errors raised while building the lexicon store.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("Duplicate source term {term:?} in axis {axis}")]
    DuplicateTerm { axis: &'static str, term: String },

    #[error("Empty source term in axis {axis}")]
    EmptyTerm { axis: &'static str },

    #[error("Model term {term:?} references unknown brand {brand:?}")]
    UnknownBrand { term: String, brand: String },

    #[error("Failed to compile matcher for axis {axis}: {message}")]
    MatcherBuild { axis: &'static str, message: String },
}

impl PartlexErrorCode for LexiconError {
    fn error_code(&self) -> &'static str {
        error_code::LEXICON_ERROR
    }
}
