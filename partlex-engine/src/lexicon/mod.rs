//! Lexicon store — static per-axis term tables.
//!
//! Loaded once at engine construction, read-only afterwards, safe for
//! unlimited concurrent readers. A duplicate source term within an axis is
//! a fatal startup error: the engine refuses to run with an inconsistent
//! lexicon rather than produce silently wrong classifications.

pub mod defaults;
pub mod store;
pub mod types;

pub use store::{Lexicon, TermMatch};
pub use types::{Axis, LexiconEntry};
