//! Partlex classification engine.
//!
//! Converts one free-text parts description into a [`PartRecord`]:
//!
//! ```text
//! raw text ──► extractors (independent, pure) ──► resolver ──► aggregator ──► PartRecord
//! ```
//!
//! Extractors depend only on the input text and the read-only [`Lexicon`],
//! which makes batch classification embarrassingly parallel — see
//! [`Classifier::classify_batch`].
//!
//! ```
//! use partlex_engine::Classifier;
//!
//! let classifier = Classifier::with_defaults().unwrap();
//! let record = classifier.classify("פ.אויר מזדה 3 מ13");
//! assert_eq!(record.category.as_deref(), Some("Air Filter"));
//! ```

pub mod aggregate;
pub mod extract;
pub mod lexicon;
pub mod pipeline;
pub mod resolve;

pub use lexicon::{Axis, Lexicon, LexiconEntry};
pub use pipeline::Classifier;

pub use partlex_core::types::PartRecord;
