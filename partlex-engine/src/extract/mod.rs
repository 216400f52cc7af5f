//! Field extractors.
//!
//! Each extractor is a pure function of the input text, the read-only
//! [`Lexicon`](crate::lexicon::Lexicon), and the engine config. Extractors
//! never see each other's output; cross-field reasoning (ambiguous codes,
//! year-model association) happens in [`resolve`](crate::resolve).
//!
//! All offsets leaving this module are char offsets, computed through
//! [`text::TextIndex`], because every proximity rule counts chars and the
//! inputs are mostly multi-byte Hebrew.

pub mod category;
pub mod dimension;
pub mod drive;
pub mod engine_info;
pub mod patterns;
pub mod placement;
pub mod text;
pub mod types;
pub mod vehicle;
pub mod years;

pub use patterns::CompiledPatterns;
pub use text::TextIndex;
