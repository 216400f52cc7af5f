//! Core types, errors, configuration, and tracing setup for Partlex.
//!
//! Partlex converts unstructured bilingual (Hebrew/English) automotive-parts
//! descriptions into structured, confidence-scored records. This crate holds
//! everything the engine and the storage adapter share: the record types, the
//! per-subsystem error enums, and the layered configuration.

pub mod config;
pub mod errors;
pub mod trace;
pub mod types;

pub use config::{EngineConfig, FieldWeights, PartlexConfig, StorageConfig};
pub use errors::{ConfigError, LexiconError, PartlexErrorCode, StorageError};
pub use types::{
    Dimension, DimensionKind, DriveType, EngineType, FieldConfidences, ModelRef,
    ModelYearRange, PartRecord, YearRange,
};
