//! Shared record types produced by the engine and consumed by storage.

pub mod confidence;
pub mod record;

pub use confidence::FieldConfidences;
pub use record::{
    Dimension, DimensionKind, DriveType, EngineType, ModelRef, ModelYearRange, PartRecord,
    YearRange,
};
