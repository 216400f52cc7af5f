//! SQLite persistence for classified part records.
//!
//! Layout mirrors the engine's output: one `car_parts` row per record, with
//! the list-shaped fields (brands, models, per-model years, confidences)
//! stored as JSON columns and everything scalar kept queryable.
//!
//! Writes are serialized through a single connection and always run inside
//! a `BEGIN IMMEDIATE` transaction; reads go through a small round-robin
//! pool. Schema changes are numbered migrations gated on `user_version`.

pub mod connection;
pub mod import;
pub mod migrations;
pub mod queries;

pub use connection::DatabaseManager;
pub use import::{import_records, ImportReport};
pub use queries::parts::{insert_part, query_by_category, query_low_accuracy, PartRow};
pub use queries::stats::{AccuracyStats, CategoryAccuracy};
