//! Storage adapter configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file path. None = in-memory (tests).
    pub db_path: Option<PathBuf>,
    /// SQLite busy timeout in milliseconds.
    pub busy_timeout_ms: u32,
    /// Records per bulk-insert transaction during import.
    pub import_batch_size: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            busy_timeout_ms: 5_000,
            import_batch_size: 500,
        }
    }
}
