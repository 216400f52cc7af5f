//! Storage errors.

use super::error_code::{self, PartlexErrorCode};

/// Errors from the SQLite persistence adapter.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Migration v{version} failed: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("I/O error reading {path}: {message}")]
    Io { path: String, message: String },
}

impl PartlexErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        error_code::STORAGE_ERROR
    }
}
