//! Connection pragmas.

use partlex_core::errors::StorageError;
use rusqlite::Connection;

/// Pragmas for the write connection: WAL for concurrent readers, NORMAL
/// synchronous (safe under WAL), foreign keys on, and a busy timeout so a
/// concurrent writer waits instead of failing.
pub fn apply_pragmas(conn: &Connection, busy_timeout_ms: u32) -> Result<(), StorageError> {
    conn.execute_batch(&format!(
        "PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA foreign_keys = ON;
         PRAGMA busy_timeout = {busy_timeout_ms};
         PRAGMA temp_store = MEMORY;"
    ))
    .map_err(|e| StorageError::SqliteError {
        message: format!("apply pragmas: {e}"),
    })
}

/// Pragmas for read-only pool connections.
pub fn apply_read_pragmas(conn: &Connection, busy_timeout_ms: u32) -> Result<(), StorageError> {
    conn.execute_batch(&format!(
        "PRAGMA busy_timeout = {busy_timeout_ms};
         PRAGMA temp_store = MEMORY;"
    ))
    .map_err(|e| StorageError::SqliteError {
        message: format!("apply read pragmas: {e}"),
    })
}
