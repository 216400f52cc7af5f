//! IMMEDIATE-transaction helper for the write connection.

use partlex_core::errors::StorageError;
use rusqlite::{Connection, Transaction, TransactionBehavior};

/// Runs a write operation inside one IMMEDIATE transaction. The write lock
/// is taken at BEGIN rather than at the first write statement, so a bulk
/// insert never discovers a busy database halfway through its batch. An
/// error from the operation rolls the whole transaction back on drop.
pub fn with_immediate_transaction<F, T>(conn: &Connection, f: F) -> Result<T, StorageError>
where
    F: FnOnce(&Transaction<'_>) -> Result<T, StorageError>,
{
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate).map_err(|e| {
        StorageError::SqliteError {
            message: format!("begin immediate: {e}"),
        }
    })?;

    let result = f(&tx)?;

    tx.commit().map_err(|e| StorageError::SqliteError {
        message: format!("commit: {e}"),
    })?;

    Ok(result)
}
