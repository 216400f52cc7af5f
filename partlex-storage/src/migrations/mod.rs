//! Numbered schema migrations gated on `PRAGMA user_version`.

pub mod v001_initial;

use partlex_core::errors::StorageError;
use rusqlite::Connection;
use tracing::info;

const MIGRATIONS: &[(i64, &str)] = &[(1, v001_initial::MIGRATION_SQL)];

/// Applies every migration above the database's current `user_version`,
/// each inside its own transaction, bumping the version as it goes.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current: i64 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: format!("read user_version: {e}"),
        })?;

    for &(version, sql) in MIGRATIONS {
        if version <= current {
            continue;
        }
        conn.execute_batch(&format!(
            "BEGIN;
             {sql}
             PRAGMA user_version = {version};
             COMMIT;"
        ))
        .map_err(|e| StorageError::MigrationFailed {
            version: version as u32,
            message: e.to_string(),
        })?;
        info!(version, "applied migration");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
        let version: i64 = conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, 1);
    }
}
