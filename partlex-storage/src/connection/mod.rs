//! Connection management: write-serialized + read-pooled.

pub mod pool;
pub mod pragmas;
pub mod writer;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use partlex_core::config::StorageConfig;
use partlex_core::errors::StorageError;
use rusqlite::Connection;

use self::pool::ReadPool;
use self::pragmas::apply_pragmas;
use crate::migrations;

/// Manages the single write connection and the read connection pool.
pub struct DatabaseManager {
    writer: Mutex<Connection>,
    readers: Option<ReadPool>,
    path: Option<PathBuf>,
}

impl DatabaseManager {
    /// Opens a database at the given path, applies pragmas, runs migrations.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        Self::open_at(path, &StorageConfig::default())
    }

    /// Opens per the storage config: `db_path` when set, in-memory otherwise.
    pub fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        match &config.db_path {
            Some(path) => Self::open_at(path, config),
            None => Self::open_in_memory_with(config),
        }
    }

    /// Opens an in-memory database. Reads share the writer connection, since
    /// a second connection would see a different database.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::open_in_memory_with(&StorageConfig::default())
    }

    fn open_at(path: &Path, config: &StorageConfig) -> Result<Self, StorageError> {
        let writer = Connection::open(path).map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
        apply_pragmas(&writer, config.busy_timeout_ms)?;
        migrations::run_migrations(&writer)?;

        let readers = ReadPool::open(path, ReadPool::default_size(), config.busy_timeout_ms)?;

        Ok(Self {
            writer: Mutex::new(writer),
            readers: Some(readers),
            path: Some(path.to_path_buf()),
        })
    }

    fn open_in_memory_with(config: &StorageConfig) -> Result<Self, StorageError> {
        let writer = Connection::open_in_memory().map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
        apply_pragmas(&writer, config.busy_timeout_ms)?;
        migrations::run_migrations(&writer)?;

        Ok(Self {
            writer: Mutex::new(writer),
            readers: None,
            path: None,
        })
    }

    /// Executes a write operation on the serialized writer connection.
    pub fn with_writer<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let guard = self.writer.lock().map_err(|_| StorageError::SqliteError {
            message: "write lock poisoned".to_string(),
        })?;
        f(&guard)
    }

    /// Executes a read operation on a pooled read connection.
    pub fn with_reader<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        match &self.readers {
            Some(pool) => pool.with_conn(f),
            None => self.with_writer(f),
        }
    }

    /// Runs a WAL checkpoint (TRUNCATE mode) after a bulk import.
    pub fn checkpoint(&self) -> Result<(), StorageError> {
        self.with_writer(|conn| {
            conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")
                .map_err(|e| StorageError::SqliteError {
                    message: e.to_string(),
                })
        })
    }

    /// The database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
