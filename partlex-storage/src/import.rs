//! Bulk import of classified records.
//!
//! The original catalog arrives as a plain text file, one description per
//! line. Classification stays the engine's business; this module takes the
//! resulting records and lands them in batched IMMEDIATE transactions.

use std::time::{SystemTime, UNIX_EPOCH};

use partlex_core::errors::StorageError;
use partlex_core::types::PartRecord;
use tracing::info;

use crate::connection::writer::with_immediate_transaction;
use crate::connection::DatabaseManager;
use crate::queries::parts::insert_part;

const DEFAULT_BATCH_SIZE: usize = 500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub inserted: usize,
    pub skipped_blank: usize,
}

/// Inserts records in batches of `batch_size` (0 means the default), each
/// batch inside one IMMEDIATE transaction.
pub fn import_records(
    db: &DatabaseManager,
    records: &[PartRecord],
    batch_size: usize,
) -> Result<ImportReport, StorageError> {
    let batch_size = if batch_size == 0 {
        DEFAULT_BATCH_SIZE
    } else {
        batch_size
    };
    let created_at = now_epoch_secs();

    let mut inserted = 0usize;
    for chunk in records.chunks(batch_size) {
        db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                for record in chunk {
                    insert_part(tx, record, created_at)?;
                }
                Ok(())
            })
        })?;
        inserted += chunk.len();
        info!(inserted, total = records.len(), "import progress");
    }

    Ok(ImportReport {
        inserted,
        skipped_blank: 0,
    })
}

/// Classifies and imports a line file. Blank lines are counted and skipped
/// rather than stored as empty records.
pub fn import_lines<F>(
    db: &DatabaseManager,
    lines: impl IntoIterator<Item = String>,
    batch_size: usize,
    classify: F,
) -> Result<ImportReport, StorageError>
where
    F: Fn(&str) -> PartRecord,
{
    let mut records = Vec::new();
    let mut skipped_blank = 0usize;
    for line in lines {
        if line.trim().is_empty() {
            skipped_blank += 1;
            continue;
        }
        records.push(classify(&line));
    }

    let mut report = import_records(db, &records, batch_size)?;
    report.skipped_blank = skipped_blank;
    Ok(report)
}

fn now_epoch_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
