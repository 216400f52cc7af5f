//! Accuracy statistics over the stored records.

use partlex_core::errors::StorageError;
use rusqlite::{params, Connection};

/// Distribution of overall accuracy across five equal buckets, plus the
/// per-field confidence means. The operator's view of how well the lexicon
/// fits the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccuracyStats {
    pub total: i64,
    pub mean_accuracy: f64,
    /// Counts for [0.0,0.2), [0.2,0.4), [0.4,0.6), [0.6,0.8), [0.8,1.0].
    pub buckets: [i64; 5],
    pub mean_category: f64,
    pub mean_models: f64,
    pub mean_position: f64,
    pub mean_drive_type: f64,
    pub mean_years: f64,
    pub mean_dimensions: f64,
    pub mean_engine: f64,
}

/// Mean accuracy for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAccuracy {
    pub category: String,
    pub count: i64,
    pub mean_accuracy: f64,
}

pub fn accuracy_stats(conn: &Connection) -> Result<AccuracyStats, StorageError> {
    let mut stats = conn
        .query_row(
            "SELECT
                COUNT(*),
                COALESCE(AVG(accuracy), 0.0),
                COALESCE(AVG(json_extract(confidences, '$.category')), 0.0),
                COALESCE(AVG(json_extract(confidences, '$.models')), 0.0),
                COALESCE(AVG(json_extract(confidences, '$.position')), 0.0),
                COALESCE(AVG(json_extract(confidences, '$.drive_type')), 0.0),
                COALESCE(AVG(json_extract(confidences, '$.years')), 0.0),
                COALESCE(AVG(json_extract(confidences, '$.dimensions')), 0.0),
                COALESCE(AVG(json_extract(confidences, '$.engine')), 0.0)
             FROM car_parts",
            [],
            |row| {
                Ok(AccuracyStats {
                    total: row.get(0)?,
                    mean_accuracy: row.get(1)?,
                    buckets: [0; 5],
                    mean_category: row.get(2)?,
                    mean_models: row.get(3)?,
                    mean_position: row.get(4)?,
                    mean_drive_type: row.get(5)?,
                    mean_years: row.get(6)?,
                    mean_dimensions: row.get(7)?,
                    mean_engine: row.get(8)?,
                })
            },
        )
        .map_err(sqlite_err)?;

    let mut stmt = conn
        .prepare_cached(
            "SELECT MIN(CAST(accuracy * 5 AS INTEGER), 4) AS bucket, COUNT(*)
             FROM car_parts GROUP BY bucket",
        )
        .map_err(sqlite_err)?;
    let rows = stmt
        .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)))
        .map_err(sqlite_err)?;
    for row in rows {
        let (bucket, count) = row.map_err(sqlite_err)?;
        if (0..5).contains(&bucket) {
            stats.buckets[bucket as usize] = count;
        }
    }

    Ok(stats)
}

/// Mean accuracy per category, largest categories first.
pub fn category_accuracy(
    conn: &Connection,
    limit: usize,
) -> Result<Vec<CategoryAccuracy>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT category, COUNT(*), AVG(accuracy)
             FROM car_parts
             WHERE category IS NOT NULL
             GROUP BY category
             ORDER BY COUNT(*) DESC
             LIMIT ?1",
        )
        .map_err(sqlite_err)?;
    let rows = stmt
        .query_map(params![limit as i64], |row| {
            Ok(CategoryAccuracy {
                category: row.get(0)?,
                count: row.get(1)?,
                mean_accuracy: row.get(2)?,
            })
        })
        .map_err(sqlite_err)?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row.map_err(sqlite_err)?);
    }
    Ok(out)
}

fn sqlite_err(e: rusqlite::Error) -> StorageError {
    StorageError::SqliteError {
        message: e.to_string(),
    }
}
