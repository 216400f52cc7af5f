//! CRUD over classified part rows.

use partlex_core::errors::StorageError;
use partlex_core::types::{
    Dimension, DimensionKind, DriveType, EngineType, FieldConfidences, ModelRef, ModelYearRange,
    PartRecord, YearRange,
};
use rusqlite::{params, Connection, Row};

/// One `car_parts` row, hydrated back into a record.
#[derive(Debug, Clone)]
pub struct PartRow {
    pub id: i64,
    pub record: PartRecord,
    pub created_at: i64,
}

/// Inserts one record. Returns the row id.
pub fn insert_part(
    conn: &Connection,
    record: &PartRecord,
    created_at: i64,
) -> Result<i64, StorageError> {
    let brands = to_json(&record.brands)?;
    let models = to_json(&record.models)?;
    let model_years = to_json(&record.model_years)?;
    let confidences = to_json(&record.confidences)?;

    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO car_parts (
                raw_text, category, category_term, brands, models, model_years,
                year_from, year_to, drive_type, position, side,
                engine_code, engine_displacement, engine_type,
                dimension_value, dimension_kind, confidences, accuracy, created_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19)",
        )
        .map_err(sqlite_err)?;

    stmt.execute(params![
        record.raw_text,
        record.category,
        record.category_term,
        brands,
        models,
        model_years,
        record.general_years.from,
        record.general_years.to,
        record.drive_type.map(|d| d.token()),
        record.position,
        record.side,
        record.engine_code,
        record.engine_displacement,
        record.engine_type.map(|t| t.name()),
        record.dimension.map(|d| d.value),
        record.dimension.map(|d| d.kind.name()),
        confidences,
        record.accuracy,
        created_at,
    ])
    .map_err(sqlite_err)?;

    Ok(conn.last_insert_rowid())
}

/// Fetches one row by id.
pub fn get_part(conn: &Connection, id: i64) -> Result<Option<PartRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!("{SELECT_COLUMNS} WHERE id = ?1"))
        .map_err(sqlite_err)?;
    let mut rows = stmt
        .query_map(params![id], row_to_part)
        .map_err(sqlite_err)?;
    match rows.next() {
        Some(row) => Ok(Some(row.map_err(sqlite_err)?)),
        None => Ok(None),
    }
}

/// All rows of a category, newest first.
pub fn query_by_category(
    conn: &Connection,
    category: &str,
    limit: usize,
) -> Result<Vec<PartRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "{SELECT_COLUMNS} WHERE category = ?1 ORDER BY id DESC LIMIT ?2"
        ))
        .map_err(sqlite_err)?;
    collect(stmt.query_map(params![category, limit as i64], row_to_part))
}

/// Rows under an accuracy threshold, worst first. The review queue for
/// descriptions the classifier is unsure about.
pub fn query_low_accuracy(
    conn: &Connection,
    threshold: f64,
    limit: usize,
) -> Result<Vec<PartRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "{SELECT_COLUMNS} WHERE accuracy < ?1 ORDER BY accuracy ASC LIMIT ?2"
        ))
        .map_err(sqlite_err)?;
    collect(stmt.query_map(params![threshold, limit as i64], row_to_part))
}

pub fn count_parts(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM car_parts", [], |row| row.get(0))
        .map_err(sqlite_err)
}

const SELECT_COLUMNS: &str = "SELECT id, raw_text, category, category_term, brands, models, \
     model_years, year_from, year_to, drive_type, position, side, engine_code, \
     engine_displacement, engine_type, dimension_value, dimension_kind, \
     confidences, accuracy, created_at FROM car_parts";

fn row_to_part(row: &Row<'_>) -> rusqlite::Result<PartRow> {
    let brands: String = row.get(4)?;
    let models: String = row.get(5)?;
    let model_years: String = row.get(6)?;
    let confidences: String = row.get(17)?;

    let drive_type: Option<String> = row.get(9)?;
    let engine_type: Option<String> = row.get(14)?;
    let dimension_value: Option<f64> = row.get(15)?;
    let dimension_kind: Option<String> = row.get(16)?;

    let record = PartRecord {
        raw_text: row.get(1)?,
        category: row.get(2)?,
        category_term: row.get(3)?,
        brands: from_json_column(&brands, 4)?,
        models: from_json_column::<Vec<ModelRef>>(&models, 5)?,
        model_years: from_json_column::<Vec<ModelYearRange>>(&model_years, 6)?,
        general_years: YearRange {
            from: row.get(7)?,
            to: row.get(8)?,
        },
        drive_type: drive_type.as_deref().map(parse_drive),
        position: row.get(10)?,
        side: row.get(11)?,
        engine_code: row.get(12)?,
        engine_displacement: row.get(13)?,
        engine_type: engine_type.as_deref().and_then(parse_engine_type),
        dimension: match (dimension_value, dimension_kind.as_deref()) {
            (Some(value), Some(kind)) => Some(Dimension {
                value,
                kind: parse_dimension_kind(kind),
            }),
            _ => None,
        },
        confidences: from_json_column::<FieldConfidences>(&confidences, 17)?,
        accuracy: row.get(18)?,
    };

    Ok(PartRow {
        id: row.get(0)?,
        record,
        created_at: row.get(19)?,
    })
}

fn parse_drive(token: &str) -> DriveType {
    if token == "4x4" {
        DriveType::FourWheel
    } else {
        DriveType::TwoWheel
    }
}

fn parse_engine_type(name: &str) -> Option<EngineType> {
    match name {
        "Diesel" => Some(EngineType::Diesel),
        "Gasoline" => Some(EngineType::Gasoline),
        "Hybrid" => Some(EngineType::Hybrid),
        _ => None,
    }
}

fn parse_dimension_kind(name: &str) -> DimensionKind {
    match name {
        "length" => DimensionKind::BeltLength,
        "diameter" => DimensionKind::Diameter,
        "engine displacement" => DimensionKind::Displacement,
        _ => DimensionKind::Millimeters,
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(|e| StorageError::SqliteError {
        message: format!("serialize column: {e}"),
    })
}

fn from_json_column<T: serde::de::DeserializeOwned>(
    json: &str,
    column: usize,
) -> rusqlite::Result<T> {
    serde_json::from_str(json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            column,
            rusqlite::types::Type::Text,
            Box::new(e),
        )
    })
}

fn collect(
    rows: rusqlite::Result<rusqlite::MappedRows<'_, impl FnMut(&Row<'_>) -> rusqlite::Result<PartRow>>>,
) -> Result<Vec<PartRow>, StorageError> {
    let rows = rows.map_err(sqlite_err)?;
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
