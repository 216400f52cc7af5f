//! V001: the `car_parts` table.
//! One row per classified description. List-shaped fields are JSON text;
//! scalar fields stay as columns so the statistics queries can index them.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS car_parts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    raw_text TEXT NOT NULL,
    category TEXT,
    category_term TEXT,
    brands TEXT NOT NULL,
    models TEXT NOT NULL,
    model_years TEXT NOT NULL,
    year_from INTEGER,
    year_to INTEGER,
    drive_type TEXT,
    position TEXT,
    side TEXT,
    engine_code TEXT,
    engine_displacement REAL,
    engine_type TEXT,
    dimension_value REAL,
    dimension_kind TEXT,
    confidences TEXT NOT NULL,
    accuracy REAL NOT NULL,
    created_at INTEGER NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_car_parts_category
    ON car_parts(category);
CREATE INDEX IF NOT EXISTS idx_car_parts_accuracy
    ON car_parts(accuracy);
CREATE INDEX IF NOT EXISTS idx_car_parts_year_from
    ON car_parts(year_from) WHERE year_from IS NOT NULL;
CREATE INDEX IF NOT EXISTS idx_car_parts_engine_code
    ON car_parts(engine_code) WHERE engine_code IS NOT NULL;
"#;
