//! Tests for the Partlex configuration system.

use std::sync::Mutex;

use partlex_core::config::PartlexConfig;
use partlex_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_partlex_env_vars() {
    for key in [
        "PARTLEX_ENGINE_PROXIMITY_WINDOW",
        "PARTLEX_ENGINE_YEAR_CEILING",
        "PARTLEX_ENGINE_THREADS",
        "PARTLEX_STORAGE_DB_PATH",
        "PARTLEX_STORAGE_BUSY_TIMEOUT_MS",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution_env_over_project() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_partlex_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("partlex.toml"),
        r#"
[engine]
proximity_window_chars = 20
year_ceiling = 2030
"#,
    )
    .unwrap();

    std::env::set_var("PARTLEX_ENGINE_PROXIMITY_WINDOW", "25");

    let config = PartlexConfig::load(dir.path()).unwrap();

    // Env overrides project for the window; project value survives for the ceiling
    assert_eq!(config.engine.proximity_window_chars, 25);
    assert_eq!(config.engine.year_ceiling, 2030);

    clear_partlex_env_vars();
}

#[test]
fn test_load_missing_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_partlex_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let config = PartlexConfig::load(dir.path()).unwrap();

    assert_eq!(config.engine.proximity_window_chars, 15);
    assert_eq!(config.engine.year_ceiling, 2025);
    assert!((config.engine.weights.sum() - 1.0).abs() < 1e-9);
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let result = PartlexConfig::from_toml("engine = not-a-table");
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_weights_must_sum_to_one() {
    let result = PartlexConfig::from_toml(
        r#"
[engine.weights]
category = 0.9
models = 0.9
"#,
    );
    assert!(matches!(result, Err(ConfigError::ValidationFailed { field, .. }) if field == "engine.weights"));
}

#[test]
fn test_zero_window_rejected() {
    let result = PartlexConfig::from_toml(
        r#"
[engine]
proximity_window_chars = 0
"#,
    );
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_toml_round_trip() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let config = PartlexConfig::default();
    let toml_str = config.to_toml().unwrap();
    let parsed = PartlexConfig::from_toml(&toml_str).unwrap();
    assert_eq!(parsed, config);
}
