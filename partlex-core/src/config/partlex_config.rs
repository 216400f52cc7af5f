//! Top-level Partlex configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{EngineConfig, StorageConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PARTLEX_*`)
/// 2. Project config (`partlex.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PartlexConfig {
    pub engine: EngineConfig,
    pub storage: StorageConfig,
}

impl PartlexConfig {
    /// Load configuration with layered resolution, then validate.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join("partlex.toml");
        let mut config = if project_config_path.exists() {
            let content = std::fs::read_to_string(&project_config_path).map_err(|_| {
                ConfigError::FileNotFound {
                    path: project_config_path.display().to_string(),
                }
            })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: project_config_path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    ///
    /// Validation is structural only. The confidence constants were tuned
    /// by hand against real catalog data and are never "corrected" here.
    pub fn validate(config: &PartlexConfig) -> Result<(), ConfigError> {
        let weight_sum = config.engine.weights.sum();
        if (weight_sum - 1.0).abs() > 1e-6 {
            return Err(ConfigError::ValidationFailed {
                field: "engine.weights".to_string(),
                message: format!("must sum to 1.0, got {weight_sum}"),
            });
        }
        if config.engine.proximity_window_chars == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "engine.proximity_window_chars".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.engine.displacement_min >= config.engine.displacement_max {
            return Err(ConfigError::ValidationFailed {
                field: "engine.displacement_min".to_string(),
                message: "must be below engine.displacement_max".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&config.engine.coverage_bonus_max) {
            return Err(ConfigError::ValidationFailed {
                field: "engine.coverage_bonus_max".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&config.engine.coverage_threshold) {
            return Err(ConfigError::ValidationFailed {
                field: "engine.coverage_threshold".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        if config.storage.import_batch_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "storage.import_batch_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `PARTLEX_ENGINE_PROXIMITY_WINDOW`, `PARTLEX_STORAGE_DB_PATH`, etc.
    fn apply_env_overrides(config: &mut PartlexConfig) {
        if let Ok(val) = std::env::var("PARTLEX_ENGINE_PROXIMITY_WINDOW") {
            if let Ok(v) = val.parse::<usize>() {
                config.engine.proximity_window_chars = v;
            }
        }
        if let Ok(val) = std::env::var("PARTLEX_ENGINE_YEAR_CEILING") {
            if let Ok(v) = val.parse::<i32>() {
                config.engine.year_ceiling = v;
            }
        }
        if let Ok(val) = std::env::var("PARTLEX_ENGINE_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.engine.threads = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PARTLEX_STORAGE_DB_PATH") {
            config.storage.db_path = Some(val.into());
        }
        if let Ok(val) = std::env::var("PARTLEX_STORAGE_BUSY_TIMEOUT_MS") {
            if let Ok(v) = val.parse::<u32>() {
                config.storage.busy_timeout_ms = v;
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
