//! Layered configuration for the classification engine and storage adapter.

pub mod engine_config;
pub mod partlex_config;
pub mod storage_config;

pub use engine_config::{EngineConfig, FieldWeights};
pub use partlex_config::PartlexConfig;
pub use storage_config::StorageConfig;
