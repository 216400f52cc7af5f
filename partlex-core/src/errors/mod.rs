//! Error handling for Partlex.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod lexicon_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::PartlexErrorCode;
pub use lexicon_error::LexiconError;
pub use storage_error::StorageError;
