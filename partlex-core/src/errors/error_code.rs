//! Stable string error codes, one per subsystem.

pub const LEXICON_ERROR: &str = "PLX-LEX";
pub const CONFIG_ERROR: &str = "PLX-CFG";
pub const STORAGE_ERROR: &str = "PLX-STO";

/// Maps an error to its stable subsystem code.
///
/// Codes are part of the external contract (log scraping, issue triage)
/// and must never change once shipped.
pub trait PartlexErrorCode {
    fn error_code(&self) -> &'static str;
}
