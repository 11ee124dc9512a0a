//! AcsErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so front ends can report a stable
/// code next to the human-readable message.
pub trait AcsErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted tagged string: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const NOTHING_TO_EXECUTE: &str = "NOTHING_TO_EXECUTE";
pub const SELECTION_ERROR: &str = "SELECTION_ERROR";
pub const EL3_PARAM_ERROR: &str = "EL3_PARAM_ERROR";
pub const PE_ERROR: &str = "PE_ERROR";
