//! Stable error codes for callers at a process boundary.

/// Every error enum implements this to expose a structured code string.
pub trait RosterErrorCode {
    /// Returns the error code string (e.g., "NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged error string: `[ERROR_CODE] message`.
    fn tagged(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
pub const EMBEDDING_ERROR: &str = "EMBEDDING_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
