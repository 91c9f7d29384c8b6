//! Error handling for Roster.
//! One error enum per subsystem, `thiserror` only, aggregated into `RosterError`.

pub mod config_error;
pub mod embedding_error;
pub mod error_code;
pub mod retrieval_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use error_code::RosterErrorCode;
pub use retrieval_error::RetrievalError;
pub use validation_error::ValidationError;

/// Top-level error for every fallible engine operation.
///
/// Build-time failures arrive as `Validation`/`Embedding` and abort the whole
/// load. Query-time failures arrive as `Retrieval` and are scoped to the
/// single request.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RosterError {
    /// Whether this error is a bad-identifier failure at query time.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Retrieval(e) if e.is_not_found())
    }

    /// Whether this error is a malformed request.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::Retrieval(RetrievalError::InvalidRequest { .. }))
    }

    /// Whether this error rejected a build batch.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl RosterErrorCode for RosterError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Retrieval(e) => e.error_code(),
            Self::Embedding(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type RosterResult<T> = Result<T, RosterError>;
