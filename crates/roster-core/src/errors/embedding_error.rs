use super::error_code::{self, RosterErrorCode};

/// Embedding subsystem errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmbeddingError {
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("provider {provider} failed: {reason}")]
    ProviderFailed { provider: String, reason: String },

    #[error("provider {provider} returned a non-finite component")]
    NonFinite { provider: String },
}

impl RosterErrorCode for EmbeddingError {
    fn error_code(&self) -> &'static str {
        error_code::EMBEDDING_ERROR
    }
}
