use crate::models::EntityKind;

use super::error_code::{self, RosterErrorCode};

/// Query-time errors. Each is fatal to one request only.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RetrievalError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: EntityKind, id: String },

    #[error("anchor '{id}' matches no adversary, character, or team")]
    AnchorNotFound { id: String },

    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },
}

impl RetrievalError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::AnchorNotFound { .. })
    }
}

impl RosterErrorCode for RetrievalError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } | Self::AnchorNotFound { .. } => error_code::NOT_FOUND,
            Self::InvalidRequest { .. } => error_code::INVALID_REQUEST,
        }
    }
}
