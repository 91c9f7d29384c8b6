use crate::models::EntityKind;

use super::error_code::{self, RosterErrorCode};

/// Build-time record validation errors.
///
/// Any one of these rejects the entire batch; the store that was serving
/// before the load keeps serving.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{kind} '{record_id}': missing required field `{field}`")]
    MissingField {
        kind: EntityKind,
        record_id: String,
        field: &'static str,
    },

    #[error("{kind} '{record_id}': unknown token '{token}' in `{field}`")]
    UnknownToken {
        kind: EntityKind,
        record_id: String,
        field: &'static str,
        token: String,
    },

    #[error("{kind} '{record_id}': `{field}` {reason}")]
    ConstraintViolated {
        kind: EntityKind,
        record_id: String,
        field: &'static str,
        reason: String,
    },

    #[error("{kind} '{record_id}': duplicate identifier")]
    DuplicateId { kind: EntityKind, record_id: String },

    #[error("{kind} '{record_id}': `{field}` references unknown {target_kind} '{target_id}'")]
    UnresolvedReference {
        kind: EntityKind,
        record_id: String,
        field: &'static str,
        target_kind: EntityKind,
        target_id: String,
    },

    #[error(
        "adversary '{record_id}': `variant_rank` {rank} under base '{base_id}' is already used by '{other_id}'"
    )]
    DuplicateVariantRank {
        record_id: String,
        base_id: String,
        rank: u32,
        other_id: String,
    },

    #[error("malformed record source {source_name}: {reason}")]
    Malformed { source_name: String, reason: String },
}

impl ValidationError {
    /// Identifier of the offending record, when one could be determined.
    pub fn record_id(&self) -> Option<&str> {
        match self {
            Self::MissingField { record_id, .. }
            | Self::UnknownToken { record_id, .. }
            | Self::ConstraintViolated { record_id, .. }
            | Self::DuplicateId { record_id, .. }
            | Self::UnresolvedReference { record_id, .. }
            | Self::DuplicateVariantRank { record_id, .. } => Some(record_id),
            Self::Malformed { .. } => None,
        }
    }

    /// Name of the offending field, when the failure is field-scoped.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field, .. }
            | Self::UnknownToken { field, .. }
            | Self::ConstraintViolated { field, .. }
            | Self::UnresolvedReference { field, .. } => Some(field),
            Self::DuplicateId { .. } => Some("id"),
            Self::DuplicateVariantRank { .. } => Some("variant_rank"),
            Self::Malformed { .. } => None,
        }
    }
}

impl RosterErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
