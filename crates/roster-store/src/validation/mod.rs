//! Per-kind validation: plain raw values in, typed records or a
//! `ValidationError` naming the record and field out.

mod adversary;
mod character;
mod team;

pub use adversary::validate_adversary;
pub use character::validate_character;
pub use team::validate_team;

use std::collections::BTreeSet;

use roster_core::errors::ValidationError;
use roster_core::models::EntityKind;

/// The record under validation, for error reporting.
#[derive(Debug, Clone)]
pub(crate) struct RecordCtx {
    pub kind: EntityKind,
    pub record_id: String,
}

impl RecordCtx {
    /// Context for a raw record; blank identifiers are reported by position.
    pub fn new(kind: EntityKind, raw_id: &str, position: usize) -> Self {
        let trimmed = raw_id.trim();
        let record_id = if trimmed.is_empty() {
            format!("#{position}")
        } else {
            trimmed.to_string()
        };
        Self { kind, record_id }
    }

    pub fn missing(&self, field: &'static str) -> ValidationError {
        ValidationError::MissingField {
            kind: self.kind,
            record_id: self.record_id.clone(),
            field,
        }
    }

    pub fn violated(&self, field: &'static str, reason: impl Into<String>) -> ValidationError {
        ValidationError::ConstraintViolated {
            kind: self.kind,
            record_id: self.record_id.clone(),
            field,
            reason: reason.into(),
        }
    }

    /// A required, non-blank string field.
    pub fn required(&self, field: &'static str, value: &str) -> Result<String, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Err(self.missing(field))
        } else {
            Ok(trimmed.to_string())
        }
    }

    /// A single closed-vocabulary token.
    pub fn token<T>(
        &self,
        field: &'static str,
        raw: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, ValidationError> {
        parse(raw).ok_or_else(|| ValidationError::UnknownToken {
            kind: self.kind,
            record_id: self.record_id.clone(),
            field,
            token: raw.to_string(),
        })
    }

    /// An optional token: absent or blank is `None`, anything else must parse.
    pub fn optional_token<T>(
        &self,
        field: &'static str,
        raw: Option<&String>,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>, ValidationError> {
        match raw.map(|s| s.trim()).filter(|s| !s.is_empty()) {
            Some(token) => self.token(field, token, parse).map(Some),
            None => Ok(None),
        }
    }

    /// A set of tokens; duplicates collapse, unknown tokens fail.
    pub fn token_set<T: Ord>(
        &self,
        field: &'static str,
        raws: &[String],
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<BTreeSet<T>, ValidationError> {
        raws.iter().map(|raw| self.token(field, raw, &parse)).collect()
    }
}

/// Trimmed, non-blank optional text.
pub(crate) fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Trimmed, non-blank list entries.
pub(crate) fn clean_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
