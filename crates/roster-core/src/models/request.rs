//! Retrieval request shape.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::entity_kind::EntityKind;
use super::vocab::{Role, Tier, TierRegion, Weakness};

/// Structured constraints carried by a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    pub weaknesses: BTreeSet<Weakness>,
    pub roles: BTreeSet<Role>,
    pub min_tier: Option<Tier>,
}

impl Constraints {
    pub fn is_empty(&self) -> bool {
        self.weaknesses.is_empty() && self.roles.is_empty() && self.min_tier.is_none()
    }
}

/// Per-kind result caps. Unset caps fall back to the configured defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultBudget {
    pub characters: Option<usize>,
    pub adversaries: Option<usize>,
    pub teams: Option<usize>,
}

impl ResultBudget {
    pub fn get(&self, kind: EntityKind) -> Option<usize> {
        match kind {
            EntityKind::Character => self.characters,
            EntityKind::Adversary => self.adversaries,
            EntityKind::Team => self.teams,
        }
    }
}

/// A retrieval request. At least one of `anchor_id` or `free_text` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalRequest {
    pub anchor_id: Option<String>,
    /// Restricts anchor resolution to one kind; otherwise adversaries are
    /// tried first, then characters, then teams.
    pub anchor_kind: Option<EntityKind>,
    pub free_text: Option<String>,
    pub constraints: Constraints,
    pub result_budget: Option<ResultBudget>,
    /// Characters the caller owns; semantic candidates outside it are dropped.
    pub available_characters: Option<BTreeSet<String>>,
    pub tier_region: TierRegion,
}

impl RetrievalRequest {
    pub fn for_anchor(anchor_id: impl Into<String>) -> Self {
        Self {
            anchor_id: Some(anchor_id.into()),
            ..Default::default()
        }
    }

    pub fn for_text(free_text: impl Into<String>) -> Self {
        Self {
            free_text: Some(free_text.into()),
            ..Default::default()
        }
    }

    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_budget(mut self, budget: ResultBudget) -> Self {
        self.result_budget = Some(budget);
        self
    }

    /// Anchor identifier, ignoring blank strings.
    pub fn anchor(&self) -> Option<&str> {
        self.anchor_id.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Free text, ignoring blank strings.
    pub fn text(&self) -> Option<&str> {
        self.free_text.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}
