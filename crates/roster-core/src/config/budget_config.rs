use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{EntityKind, ResultBudget};

/// Default per-kind result caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    pub characters: usize,
    pub adversaries: usize,
    pub teams: usize,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            characters: defaults::DEFAULT_CHARACTER_BUDGET,
            adversaries: defaults::DEFAULT_ADVERSARY_BUDGET,
            teams: defaults::DEFAULT_TEAM_BUDGET,
        }
    }
}

impl BudgetConfig {
    pub fn cap(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Character => self.characters,
            EntityKind::Adversary => self.adversaries,
            EntityKind::Team => self.teams,
        }
    }

    /// Caps for one request: request overrides win over these defaults.
    pub fn resolve(&self, overrides: Option<&ResultBudget>) -> BudgetConfig {
        let pick = |kind: EntityKind| {
            overrides
                .and_then(|o| o.get(kind))
                .unwrap_or_else(|| self.cap(kind))
        };
        BudgetConfig {
            characters: pick(EntityKind::Character),
            adversaries: pick(EntityKind::Adversary),
            teams: pick(EntityKind::Team),
        }
    }
}
