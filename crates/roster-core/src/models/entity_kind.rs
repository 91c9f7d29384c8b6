use std::fmt;

use serde::{Deserialize, Serialize};

/// The three record kinds held by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Character,
    Adversary,
    Team,
}

impl EntityKind {
    /// All kinds, in the order bundles report them.
    pub const ALL: [EntityKind; 3] = [Self::Character, Self::Adversary, Self::Team];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Adversary => "adversary",
            Self::Team => "team",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
