use std::collections::BTreeSet;

use serde::Serialize;

use super::character::{join_tokens, RegionTiers};
use super::metadata::IndexMetadata;
use super::vocab::{ContentType, DataConfidence, Difficulty, Role, Weakness};

/// Link from an escalated-difficulty variant to its base encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantLink {
    pub base_id: String,
    /// Strictly ordered and unique per `base_id`; higher is harder.
    pub rank: u32,
}

/// A named boss ability and how to answer it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mechanic {
    pub name: String,
    pub counter_strategy: Option<String>,
}

/// A validated, immutable adversary (boss/encounter) record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adversary {
    pub id: String,
    pub display_name: String,
    pub weaknesses: BTreeSet<Weakness>,
    pub variant: Option<VariantLink>,
    pub difficulty: Option<Difficulty>,
    pub content_type: Option<ContentType>,
    pub location: Option<String>,
    pub recommended_roles: BTreeSet<Role>,
    pub general_strategy: Option<String>,
    pub mechanics: Vec<Mechanic>,
    /// Free-text description of the encounter's mechanics.
    pub mechanics_description: String,
    pub data_confidence: DataConfidence,
}

impl Adversary {
    pub fn is_variant(&self) -> bool {
        self.variant.is_some()
    }

    pub fn base_id(&self) -> Option<&str> {
        self.variant.as_ref().map(|v| v.base_id.as_str())
    }

    pub fn embedding_text(&self) -> String {
        let mut parts = vec![self.display_name.clone()];

        if let Some(strategy) = &self.general_strategy {
            parts.push(strategy.clone());
        }
        if let Some(location) = &self.location {
            parts.push(format!("Location: {location}"));
        }
        if !self.weaknesses.is_empty() {
            parts.push(format!("Weak to: {}", join_tokens(&self.weaknesses)));
        }
        for mechanic in &self.mechanics {
            match &mechanic.counter_strategy {
                Some(counter) => parts.push(format!("{}: {}", mechanic.name, counter)),
                None => parts.push(mechanic.name.clone()),
            }
        }
        if !self.mechanics_description.is_empty() {
            parts.push(self.mechanics_description.clone());
        }

        parts.retain(|p| !p.is_empty());
        parts.join(" ")
    }

    pub fn index_metadata(&self) -> IndexMetadata {
        IndexMetadata {
            roles: self.recommended_roles.clone(),
            weaknesses: self.weaknesses.clone(),
            tiers: RegionTiers::default(),
        }
    }

    /// Whether the curators marked this record verified.
    pub fn is_verified(&self) -> bool {
        self.data_confidence == DataConfidence::Verified
    }
}
