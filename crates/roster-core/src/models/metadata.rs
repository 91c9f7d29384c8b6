//! Attribute tuples stored beside each vector, and the filters over them.

use std::collections::BTreeSet;

use serde::Serialize;

use super::character::RegionTiers;
use super::vocab::{Role, Tier, TierRegion, Weakness};

/// Filterable attributes of one indexed entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexMetadata {
    pub roles: BTreeSet<Role>,
    pub weaknesses: BTreeSet<Weakness>,
    pub tiers: RegionTiers,
}

/// Metadata constraints applied before similarity ranking.
///
/// Set-valued constraints are any-of: an entity passes when it shares at
/// least one token with each non-empty set. `min_tier` rejects entities with
/// no rating in either region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataFilter {
    pub weaknesses: BTreeSet<Weakness>,
    pub roles: BTreeSet<Role>,
    pub min_tier: Option<Tier>,
    pub region: TierRegion,
}

impl MetadataFilter {
    pub fn is_empty(&self) -> bool {
        self.weaknesses.is_empty() && self.roles.is_empty() && self.min_tier.is_none()
    }

    pub fn matches(&self, metadata: &IndexMetadata) -> bool {
        if !self.weaknesses.is_empty() && self.weaknesses.is_disjoint(&metadata.weaknesses) {
            return false;
        }
        if !self.roles.is_empty() && self.roles.is_disjoint(&metadata.roles) {
            return false;
        }
        if let Some(min) = self.min_tier {
            match metadata.tiers.effective(self.region) {
                Some(tier) if tier.meets(min) => {}
                _ => return false,
            }
        }
        true
    }
}
