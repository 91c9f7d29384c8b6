use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use super::metadata::IndexMetadata;
use super::vocab::{DataConfidence, Influence, Job, Role, Tier, TierRegion, Weakness};

/// Per-region tier ratings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegionTiers {
    pub jp: Option<Tier>,
    pub gl: Option<Tier>,
}

impl RegionTiers {
    pub fn get(&self, region: TierRegion) -> Option<Tier> {
        match region {
            TierRegion::Jp => self.jp,
            TierRegion::Gl => self.gl,
        }
    }

    /// Rating for `region`, falling back to the other region when unrated.
    pub fn effective(&self, region: TierRegion) -> Option<Tier> {
        self.get(region).or_else(|| self.get(region.other()))
    }
}

/// A validated, immutable character record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Character {
    pub id: String,
    pub display_name: String,
    pub job: Job,
    pub rarity: Option<u8>,
    pub influence: Option<Influence>,
    pub origin: Option<String>,
    /// Enemy weaknesses this character can hit (weapons and elements).
    pub weakness_coverage: BTreeSet<Weakness>,
    pub roles: BTreeSet<Role>,
    pub role_notes: Option<String>,
    pub tiers: RegionTiers,
    /// Skills, passives, and curator notes.
    pub description: String,
    pub best_use_cases: Vec<String>,
    pub limitations: Vec<String>,
    pub data_confidence: DataConfidence,
    pub last_updated: Option<NaiveDate>,
}

impl Character {
    pub fn primary_weapon(&self) -> Weakness {
        self.job.primary_weapon()
    }

    /// Text fed to the embedding provider.
    pub fn embedding_text(&self) -> String {
        let mut parts = vec![
            self.display_name.clone(),
            format!("Job: {}", self.job),
        ];

        if !self.roles.is_empty() {
            parts.push(format!("Roles: {}", join_tokens(&self.roles)));
        }
        if let Some(notes) = &self.role_notes {
            parts.push(notes.clone());
        }
        if !self.weakness_coverage.is_empty() {
            parts.push(format!(
                "Weakness coverage: {}",
                join_tokens(&self.weakness_coverage)
            ));
        }
        if let Some(origin) = &self.origin {
            parts.push(format!("Origin: {origin}"));
        }
        if !self.best_use_cases.is_empty() {
            parts.push(format!("Best for: {}", self.best_use_cases.join("; ")));
        }
        if !self.limitations.is_empty() {
            parts.push(format!("Limitations: {}", self.limitations.join("; ")));
        }
        if !self.description.is_empty() {
            parts.push(self.description.clone());
        }

        parts.join(" ")
    }

    pub fn is_verified(&self) -> bool {
        self.data_confidence == DataConfidence::Verified
    }

    pub fn index_metadata(&self) -> IndexMetadata {
        IndexMetadata {
            roles: self.roles.clone(),
            weaknesses: self.weakness_coverage.clone(),
            tiers: self.tiers,
        }
    }
}

pub(crate) fn join_tokens<T: std::fmt::Display>(tokens: impl IntoIterator<Item = T>) -> String {
    tokens
        .into_iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
