//! Unvalidated record shapes, as handed over by the ingestion collaborator.
//!
//! Token-valued fields stay plain strings here so that validation can name
//! the exact record and field when a token falls outside its vocabulary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCharacter {
    pub id: String,
    pub display_name: String,
    pub job: String,
    pub rarity: Option<u8>,
    pub influence: Option<String>,
    pub origin: Option<String>,
    pub weakness_coverage: Vec<String>,
    pub roles: Vec<String>,
    pub role_notes: Option<String>,
    pub gl_tier: Option<String>,
    pub jp_tier: Option<String>,
    pub description: Option<String>,
    pub best_use_cases: Vec<String>,
    pub limitations: Vec<String>,
    pub data_confidence: Option<String>,
    pub last_updated: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMechanic {
    pub name: String,
    pub counter_strategy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAdversary {
    pub id: String,
    pub display_name: String,
    pub weaknesses: Vec<String>,
    pub base_id: Option<String>,
    pub variant_rank: Option<u32>,
    pub difficulty: Option<String>,
    pub content_type: Option<String>,
    pub location: Option<String>,
    pub recommended_roles: Vec<String>,
    pub general_strategy: Option<String>,
    pub mechanics: Vec<RawMechanic>,
    pub mechanics_description: Option<String>,
    pub data_confidence: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTeam {
    pub id: String,
    pub name: Option<String>,
    pub adversary_id: String,
    pub front: Vec<String>,
    pub back: Vec<String>,
    pub strategy_type: Option<String>,
    pub strategy_tags: Vec<String>,
    pub investment_level: Option<String>,
    pub rationale: String,
    pub key_synergies: Vec<String>,
    pub verified: bool,
    pub data_confidence: Option<String>,
}

/// One complete build batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecords {
    pub characters: Vec<RawCharacter>,
    pub adversaries: Vec<RawAdversary>,
    pub teams: Vec<RawTeam>,
}

impl RawRecords {
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty() && self.adversaries.is_empty() && self.teams.is_empty()
    }

    pub fn len(&self) -> usize {
        self.characters.len() + self.adversaries.len() + self.teams.len()
    }
}
