use serde::Serialize;

use super::metadata::IndexMetadata;
use super::vocab::{DataConfidence, InvestmentLevel, StrategyType};

/// A validated, immutable proven team composition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub id: String,
    pub name: Option<String>,
    pub adversary_id: String,
    /// Front line, in slot order.
    pub front: Vec<String>,
    /// Back line, in slot order.
    pub back: Vec<String>,
    pub strategy_type: Option<StrategyType>,
    pub strategy_tags: Vec<String>,
    pub investment_level: Option<InvestmentLevel>,
    pub rationale: String,
    pub key_synergies: Vec<String>,
    pub verified: bool,
    pub data_confidence: DataConfidence,
}

impl Team {
    /// Member identifiers, front line first.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.front.iter().chain(self.back.iter()).map(String::as_str)
    }

    pub fn has_member(&self, character_id: &str) -> bool {
        self.members().any(|m| m == character_id)
    }

    pub fn size(&self) -> usize {
        self.front.len() + self.back.len()
    }

    pub fn is_verified(&self) -> bool {
        self.verified || self.data_confidence == DataConfidence::Verified
    }

    pub fn embedding_text(&self) -> String {
        let mut parts = Vec::new();

        if let Some(name) = &self.name {
            parts.push(name.clone());
        }
        if let Some(strategy) = self.strategy_type {
            parts.push(format!("Strategy: {strategy}"));
        }
        parts.push(self.rationale.clone());
        if !self.key_synergies.is_empty() {
            parts.push(format!("Synergies: {}", self.key_synergies.join("; ")));
        }
        if !self.strategy_tags.is_empty() {
            parts.push(format!("Tags: {}", self.strategy_tags.join(", ")));
        }

        parts.retain(|p| !p.is_empty());
        parts.join(" ")
    }

    /// Teams carry no role, weakness, or tier attributes of their own.
    pub fn index_metadata(&self) -> IndexMetadata {
        IndexMetadata::default()
    }
}
