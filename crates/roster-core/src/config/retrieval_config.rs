use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval orchestration configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Below this many exact/structural hits for a kind, a semantic query
    /// is issued for that kind even without free text.
    pub min_exact_results: usize,
    /// Semantic queries ask for `cap * semantic_overfetch` hits so that
    /// deduplication against exact hits cannot starve the budget.
    pub semantic_overfetch: usize,
    /// How many similar adversaries a free-text-only request expands from.
    pub similar_adversaries: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            min_exact_results: defaults::DEFAULT_MIN_EXACT_RESULTS,
            semantic_overfetch: defaults::DEFAULT_SEMANTIC_OVERFETCH,
            similar_adversaries: defaults::DEFAULT_SIMILAR_ADVERSARIES,
        }
    }
}
