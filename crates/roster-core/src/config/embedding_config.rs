use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Name of the built-in provider used when the host supplies none.
    pub provider: String,
    /// Vector dimensionality for the built-in provider.
    pub dimensions: usize,
    /// Maximum entries held in the in-memory embedding cache.
    pub l1_cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
        }
    }
}
