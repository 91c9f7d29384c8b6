//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{BudgetConfig, EmbeddingConfig, RetrievalConfig};
use crate::errors::ConfigError;

/// Name of the project config file looked up in the data root.
pub const CONFIG_FILE_NAME: &str = "roster.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ROSTER_*`)
/// 2. Project config (`roster.toml` in the data root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub budget: BudgetConfig,
}

impl RosterConfig {
    /// Load configuration for the knowledge base rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `ROSTER_*` overrides read through `lookup`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        fn parsed<T: std::str::FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
        ) -> Option<T> {
            let raw = lookup(key)?;
            match raw.trim().parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(key, value = %raw, "ignoring unparseable environment override");
                    None
                }
            }
        }

        if let Some(provider) = lookup("ROSTER_EMBEDDING_PROVIDER") {
            self.embedding.provider = provider;
        }
        if let Some(v) = parsed(&lookup, "ROSTER_EMBEDDING_DIMENSIONS") {
            self.embedding.dimensions = v;
        }
        if let Some(v) = parsed(&lookup, "ROSTER_EMBEDDING_CACHE_SIZE") {
            self.embedding.l1_cache_size = v;
        }
        if let Some(v) = parsed(&lookup, "ROSTER_MIN_EXACT_RESULTS") {
            self.retrieval.min_exact_results = v;
        }
        if let Some(v) = parsed(&lookup, "ROSTER_SEMANTIC_OVERFETCH") {
            self.retrieval.semantic_overfetch = v;
        }
        if let Some(v) = parsed(&lookup, "ROSTER_BUDGET_CHARACTERS") {
            self.budget.characters = v;
        }
        if let Some(v) = parsed(&lookup, "ROSTER_BUDGET_ADVERSARIES") {
            self.budget.adversaries = v;
        }
        if let Some(v) = parsed(&lookup, "ROSTER_BUDGET_TEAMS") {
            self.budget.teams = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.embedding.dimensions == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.dimensions".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.retrieval.semantic_overfetch == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.semantic_overfetch".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
