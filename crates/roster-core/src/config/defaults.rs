//! Compiled defaults for every configurable value.

// Embedding
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "tfidf";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 256;
pub const DEFAULT_L1_CACHE_SIZE: u64 = 4_096;

// Retrieval
pub const DEFAULT_MIN_EXACT_RESULTS: usize = 3;
pub const DEFAULT_SEMANTIC_OVERFETCH: usize = 2;
pub const DEFAULT_SIMILAR_ADVERSARIES: usize = 3;

// Budget
pub const DEFAULT_CHARACTER_BUDGET: usize = 20;
pub const DEFAULT_ADVERSARY_BUDGET: usize = 5;
pub const DEFAULT_TEAM_BUDGET: usize = 10;
