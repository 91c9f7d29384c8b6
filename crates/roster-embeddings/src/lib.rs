//! # roster-embeddings
//!
//! Turns record text into fixed-dimension vectors and answers cosine
//! nearest-neighbour queries per entity kind.
//!
//! - `providers`: built-in `IEmbeddingProvider` implementations.
//! - `cache`: in-memory embedding cache keyed by content hash.
//! - `engine`: provider selection, caching, and vector validation.
//! - `index`: the per-kind Embedding Index.

pub mod cache;
pub mod engine;
pub mod index;
pub mod providers;
pub mod vector;

pub use engine::EmbeddingEngine;
pub use index::{EmbeddingIndex, IndexEntry, IndexSet, SimilarityHit};
pub use providers::TfIdfFallback;
