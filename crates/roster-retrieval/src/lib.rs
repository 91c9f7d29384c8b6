//! # roster-retrieval
//!
//! Single entry point for retrieval requests. Combines exact lookups in the
//! Entity Store with semantic queries against the Embedding Index, merges the
//! two per entity kind, ranks with an ordered list of comparator stages, and
//! truncates to per-kind budgets.
//!
//! All state lives in an immutable [`Snapshot`]; [`RetrievalEngine`] swaps
//! whole snapshots on reload.

pub mod candidates;
pub mod completeness;
pub mod engine;
pub mod orchestrator;
pub mod ranking;
pub mod snapshot;

pub use candidates::{Candidate, CandidateSet};
pub use engine::RetrievalEngine;
pub use orchestrator::Orchestrator;
pub use ranking::{RankStage, Ranker};
pub use snapshot::Snapshot;
