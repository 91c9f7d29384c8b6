//! # roster-store
//!
//! The Entity Store: authoritative, validated, in-memory tables for
//! characters, adversaries, and teams, plus cross-reference integrity.
//! Records are immutable once loaded; a new batch means a new store.

pub mod integrity;
pub mod loader;
pub mod store;
pub mod validation;

pub use loader::{load_raw_records, KnowledgeBase};
pub use store::{EntityRef, EntityStore, StoreStats, Table};
