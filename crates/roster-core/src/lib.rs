//! # roster-core
//!
//! Foundation crate for the Roster retrieval engine.
//! Defines vocabularies, record types, request/response shapes, errors,
//! config, traits, and constants. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RosterConfig;
pub use errors::{RosterError, RosterResult};
pub use models::{Adversary, Character, EntityKind, Team};
