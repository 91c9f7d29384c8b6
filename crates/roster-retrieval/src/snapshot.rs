//! An immutable Entity Store plus the Embedding Indices built from it.

use tracing::info;

use roster_core::errors::RosterResult;
use roster_core::models::RawRecords;
use roster_core::traits::IEmbeddingProvider;
use roster_embeddings::IndexSet;
use roster_store::EntityStore;

/// Everything a query reads. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub store: EntityStore,
    pub indices: IndexSet,
    pub generation: u64,
}

impl Snapshot {
    /// Nothing loaded yet: every kind is an empty corpus.
    pub fn empty() -> Self {
        Self {
            store: EntityStore::empty(),
            indices: IndexSet::default(),
            generation: 0,
        }
    }

    /// Validate `raw` and index it. Any failure leaves nothing behind.
    pub fn build(
        raw: &RawRecords,
        embedder: &dyn IEmbeddingProvider,
        generation: u64,
    ) -> RosterResult<Self> {
        let store = EntityStore::load(raw)?;
        let indices = IndexSet::build(
            store.characters().as_slice(),
            store.adversaries().as_slice(),
            store.teams().as_slice(),
            embedder,
        )?;
        info!(
            generation,
            characters = indices.characters.len(),
            adversaries = indices.adversaries.len(),
            teams = indices.teams.len(),
            "snapshot built"
        );
        Ok(Self {
            store,
            indices,
            generation,
        })
    }
}
