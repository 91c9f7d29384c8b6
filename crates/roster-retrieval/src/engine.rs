//! RetrievalEngine: owns the current snapshot and publishes new ones
//! atomically. Implements `IRetriever`.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::{info, warn};

use roster_core::config::RosterConfig;
use roster_core::errors::RosterResult;
use roster_core::models::{RawRecords, RetrievalBundle, RetrievalRequest};
use roster_core::traits::{IEmbeddingProvider, IRetriever};
use roster_embeddings::EmbeddingEngine;
use roster_store::KnowledgeBase;

use crate::orchestrator::Orchestrator;
use crate::ranking::Ranker;
use crate::snapshot::Snapshot;

/// Swappable handle over the store/index pair.
///
/// Readers clone the current `Arc<Snapshot>` once and answer entirely from
/// it. `reload` builds the next snapshot without holding the read lock and
/// swaps the pointer; a failed build leaves the previous snapshot serving.
pub struct RetrievalEngine {
    current: RwLock<Arc<Snapshot>>,
    /// Serializes rebuilds so generations are strictly increasing.
    reload_lock: Mutex<()>,
    embedder: EmbeddingEngine,
    ranker: Ranker,
    config: RosterConfig,
}

impl RetrievalEngine {
    /// Engine with nothing loaded, embedding with the built-in provider.
    pub fn new(config: RosterConfig) -> Self {
        let embedder = EmbeddingEngine::new(&config.embedding);
        Self::with_embedder(embedder, config)
    }

    /// Engine embedding with a host-supplied provider.
    pub fn with_provider(provider: Box<dyn IEmbeddingProvider>, config: RosterConfig) -> Self {
        let embedder = EmbeddingEngine::with_provider(provider, &config.embedding);
        Self::with_embedder(embedder, config)
    }

    fn with_embedder(embedder: EmbeddingEngine, config: RosterConfig) -> Self {
        Self {
            current: RwLock::new(Arc::new(Snapshot::empty())),
            reload_lock: Mutex::new(()),
            embedder,
            ranker: Ranker::default(),
            config,
        }
    }

    /// Replace the default ranking stages.
    pub fn with_ranker(mut self, ranker: Ranker) -> Self {
        self.ranker = ranker;
        self
    }

    /// Config from `<root>/roster.toml` (plus env overrides), records from the
    /// knowledge-base directory at `root`.
    pub fn open(root: &Path) -> RosterResult<Self> {
        let config = RosterConfig::load(root)?;
        let engine = Self::new(config);
        engine.reload_from_dir(root)?;
        Ok(engine)
    }

    /// Build a new snapshot from `raw` and publish it. Returns the new
    /// generation.
    pub fn reload(&self, raw: &RawRecords) -> RosterResult<u64> {
        let _guard = self
            .reload_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let next = self.snapshot().generation + 1;

        let snapshot = match Snapshot::build(raw, &self.embedder, next) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, generation = next, "reload rejected, keeping previous snapshot");
                return Err(e);
            }
        };

        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(snapshot);
        info!(generation = next, records = raw.len(), "snapshot published");
        Ok(next)
    }

    /// Read a knowledge-base directory and reload from it.
    pub fn reload_from_dir(&self, root: &Path) -> RosterResult<u64> {
        let kb = KnowledgeBase::from_dir(root)?;
        self.reload(kb.records())
    }

    /// The snapshot currently being served.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn generation(&self) -> u64 {
        self.snapshot().generation
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    pub fn embedder(&self) -> &EmbeddingEngine {
        &self.embedder
    }
}

impl IRetriever for RetrievalEngine {
    fn retrieve(&self, request: &RetrievalRequest) -> RosterResult<RetrievalBundle> {
        let snapshot = self.snapshot();
        Orchestrator::new(&snapshot, &self.embedder, &self.config)
            .with_ranker(&self.ranker)
            .retrieve(request)
    }
}
