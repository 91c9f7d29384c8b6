//! EmbeddingEngine: provider selection, caching, and vector validation.
//!
//! Implements `IEmbeddingProvider`, so anything that takes a provider can be
//! handed the engine and get caching for free.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use roster_core::config::EmbeddingConfig;
use roster_core::errors::{EmbeddingError, RosterResult};
use roster_core::traits::IEmbeddingProvider;

use crate::cache::L1MemoryCache;
use crate::providers::{self, TfIdfFallback};
use crate::vector;

pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: L1MemoryCache,
    dimensions: usize,
}

impl EmbeddingEngine {
    /// Engine over the built-in provider named in config.
    pub fn new(config: &EmbeddingConfig) -> Self {
        Self::with_provider(providers::create_provider(config), config)
    }

    /// Engine over a host-supplied provider. An unavailable provider is
    /// replaced by the TF-IDF fallback at the configured dimensionality.
    pub fn with_provider(provider: Box<dyn IEmbeddingProvider>, config: &EmbeddingConfig) -> Self {
        let provider: Box<dyn IEmbeddingProvider> = if provider.is_available() {
            provider
        } else {
            warn!(
                provider = provider.name(),
                "embedding provider unavailable, falling back to tfidf"
            );
            Box::new(TfIdfFallback::new(config.dimensions))
        };
        let dimensions = provider.dimensions();
        info!(
            provider = provider.name(),
            dims = dimensions,
            cache = config.l1_cache_size,
            "EmbeddingEngine initialized"
        );
        Self {
            provider,
            cache: L1MemoryCache::new(config.l1_cache_size),
            dimensions,
        }
    }

    pub fn active_provider(&self) -> &str {
        self.provider.name()
    }

    pub fn cache(&self) -> &L1MemoryCache {
        &self.cache
    }

    /// Embed one text through the cache. The result has the engine's
    /// dimensionality and only finite components, but is not normalized.
    pub fn embed_text(&self, text: &str) -> RosterResult<Vec<f32>> {
        if let Some(hit) = self.cache.lookup(text) {
            debug!(chars = text.len(), "embedding cache hit");
            return Ok(hit);
        }

        let embedding = self.provider.embed(text)?;
        self.check(&embedding)?;
        self.cache.store(text, &embedding);
        Ok(embedding)
    }

    /// Embed many texts in parallel, preserving order.
    pub fn embed_texts(&self, texts: &[String]) -> RosterResult<Vec<Vec<f32>>> {
        texts.par_iter().map(|t| self.embed_text(t)).collect()
    }

    fn check(&self, embedding: &[f32]) -> RosterResult<()> {
        vector::validate_dimensions(embedding, self.dimensions)?;
        if !vector::is_finite(embedding) {
            return Err(EmbeddingError::NonFinite {
                provider: self.provider.name().to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> RosterResult<Vec<f32>> {
        self.embed_text(text)
    }

    fn embed_batch(&self, texts: &[String]) -> RosterResult<Vec<Vec<f32>>> {
        self.embed_texts(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "roster-embedding-engine"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::errors::RosterError;

    struct Fixed {
        out: Vec<f32>,
        available: bool,
    }

    impl IEmbeddingProvider for Fixed {
        fn embed(&self, _text: &str) -> RosterResult<Vec<f32>> {
            Ok(self.out.clone())
        }
        fn dimensions(&self) -> usize {
            3
        }
        fn name(&self) -> &str {
            "fixed"
        }
        fn is_available(&self) -> bool {
            self.available
        }
    }

    fn config() -> EmbeddingConfig {
        EmbeddingConfig {
            dimensions: 32,
            l1_cache_size: 64,
            ..Default::default()
        }
    }

    #[test]
    fn default_engine_uses_tfidf() {
        let engine = EmbeddingEngine::new(&config());
        assert_eq!(engine.active_provider(), "tfidf-fallback");
        assert_eq!(engine.dimensions(), 32);
        assert_eq!(engine.embed_text("ice scholar").unwrap().len(), 32);
    }

    #[test]
    fn repeated_text_is_served_from_cache() {
        let engine = EmbeddingEngine::new(&config());
        let a = engine.embed_text("cached").unwrap();
        assert!(engine.cache().lookup("cached").is_some());
        assert_eq!(a, engine.embed_text("cached").unwrap());
    }

    #[test]
    fn unavailable_provider_falls_back() {
        let engine = EmbeddingEngine::with_provider(
            Box::new(Fixed {
                out: vec![1.0, 0.0, 0.0],
                available: false,
            }),
            &config(),
        );
        assert_eq!(engine.active_provider(), "tfidf-fallback");
        assert_eq!(engine.dimensions(), 32);
    }

    #[test]
    fn provider_drift_is_a_dimension_mismatch() {
        let engine = EmbeddingEngine::with_provider(
            Box::new(Fixed {
                out: vec![1.0, 0.0],
                available: true,
            }),
            &config(),
        );
        let err = engine.embed_text("x").unwrap_err();
        assert!(matches!(
            err,
            RosterError::Embedding(EmbeddingError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn non_finite_output_is_rejected() {
        let engine = EmbeddingEngine::with_provider(
            Box::new(Fixed {
                out: vec![f32::NAN, 0.0, 0.0],
                available: true,
            }),
            &config(),
        );
        let err = engine.embed_text("x").unwrap_err();
        assert!(matches!(
            err,
            RosterError::Embedding(EmbeddingError::NonFinite { .. })
        ));
    }

    #[test]
    fn batch_preserves_order() {
        let engine = EmbeddingEngine::new(&config());
        let texts: Vec<String> = (0..20).map(|i| format!("text number {i}")).collect();
        let batch = engine.embed_texts(&texts).unwrap();
        for (text, vec) in texts.iter().zip(&batch) {
            assert_eq!(&engine.embed_text(text).unwrap(), vec);
        }
    }
}
