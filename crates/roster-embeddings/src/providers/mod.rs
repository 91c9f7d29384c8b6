//! Built-in embedding providers.

pub mod tfidf_fallback;

pub use tfidf_fallback::TfIdfFallback;

use roster_core::config::EmbeddingConfig;
use roster_core::traits::IEmbeddingProvider;
use tracing::warn;

/// Build the provider named in config.
///
/// Only the hashed TF-IDF provider ships with the engine; any other name is
/// expected to be supplied by the host through `EmbeddingEngine::with_provider`.
pub fn create_provider(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    match config.provider.as_str() {
        "tfidf" | "tfidf-fallback" => Box::new(TfIdfFallback::new(config.dimensions)),
        other => {
            warn!(
                provider = other,
                "unknown built-in embedding provider, falling back to tfidf"
            );
            Box::new(TfIdfFallback::new(config.dimensions))
        }
    }
}
