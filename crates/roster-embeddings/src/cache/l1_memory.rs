//! In-memory embedding cache (moka, TinyLFU admission).
//!
//! Owned by the `EmbeddingEngine`, not by a snapshot, so it outlives reloads:
//! rebuilding a snapshot only calls the provider for record texts that were
//! never embedded before. Entries are keyed by the exact text and the engine's
//! provider never changes, so a cached vector cannot go stale. Records removed
//! by a reload simply age out under the capacity bound.

use std::sync::Arc;

use moka::sync::Cache;

use super::content_key;

/// Raw (unnormalized) provider vectors keyed by the blake3 hash of their text.
pub struct L1MemoryCache {
    vectors: Cache<blake3::Hash, Arc<[f32]>>,
    capacity: u64,
}

impl L1MemoryCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            vectors: Cache::builder().max_capacity(capacity).build(),
            capacity,
        }
    }

    /// Vector previously stored for `text`.
    pub fn lookup(&self, text: &str) -> Option<Vec<f32>> {
        self.vectors.get(&content_key(text)).map(|v| v.to_vec())
    }

    pub fn store(&self, text: &str, vector: &[f32]) {
        self.vectors.insert(content_key(text), Arc::from(vector));
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Entries currently held, after flushing moka's pending writes.
    pub fn entry_count(&self) -> u64 {
        self.vectors.run_pending_tasks();
        self.vectors.entry_count()
    }

    pub fn clear(&self) {
        self.vectors.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_text_is_found_by_content() {
        let cache = L1MemoryCache::new(16);
        cache.store("Richard Job: warrior", &[0.6, 0.8]);
        assert_eq!(cache.lookup("Richard Job: warrior"), Some(vec![0.6, 0.8]));
        assert_eq!(cache.lookup("Richard Job: merchant"), None);
        assert_eq!(cache.entry_count(), 1);
    }

    #[test]
    fn clear_drops_entries() {
        let cache = L1MemoryCache::new(16);
        cache.store("a", &[1.0]);
        cache.clear();
        assert_eq!(cache.lookup("a"), None);
        assert_eq!(cache.entry_count(), 0);
    }

    #[test]
    fn content_key_is_case_sensitive() {
        let a = content_key("Richard");
        assert_eq!(a, content_key("Richard"));
        assert_ne!(a, content_key("richard"));
        assert_eq!(a.to_hex().len(), 64);
    }
}
