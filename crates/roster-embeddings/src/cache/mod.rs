pub mod l1_memory;

pub use l1_memory::L1MemoryCache;

/// Cache key for a piece of embedding text.
pub fn content_key(text: &str) -> blake3::Hash {
    blake3::hash(text.as_bytes())
}
