//! Hashed term-frequency provider.
//!
//! Deterministic, dependency-free, always available. Good enough to separate
//! "ice scholar nuker" from "provoke sword tank", which is all the engine
//! needs when no external model is wired in.

use std::collections::HashMap;

use roster_core::errors::RosterResult;
use roster_core::traits::IEmbeddingProvider;

/// Hashes terms into fixed-dimension buckets weighted by term frequency.
pub struct TfIdfFallback {
    dimensions: usize,
}

impl TfIdfFallback {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// FNV-1a bucket for a term.
    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    /// Lowercase alphanumeric terms of two or more characters. Hyphens and
    /// underscores stay inside a term so `physical-dps` is one token.
    fn terms(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split(|c: char| !c.is_alphanumeric() && c != '_' && c != '-')
            .map(|s| s.trim_matches('-'))
            .filter(|s| s.chars().count() >= 2)
            .map(str::to_lowercase)
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut tf: HashMap<String, f32> = HashMap::new();
        let mut total = 0.0f32;
        for term in Self::terms(text) {
            *tf.entry(term).or_default() += 1.0;
            total += 1.0;
        }

        let mut vec = vec![0.0f32; self.dimensions];
        if total == 0.0 {
            return vec;
        }
        for (term, count) in &tf {
            // Longer terms are rarer; short ones behave like stopwords.
            let idf = 1.0 + (term.len() as f32).ln();
            vec[Self::bucket(term, self.dimensions)] += (count / total) * idf;
        }

        let norm = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            vec.iter_mut().for_each(|v| *v /= norm);
        }
        vec
    }
}

impl IEmbeddingProvider for TfIdfFallback {
    fn embed(&self, text: &str) -> RosterResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> RosterResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "tfidf-fallback"
    }

    fn is_available(&self) -> bool {
        true
    }
}
