//! Per-kind candidate accumulation with provenance-aware deduplication.

use std::collections::HashMap;

use roster_core::models::{BundleItem, Provenance, Tier};

/// One entity reached by the exact or the semantic path.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: String,
    pub provenance: Provenance,
    /// Best similarity seen for this entity, whichever path kept it.
    pub score: Option<f32>,
    /// Structural distance from the anchor; 0 is the anchor itself.
    pub hops: u8,
    /// Effective tier, for kinds that carry one.
    pub tier: Option<Tier>,
}

impl Candidate {
    pub fn into_item(self) -> BundleItem {
        BundleItem {
            id: self.id,
            provenance: self.provenance,
            score: self.score,
        }
    }
}

/// Candidates of one kind in first-seen order, each id at most once.
///
/// Merge rules: exact provenance wins over semantic; the closer hop count
/// and the higher similarity are kept.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    items: Vec<Candidate>,
    by_id: HashMap<String, usize>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_exact(&mut self, id: &str, hops: u8) {
        self.merge(Candidate {
            id: id.to_string(),
            provenance: Provenance::Exact,
            score: None,
            hops,
            tier: None,
        });
    }

    pub fn add_semantic(&mut self, id: &str, score: f32, hops: u8) {
        self.merge(Candidate {
            id: id.to_string(),
            provenance: Provenance::Semantic,
            score: Some(score),
            hops,
            tier: None,
        });
    }

    fn merge(&mut self, incoming: Candidate) {
        let Some(&pos) = self.by_id.get(&incoming.id) else {
            self.by_id.insert(incoming.id.clone(), self.items.len());
            self.items.push(incoming);
            return;
        };
        let existing = &mut self.items[pos];
        if incoming.provenance < existing.provenance {
            existing.provenance = incoming.provenance;
            existing.hops = incoming.hops;
        } else if incoming.provenance == existing.provenance {
            existing.hops = existing.hops.min(incoming.hops);
        }
        existing.score = match (existing.score, incoming.score) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Candidate> {
        self.by_id.get(id).map(|&pos| &self.items[pos])
    }

    /// Number of candidates reached by the exact path.
    pub fn exact_count(&self) -> usize {
        self.items
            .iter()
            .filter(|c| c.provenance == Provenance::Exact)
            .count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop candidates failing `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&Candidate) -> bool) {
        self.items.retain(|c| keep(c));
        self.by_id = self
            .items
            .iter()
            .enumerate()
            .map(|(pos, c)| (c.id.clone(), pos))
            .collect();
    }

    /// Attach tiers before ranking.
    pub fn annotate_tiers(&mut self, tier_of: impl Fn(&str) -> Option<Tier>) {
        for c in &mut self.items {
            c.tier = tier_of(&c.id);
        }
    }

    pub fn into_vec(self) -> Vec<Candidate> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_seen_order_without_duplicates() {
        let mut set = CandidateSet::new();
        set.add_exact("b", 1);
        set.add_semantic("a", 0.4, 0);
        set.add_exact("b", 2);
        let ids: Vec<_> = set.into_vec().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn exact_provenance_wins_either_order() {
        let mut set = CandidateSet::new();
        set.add_semantic("x", 0.9, 0);
        set.add_exact("x", 2);
        set.add_exact("y", 1);
        set.add_semantic("y", 0.7, 0);

        let x = set.get("x").unwrap();
        assert_eq!(x.provenance, Provenance::Exact);
        assert_eq!(x.hops, 2);
        assert_eq!(x.score, Some(0.9));

        let y = set.get("y").unwrap();
        assert_eq!(y.provenance, Provenance::Exact);
        assert_eq!(y.hops, 1);
        assert_eq!(y.score, Some(0.7));
        assert_eq!(set.exact_count(), 2);
    }

    #[test]
    fn semantic_duplicates_keep_best_score() {
        let mut set = CandidateSet::new();
        set.add_semantic("z", 0.2, 1);
        set.add_semantic("z", 0.6, 1);
        set.add_semantic("z", 0.5, 1);
        assert_eq!(set.get("z").unwrap().score, Some(0.6));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn retain_reindexes() {
        let mut set = CandidateSet::new();
        set.add_exact("a", 0);
        set.add_exact("b", 1);
        set.add_exact("c", 1);
        set.retain(|c| c.id != "b");
        assert!(!set.contains("b"));
        assert_eq!(set.get("c").unwrap().hops, 1);
        set.add_exact("c", 0);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("c").unwrap().hops, 0);
    }
}
