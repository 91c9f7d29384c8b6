use std::cmp::Ordering;

use roster_core::models::Provenance;

use crate::candidates::Candidate;

/// One ranking criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankStage {
    /// Exact/structural before semantic.
    Provenance,
    /// Fewer structural hops from the anchor first.
    Hops,
    /// Similarity descending. Only semantic items are ordered by score;
    /// exact items compare equal here.
    Score,
    /// Better effective tier first; unrated last.
    Tier,
    /// Identifier ascending.
    Id,
}

impl RankStage {
    pub fn compare(self, a: &Candidate, b: &Candidate) -> Ordering {
        match self {
            RankStage::Provenance => a.provenance.cmp(&b.provenance),
            RankStage::Hops => a.hops.cmp(&b.hops),
            RankStage::Score => score_key(b).total_cmp(&score_key(a)),
            RankStage::Tier => match (a.tier, b.tier) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            RankStage::Id => a.id.cmp(&b.id),
        }
    }
}

fn score_key(c: &Candidate) -> f32 {
    match c.provenance {
        Provenance::Exact => f32::INFINITY,
        Provenance::Semantic => c.score.unwrap_or(f32::NEG_INFINITY),
    }
}
