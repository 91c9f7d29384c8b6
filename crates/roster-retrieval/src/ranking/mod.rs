//! Declarative ranking: an ordered list of comparator stages applied as one
//! stable multi-key sort. Adding a criterion means adding a stage.

mod stages;

pub use stages::RankStage;

use std::cmp::Ordering;

use crate::candidates::Candidate;

/// Ordered comparator stages. Earlier stages dominate later ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranker {
    stages: Vec<RankStage>,
}

impl Default for Ranker {
    /// Exact before semantic, nearer before farther, higher similarity,
    /// better tier, then identifier.
    fn default() -> Self {
        Self::new(vec![
            RankStage::Provenance,
            RankStage::Hops,
            RankStage::Score,
            RankStage::Tier,
            RankStage::Id,
        ])
    }
}

impl Ranker {
    /// A ranker over the given stages. `Id` is appended when missing so the
    /// order is always total.
    pub fn new(mut stages: Vec<RankStage>) -> Self {
        if !stages.contains(&RankStage::Id) {
            stages.push(RankStage::Id);
        }
        Self { stages }
    }

    pub fn stages(&self) -> &[RankStage] {
        &self.stages
    }

    pub fn compare(&self, a: &Candidate, b: &Candidate) -> Ordering {
        self.stages
            .iter()
            .map(|stage| stage.compare(a, b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    pub fn rank(&self, candidates: &mut [Candidate]) {
        candidates.sort_by(|a, b| self.compare(a, b));
    }
}
