//! Retrieval response shape: the grounding bundle handed downstream.

use serde::Serialize;

use super::entity_kind::EntityKind;

/// How a bundle item was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Named by the request or linked from it by a declared reference.
    Exact,
    /// Found by similarity search.
    Semantic,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleItem {
    pub id: String,
    pub provenance: Provenance,
    /// Cosine similarity, when a semantic query scored this entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum GapReason {
    /// No records of this kind were loaded.
    EmptyCorpus,
    /// The anchor encounter has no proven teams on record.
    NoProvenTeams { adversary_id: String },
}

/// Why a bundle is marked partial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataGap {
    pub kind: EntityKind,
    #[serde(flatten)]
    pub reason: GapReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletenessGrade {
    Minimal,
    Partial,
    Complete,
}

impl CompletenessGrade {
    /// Grade for `verified` out of `total` items.
    pub fn from_ratio(verified: usize, total: usize) -> Self {
        if total == 0 {
            return Self::Minimal;
        }
        let ratio = verified as f64 / total as f64;
        if ratio > 0.8 {
            Self::Complete
        } else if ratio > 0.5 {
            Self::Partial
        } else {
            Self::Minimal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KindCompleteness {
    pub returned: usize,
    pub verified: usize,
    pub grade: CompletenessGrade,
}

impl KindCompleteness {
    pub fn new(returned: usize, verified: usize) -> Self {
        Self {
            returned,
            verified,
            grade: CompletenessGrade::from_ratio(verified, returned),
        }
    }
}

/// How much of the returned context is curator-verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DataCompleteness {
    pub characters: KindCompleteness,
    pub adversaries: KindCompleteness,
    pub teams: KindCompleteness,
}

/// The ranked, deduplicated, capped result of one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetrievalBundle {
    pub characters: Vec<BundleItem>,
    pub adversaries: Vec<BundleItem>,
    pub teams: Vec<BundleItem>,
    pub partial: bool,
    pub gaps: Vec<DataGap>,
    pub completeness: DataCompleteness,
    /// Snapshot generation the bundle was served from.
    pub generation: u64,
}

impl RetrievalBundle {
    pub fn items(&self, kind: EntityKind) -> &[BundleItem] {
        match kind {
            EntityKind::Character => &self.characters,
            EntityKind::Adversary => &self.adversaries,
            EntityKind::Team => &self.teams,
        }
    }

    /// Identifiers of one kind, in rank order.
    pub fn ids(&self, kind: EntityKind) -> Vec<&str> {
        self.items(kind).iter().map(|i| i.id.as_str()).collect()
    }
}
