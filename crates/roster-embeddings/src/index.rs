//! Per-kind Embedding Index: unit vectors plus filter metadata, exact cosine
//! top-k search.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use roster_core::errors::{EmbeddingError, RosterResult};
use roster_core::models::{Adversary, Character, EntityKind, IndexMetadata, MetadataFilter, Team};
use roster_core::traits::{Embeddable, IEmbeddingProvider};

use crate::vector;

/// One indexed entity.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexEntry {
    pub id: String,
    /// Unit length, or all zeros when the text has no indexable terms.
    pub vector: Vec<f32>,
    pub metadata: IndexMetadata,
}

/// One query result. `score` is cosine similarity in `[-1, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityHit {
    pub id: String,
    pub score: f32,
}

/// Vectors for every record of one kind, in load order.
#[derive(Debug, Clone)]
pub struct EmbeddingIndex {
    kind: EntityKind,
    dimensions: usize,
    entries: Vec<IndexEntry>,
    built: bool,
}

impl EmbeddingIndex {
    /// An index that has never been built. Queries return nothing.
    pub fn unbuilt(kind: EntityKind) -> Self {
        Self {
            kind,
            dimensions: 0,
            entries: Vec::new(),
            built: false,
        }
    }

    /// Embed every record and store its unit vector with its metadata.
    ///
    /// Fails on a provider error, a dimensionality change mid-build, or a
    /// non-finite component. A record whose text embeds to zero is kept with
    /// a zero vector and scores 0 against every query.
    pub fn build<T>(records: &[T], embedder: &dyn IEmbeddingProvider) -> RosterResult<Self>
    where
        T: Embeddable + Sync,
    {
        let dimensions = embedder.dimensions();
        let texts: Vec<String> = records.par_iter().map(Embeddable::embedding_text).collect();
        let vectors = embedder.embed_batch(&texts)?;
        if vectors.len() != records.len() {
            return Err(EmbeddingError::ProviderFailed {
                provider: embedder.name().to_string(),
                reason: format!(
                    "returned {} vectors for {} texts",
                    vectors.len(),
                    records.len()
                ),
            }
            .into());
        }

        let entries = records
            .par_iter()
            .zip(vectors)
            .map(|(record, mut vec)| -> RosterResult<IndexEntry> {
                vector::validate_dimensions(&vec, dimensions)?;
                if !vector::is_finite(&vec) {
                    return Err(EmbeddingError::NonFinite {
                        provider: embedder.name().to_string(),
                    }
                    .into());
                }
                if !vector::l2_normalize(&mut vec) {
                    warn!(kind = %T::KIND, id = record.entity_id(), "text embeds to zero, entry scores 0");
                    vec.fill(0.0);
                }
                Ok(IndexEntry {
                    id: record.entity_id().to_string(),
                    vector: vec,
                    metadata: record.index_metadata(),
                })
            })
            .collect::<RosterResult<Vec<_>>>()?;

        info!(kind = %T::KIND, entries = entries.len(), dims = dimensions, "embedding index built");
        Ok(Self {
            kind: T::KIND,
            dimensions,
            entries,
            built: true,
        })
    }

    /// The `k` most similar entries passing `filter`, best first, ties by
    /// identifier ascending.
    ///
    /// An empty or unbuilt index yields nothing. A query vector of the wrong
    /// length or with non-finite components is an error. A zero query vector
    /// scores every entry 0.
    pub fn query(
        &self,
        query: &[f32],
        k: usize,
        filter: Option<&MetadataFilter>,
    ) -> RosterResult<Vec<SimilarityHit>> {
        if self.entries.is_empty() || k == 0 {
            return Ok(Vec::new());
        }
        vector::validate_dimensions(query, self.dimensions)?;
        if !vector::is_finite(query) {
            return Err(EmbeddingError::NonFinite {
                provider: "query".to_string(),
            }
            .into());
        }
        let mut unit = query.to_vec();
        vector::l2_normalize(&mut unit);

        let filter = filter.filter(|f| !f.is_empty());
        let mut hits: Vec<SimilarityHit> = self
            .entries
            .iter()
            .filter(|e| filter.map_or(true, |f| f.matches(&e.metadata)))
            .map(|e| SimilarityHit {
                id: e.id.clone(),
                score: vector::dot(&unit, &e.vector).clamp(-1.0, 1.0),
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.id.cmp(&b.id))
        });
        hits.truncate(k);
        debug!(kind = %self.kind, k, returned = hits.len(), "index query");
        Ok(hits)
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Stored unit vector for an entity.
    pub fn vector(&self, id: &str) -> Option<&[f32]> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.vector.as_slice())
    }
}

/// One index per entity kind, built from the same record set.
#[derive(Debug, Clone)]
pub struct IndexSet {
    pub characters: EmbeddingIndex,
    pub adversaries: EmbeddingIndex,
    pub teams: EmbeddingIndex,
}

impl Default for IndexSet {
    fn default() -> Self {
        Self {
            characters: EmbeddingIndex::unbuilt(EntityKind::Character),
            adversaries: EmbeddingIndex::unbuilt(EntityKind::Adversary),
            teams: EmbeddingIndex::unbuilt(EntityKind::Team),
        }
    }
}

impl IndexSet {
    pub fn build(
        characters: &[Character],
        adversaries: &[Adversary],
        teams: &[Team],
        embedder: &dyn IEmbeddingProvider,
    ) -> RosterResult<Self> {
        Ok(Self {
            characters: EmbeddingIndex::build(characters, embedder)?,
            adversaries: EmbeddingIndex::build(adversaries, embedder)?,
            teams: EmbeddingIndex::build(teams, embedder)?,
        })
    }

    pub fn get(&self, kind: EntityKind) -> &EmbeddingIndex {
        match kind {
            EntityKind::Character => &self.characters,
            EntityKind::Adversary => &self.adversaries,
            EntityKind::Team => &self.teams,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::errors::RosterError;
    use roster_core::models::{Job, Role, Tier};

    use crate::TfIdfFallback;

    fn character(id: &str, description: &str, roles: &[Role], jp: Option<Tier>) -> Character {
        Character {
            id: id.into(),
            display_name: id.to_uppercase(),
            job: Job::Scholar,
            rarity: None,
            influence: None,
            origin: None,
            weakness_coverage: Default::default(),
            roles: roles.iter().copied().collect(),
            role_notes: None,
            tiers: roster_core::models::RegionTiers { jp, gl: None },
            description: description.into(),
            best_use_cases: vec![],
            limitations: vec![],
            data_confidence: Default::default(),
            last_updated: None,
        }
    }

    fn corpus() -> Vec<Character> {
        vec![
            character("c", "ice spells hit many times", &[Role::ElementalDps], Some(Tier::S)),
            character("a", "provoke sword tank", &[Role::Tank], Some(Tier::A)),
            character("b", "heals the party", &[Role::Healer], None),
        ]
    }

    #[test]
    fn stored_vectors_are_unit_length() {
        let index = EmbeddingIndex::build(&corpus(), &TfIdfFallback::new(64)).unwrap();
        assert!(index.is_built());
        assert_eq!(index.len(), 3);
        for entry in index.entries() {
            assert!((vector::norm(&entry.vector) - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn nearest_neighbour_comes_first() {
        let p = TfIdfFallback::new(128);
        let index = EmbeddingIndex::build(&corpus(), &p).unwrap();
        let q = p.embed("ice spells").unwrap();
        let hits = index.query(&q, 2, None).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "c");
        assert!(hits[0].score >= hits[1].score);
    }

    #[test]
    fn k_is_clamped() {
        let p = TfIdfFallback::new(32);
        let index = EmbeddingIndex::build(&corpus(), &p).unwrap();
        let q = p.embed("anything").unwrap();
        assert!(index.query(&q, 0, None).unwrap().is_empty());
        assert_eq!(index.query(&q, 99, None).unwrap().len(), 3);
    }

    #[test]
    fn ties_break_by_identifier() {
        let p = TfIdfFallback::new(32);
        let index = EmbeddingIndex::build(&corpus(), &p).unwrap();
        let hits = index.query(&[0.0; 32], 3, None).unwrap();
        let ids: Vec<_> = hits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn filter_restricts_candidates() {
        let p = TfIdfFallback::new(32);
        let index = EmbeddingIndex::build(&corpus(), &p).unwrap();
        let filter = MetadataFilter {
            min_tier: Some(Tier::A),
            ..Default::default()
        };
        let hits = index.query(&p.embed("heals").unwrap(), 3, Some(&filter)).unwrap();
        let ids: Vec<_> = hits.iter().map(|h| h.id.as_str()).collect();
        assert!(!ids.contains(&"b"));
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn unbuilt_and_empty_indices_return_nothing() {
        let unbuilt = EmbeddingIndex::unbuilt(EntityKind::Team);
        assert!(unbuilt.query(&[1.0, 0.0], 5, None).unwrap().is_empty());

        let empty = EmbeddingIndex::build::<Team>(&[], &TfIdfFallback::new(8)).unwrap();
        assert!(empty.is_built());
        assert!(empty.query(&[1.0; 8], 5, None).unwrap().is_empty());
    }

    #[test]
    fn wrong_query_length_is_an_error() {
        let index = EmbeddingIndex::build(&corpus(), &TfIdfFallback::new(16)).unwrap();
        let err = index.query(&[1.0; 8], 1, None).unwrap_err();
        assert!(matches!(
            err,
            RosterError::Embedding(EmbeddingError::DimensionMismatch { .. })
        ));
    }

    fn adversary(id: &str, display_name: &str) -> Adversary {
        Adversary {
            id: id.into(),
            display_name: display_name.into(),
            weaknesses: Default::default(),
            variant: None,
            difficulty: None,
            content_type: None,
            location: None,
            recommended_roles: Default::default(),
            general_strategy: None,
            mechanics: vec![],
            mechanics_description: String::new(),
            data_confidence: Default::default(),
        }
    }

    #[test]
    fn text_without_terms_is_indexed_as_zero_vector() {
        let p = TfIdfFallback::new(32);
        let records = vec![adversary("q", "Q"), adversary("golem", "Ember Golem")];
        let index = EmbeddingIndex::build(&records, &p).unwrap();

        assert_eq!(index.len(), 2);
        assert!(index.vector("q").unwrap().iter().all(|&x| x == 0.0));

        let hits = index.query(&p.embed("ember golem").unwrap(), 5, None).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "golem");
        assert_eq!(hits[1].id, "q");
        assert_eq!(hits[1].score, 0.0);
    }
}
