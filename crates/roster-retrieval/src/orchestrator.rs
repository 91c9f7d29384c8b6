//! Request state machine: resolve anchor, expand via structure, expand via
//! semantics, merge, rank, truncate.
//!
//! Stateless across requests. Everything is read from one `Snapshot`.

use tracing::{debug, warn};

use roster_core::config::{BudgetConfig, RosterConfig};
use roster_core::errors::{RetrievalError, RosterResult};
use roster_core::models::{
    Adversary, BundleItem, DataGap, EntityKind, GapReason, MetadataFilter, RetrievalBundle,
    RetrievalRequest, Team, TierRegion,
};
use roster_core::traits::IEmbeddingProvider;
use roster_store::EntityRef;

use crate::candidates::CandidateSet;
use crate::completeness;
use crate::ranking::Ranker;
use crate::snapshot::Snapshot;

/// Anchor lookup order when the request does not name a kind.
const ANCHOR_ORDER: [EntityKind; 3] = [EntityKind::Adversary, EntityKind::Character, EntityKind::Team];

/// Answers one request against one snapshot.
pub struct Orchestrator<'a> {
    snapshot: &'a Snapshot,
    embedder: &'a dyn IEmbeddingProvider,
    config: &'a RosterConfig,
    ranker: Option<&'a Ranker>,
}

/// Per-request accumulation.
#[derive(Default)]
struct Expansion {
    characters: CandidateSet,
    adversaries: CandidateSet,
    teams: CandidateSet,
    gaps: Vec<DataGap>,
}

impl Expansion {
    fn set(&mut self, kind: EntityKind) -> &mut CandidateSet {
        match kind {
            EntityKind::Character => &mut self.characters,
            EntityKind::Adversary => &mut self.adversaries,
            EntityKind::Team => &mut self.teams,
        }
    }
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        snapshot: &'a Snapshot,
        embedder: &'a dyn IEmbeddingProvider,
        config: &'a RosterConfig,
    ) -> Self {
        Self {
            snapshot,
            embedder,
            config,
            ranker: None,
        }
    }

    pub fn with_ranker(mut self, ranker: &'a Ranker) -> Self {
        self.ranker = Some(ranker);
        self
    }

    pub fn retrieve(&self, request: &RetrievalRequest) -> RosterResult<RetrievalBundle> {
        let store = &self.snapshot.store;
        let text = request.text();
        let anchor_id = request.anchor();
        if anchor_id.is_none() && text.is_none() {
            return Err(RetrievalError::InvalidRequest {
                reason: "either anchor_id or free_text is required".into(),
            }
            .into());
        }
        if let Some(available) = &request.available_characters {
            if let Some(unknown) = available.iter().find(|id| store.character(id).is_none()) {
                return Err(RetrievalError::NotFound {
                    kind: EntityKind::Character,
                    id: unknown.clone(),
                }
                .into());
            }
        }

        // 1. Resolve exact anchor.
        let anchor = anchor_id
            .map(|id| self.resolve_anchor(id, request.anchor_kind))
            .transpose()?;
        let budget = self.config.budget.resolve(request.result_budget.as_ref());
        let mut exp = Expansion::default();

        // 2. Expand via structure.
        if let Some(anchor) = anchor {
            self.expand_structure(anchor, &mut exp);
        } else if let Some(text) = text {
            self.expand_similar_adversaries(text, request, &mut exp)?;
        }
        self.apply_character_constraints(request, anchor, &mut exp.characters);
        debug!(
            characters = exp.characters.len(),
            adversaries = exp.adversaries.len(),
            teams = exp.teams.len(),
            "structural expansion"
        );

        // 3. Expand via semantics.
        for kind in EntityKind::ALL {
            self.expand_semantic(kind, text, anchor, request, &budget, &mut exp)?;
        }
        self.apply_character_constraints(request, anchor, &mut exp.characters);

        // 4-6. Rank and truncate per kind.
        let region = request.tier_region;
        let characters = self.finish(EntityKind::Character, exp.characters, &budget, region);
        let adversaries = self.finish(EntityKind::Adversary, exp.adversaries, &budget, region);
        let teams = self.finish(EntityKind::Team, exp.teams, &budget, region);

        let mut gaps: Vec<DataGap> = EntityKind::ALL
            .iter()
            .filter(|&&kind| store.count(kind) == 0)
            .map(|&kind| {
                warn!(%kind, "empty corpus, returning no results for this kind");
                DataGap {
                    kind,
                    reason: GapReason::EmptyCorpus,
                }
            })
            .collect();
        gaps.append(&mut exp.gaps);

        let completeness = completeness::summarize(store, &characters, &adversaries, &teams);
        debug!(
            characters = characters.len(),
            adversaries = adversaries.len(),
            teams = teams.len(),
            gaps = gaps.len(),
            "retrieval complete"
        );
        Ok(RetrievalBundle {
            characters,
            adversaries,
            teams,
            partial: !gaps.is_empty(),
            gaps,
            completeness,
            generation: self.snapshot.generation,
        })
    }

    fn resolve_anchor(&self, id: &str, kind: Option<EntityKind>) -> RosterResult<EntityRef<'a>> {
        let store = &self.snapshot.store;
        match kind {
            Some(kind) => store.get(kind, id),
            None => ANCHOR_ORDER
                .iter()
                .find_map(|&kind| store.find(kind, id))
                .ok_or_else(|| RetrievalError::AnchorNotFound { id: id.to_string() }.into()),
        }
    }

    fn expand_structure(&self, anchor: EntityRef<'a>, exp: &mut Expansion) {
        let store = &self.snapshot.store;
        match anchor {
            EntityRef::Adversary(adversary) => {
                exp.adversaries.add_exact(&adversary.id, 0);
                let own = store.teams_for_adversary(&adversary.id);
                let mut proven = own.len();
                add_teams(&own, 1, exp);

                // A variant also draws on its base encounter's teams.
                if let Some(base) = adversary.base_id().and_then(|id| store.adversary(id)) {
                    exp.adversaries.add_exact(&base.id, 1);
                    let base_teams = store.teams_for_adversary(&base.id);
                    proven += base_teams.len();
                    add_teams(&base_teams, 2, exp);
                }
                if proven == 0 {
                    exp.gaps.push(DataGap {
                        kind: EntityKind::Team,
                        reason: GapReason::NoProvenTeams {
                            adversary_id: adversary.id.clone(),
                        },
                    });
                }
            }
            EntityRef::Character(character) => {
                exp.characters.add_exact(&character.id, 0);
                for team in store.teams_with_member(&character.id) {
                    exp.teams.add_exact(&team.id, 1);
                    exp.adversaries.add_exact(&team.adversary_id, 2);
                }
            }
            EntityRef::Team(team) => {
                exp.teams.add_exact(&team.id, 0);
                exp.adversaries.add_exact(&team.adversary_id, 1);
                for member in team.members() {
                    exp.characters.add_exact(member, 1);
                }
            }
        }
    }

    /// Free text without an anchor: the most similar encounters and the
    /// teams proven against them.
    fn expand_similar_adversaries(
        &self,
        text: &str,
        request: &RetrievalRequest,
        exp: &mut Expansion,
    ) -> RosterResult<()> {
        let index = &self.snapshot.indices.adversaries;
        if index.is_empty() || self.config.retrieval.similar_adversaries == 0 {
            return Ok(());
        }
        let vector = self.embedder.embed(text)?;
        let filter = adversary_filter(request);
        let hits = index.query(&vector, self.config.retrieval.similar_adversaries, Some(&filter))?;
        let mut teams = 0;
        for hit in &hits {
            exp.adversaries.add_semantic(&hit.id, hit.score, 0);
            for team in self.snapshot.store.teams_for_adversary(&hit.id) {
                exp.teams.add_semantic(&team.id, hit.score, 0);
                teams += 1;
            }
        }
        debug!(similar = hits.len(), teams, "similar adversaries");
        Ok(())
    }

    fn expand_semantic(
        &self,
        kind: EntityKind,
        text: Option<&str>,
        anchor: Option<EntityRef<'a>>,
        request: &RetrievalRequest,
        budget: &BudgetConfig,
        exp: &mut Expansion,
    ) -> RosterResult<()> {
        let set = exp.set(kind);
        if text.is_none() && set.exact_count() >= self.config.retrieval.min_exact_results {
            return Ok(());
        }
        let index = self.snapshot.indices.get(kind);
        if index.is_empty() {
            return Ok(());
        }
        let query_text = match (text, anchor) {
            (Some(text), _) => text.to_string(),
            (None, Some(EntityRef::Adversary(adversary))) if kind == EntityKind::Character => {
                character_query_for(adversary)
            }
            (None, Some(anchor)) => anchor.embedding_text(),
            (None, None) => return Ok(()),
        };

        let filter = match kind {
            EntityKind::Character => character_filter(request),
            EntityKind::Adversary => adversary_filter(request),
            EntityKind::Team => MetadataFilter::default(),
        };
        let k = budget
            .cap(kind)
            .saturating_mul(self.config.retrieval.semantic_overfetch);
        let vector = self.embedder.embed(&query_text)?;
        let hits = index.query(&vector, k, Some(&filter))?;
        debug!(%kind, k, hits = hits.len(), "semantic expansion");
        for hit in hits {
            set.add_semantic(&hit.id, hit.score, 0);
        }
        Ok(())
    }

    /// Request constraints and the available set apply to every character
    /// candidate except the anchor itself.
    fn apply_character_constraints(
        &self,
        request: &RetrievalRequest,
        anchor: Option<EntityRef<'a>>,
        characters: &mut CandidateSet,
    ) {
        let filter = character_filter(request);
        let available = request.available_characters.as_ref();
        if filter.is_empty() && available.is_none() {
            return;
        }
        let anchor_id = anchor.and_then(|a| a.as_character()).map(|c| c.id.as_str());
        let store = &self.snapshot.store;
        characters.retain(|c| {
            if Some(c.id.as_str()) == anchor_id {
                return true;
            }
            let Some(character) = store.character(&c.id) else {
                return false;
            };
            filter.matches(&character.index_metadata())
                && available.map_or(true, |set| set.contains(&c.id))
        });
    }

    fn finish(
        &self,
        kind: EntityKind,
        mut set: CandidateSet,
        budget: &BudgetConfig,
        region: TierRegion,
    ) -> Vec<BundleItem> {
        if kind == EntityKind::Character {
            let store = &self.snapshot.store;
            set.annotate_tiers(|id| store.character(id).and_then(|c| c.tiers.effective(region)));
        }
        let mut candidates = set.into_vec();
        match self.ranker {
            Some(ranker) => ranker.rank(&mut candidates),
            None => Ranker::default().rank(&mut candidates),
        }
        candidates.truncate(budget.cap(kind));
        candidates.into_iter().map(|c| c.into_item()).collect()
    }
}

fn add_teams(teams: &[&Team], hops: u8, exp: &mut Expansion) {
    for team in teams {
        exp.teams.add_exact(&team.id, hops);
        for member in team.members() {
            exp.characters.add_exact(member, hops + 1);
        }
    }
}

/// Character metadata filter from the request constraints. An adversary
/// anchor's weaknesses shape the query text, never the filter.
fn character_filter(request: &RetrievalRequest) -> MetadataFilter {
    let constraints = &request.constraints;
    MetadataFilter {
        weaknesses: constraints.weaknesses.clone(),
        roles: constraints.roles.clone(),
        min_tier: constraints.min_tier,
        region: request.tier_region,
    }
}

fn adversary_filter(request: &RetrievalRequest) -> MetadataFilter {
    MetadataFilter {
        weaknesses: request.constraints.weaknesses.clone(),
        region: request.tier_region,
        ..Default::default()
    }
}

/// What a character that fits this encounter would be described as.
fn character_query_for(adversary: &Adversary) -> String {
    let join = |tokens: Vec<&str>| tokens.join(", ");
    let mut parts = Vec::new();
    if !adversary.weaknesses.is_empty() {
        parts.push(format!(
            "Weakness coverage: {}",
            join(adversary.weaknesses.iter().map(|w| w.as_str()).collect())
        ));
    }
    if !adversary.recommended_roles.is_empty() {
        parts.push(format!(
            "Roles: {}",
            join(adversary.recommended_roles.iter().map(|r| r.as_str()).collect())
        ));
    }
    if parts.is_empty() {
        adversary.embedding_text()
    } else {
        parts.join(". ")
    }
}
