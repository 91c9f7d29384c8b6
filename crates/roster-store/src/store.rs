//! In-memory tables and the `EntityStore` built from one validated batch.

use std::collections::HashMap;

use serde::Serialize;
use tracing::info;

use roster_core::errors::{RetrievalError, RosterResult, ValidationError};
use roster_core::models::{Adversary, Character, EntityKind, RawRecords, Team};
use roster_core::traits::Embeddable;

use crate::integrity;
use crate::validation::{validate_adversary, validate_character, validate_team};

/// Records of one kind in load order, indexed by identifier.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
    by_id: HashMap<String, usize>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            by_id: HashMap::new(),
        }
    }
}

impl<T: Embeddable> Table<T> {
    /// Build a table, rejecting duplicate identifiers.
    pub fn from_records(rows: Vec<T>) -> Result<Self, ValidationError> {
        let mut by_id = HashMap::with_capacity(rows.len());
        for (pos, row) in rows.iter().enumerate() {
            if by_id.insert(row.entity_id().to_string(), pos).is_some() {
                return Err(ValidationError::DuplicateId {
                    kind: T::KIND,
                    record_id: row.entity_id().to_string(),
                });
            }
        }
        Ok(Self { rows, by_id })
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.by_id.get(id).map(|&pos| &self.rows[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Load-order position of a record.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A borrowed record of any kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityRef<'a> {
    Character(&'a Character),
    Adversary(&'a Adversary),
    Team(&'a Team),
}

impl<'a> EntityRef<'a> {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Character(_) => EntityKind::Character,
            Self::Adversary(_) => EntityKind::Adversary,
            Self::Team(_) => EntityKind::Team,
        }
    }

    pub fn id(&self) -> &'a str {
        match self {
            Self::Character(c) => &c.id,
            Self::Adversary(a) => &a.id,
            Self::Team(t) => &t.id,
        }
    }

    pub fn embedding_text(&self) -> String {
        match self {
            Self::Character(c) => c.embedding_text(),
            Self::Adversary(a) => a.embedding_text(),
            Self::Team(t) => t.embedding_text(),
        }
    }

    pub fn is_verified(&self) -> bool {
        match self {
            Self::Character(c) => c.is_verified(),
            Self::Adversary(a) => a.is_verified(),
            Self::Team(t) => t.is_verified(),
        }
    }

    pub fn as_character(&self) -> Option<&'a Character> {
        match self {
            Self::Character(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_adversary(&self) -> Option<&'a Adversary> {
        match self {
            Self::Adversary(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_team(&self) -> Option<&'a Team> {
        match self {
            Self::Team(t) => Some(t),
            _ => None,
        }
    }
}

/// Per-kind record counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub characters: usize,
    pub adversaries: usize,
    pub teams: usize,
    pub variants: usize,
    pub verified_teams: usize,
}

impl StoreStats {
    pub fn total(&self) -> usize {
        self.characters + self.adversaries + self.teams
    }
}

/// Validated, immutable tables for all three entity kinds.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    characters: Table<Character>,
    adversaries: Table<Adversary>,
    teams: Table<Team>,
    /// base adversary id -> variant positions, ordered by rank.
    variants: HashMap<String, Vec<usize>>,
    /// adversary id -> team positions, load order.
    teams_by_adversary: HashMap<String, Vec<usize>>,
}

impl EntityStore {
    /// A store with no records. Every query against it degrades to empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate and load a whole batch. Any violation rejects the batch.
    pub fn load(raw: &RawRecords) -> RosterResult<Self> {
        let characters = raw
            .characters
            .iter()
            .enumerate()
            .map(|(pos, r)| validate_character(r, pos))
            .collect::<Result<Vec<_>, _>>()?;
        let adversaries = raw
            .adversaries
            .iter()
            .enumerate()
            .map(|(pos, r)| validate_adversary(r, pos))
            .collect::<Result<Vec<_>, _>>()?;
        let teams = raw
            .teams
            .iter()
            .enumerate()
            .map(|(pos, r)| validate_team(r, pos))
            .collect::<Result<Vec<_>, _>>()?;

        let characters = Table::from_records(characters)?;
        let adversaries = Table::from_records(adversaries)?;
        let teams = Table::from_records(teams)?;

        let variants = integrity::check_variants(&adversaries)?;
        integrity::check_teams(&teams, &characters, &adversaries)?;

        let mut teams_by_adversary: HashMap<String, Vec<usize>> = HashMap::new();
        for (pos, team) in teams.iter().enumerate() {
            teams_by_adversary
                .entry(team.adversary_id.clone())
                .or_default()
                .push(pos);
        }

        let store = Self {
            characters,
            adversaries,
            teams,
            variants,
            teams_by_adversary,
        };
        let stats = store.stats();
        info!(
            characters = stats.characters,
            adversaries = stats.adversaries,
            teams = stats.teams,
            variants = stats.variants,
            "entity store loaded"
        );
        Ok(store)
    }

    /// Look up one record by kind and identifier.
    pub fn get(&self, kind: EntityKind, id: &str) -> RosterResult<EntityRef<'_>> {
        self.find(kind, id).ok_or_else(|| {
            RetrievalError::NotFound {
                kind,
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Like `get`, but absence is `None`.
    pub fn find(&self, kind: EntityKind, id: &str) -> Option<EntityRef<'_>> {
        match kind {
            EntityKind::Character => self.characters.get(id).map(EntityRef::Character),
            EntityKind::Adversary => self.adversaries.get(id).map(EntityRef::Adversary),
            EntityKind::Team => self.teams.get(id).map(EntityRef::Team),
        }
    }

    pub fn character(&self, id: &str) -> Option<&Character> {
        self.characters.get(id)
    }

    pub fn adversary(&self, id: &str) -> Option<&Adversary> {
        self.adversaries.get(id)
    }

    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.get(id)
    }

    pub fn characters(&self) -> &Table<Character> {
        &self.characters
    }

    pub fn adversaries(&self) -> &Table<Adversary> {
        &self.adversaries
    }

    pub fn teams(&self) -> &Table<Team> {
        &self.teams
    }

    /// Every record of a kind, in load order.
    pub fn iter(&self, kind: EntityKind) -> Box<dyn Iterator<Item = EntityRef<'_>> + '_> {
        match kind {
            EntityKind::Character => Box::new(self.characters.iter().map(EntityRef::Character)),
            EntityKind::Adversary => Box::new(self.adversaries.iter().map(EntityRef::Adversary)),
            EntityKind::Team => Box::new(self.teams.iter().map(EntityRef::Team)),
        }
    }

    /// Lazily yield the records of `kind` matching `predicate`, in load order.
    pub fn filter<'s, P>(
        &'s self,
        kind: EntityKind,
        predicate: P,
    ) -> impl Iterator<Item = EntityRef<'s>> + 's
    where
        P: Fn(&EntityRef<'s>) -> bool + 's,
    {
        self.iter(kind).filter(move |r| predicate(r))
    }

    /// Variants of a base adversary, ordered by rank.
    pub fn variants_of(&self, base_id: &str) -> Vec<&Adversary> {
        self.variants
            .get(base_id)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&pos| &self.adversaries.as_slice()[pos])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Proven teams for an adversary, in load order.
    pub fn teams_for_adversary(&self, adversary_id: &str) -> Vec<&Team> {
        self.teams_by_adversary
            .get(adversary_id)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&pos| &self.teams.as_slice()[pos])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Teams that field the given character, in load order.
    pub fn teams_with_member<'s>(&'s self, character_id: &'s str) -> impl Iterator<Item = &'s Team> + 's {
        self.teams.iter().filter(move |t| t.has_member(character_id))
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Character => self.characters.len(),
            EntityKind::Adversary => self.adversaries.len(),
            EntityKind::Team => self.teams.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        EntityKind::ALL.iter().all(|&k| self.count(k) == 0)
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            characters: self.characters.len(),
            adversaries: self.adversaries.len(),
            teams: self.teams.len(),
            variants: self.variants.values().map(Vec::len).sum(),
            verified_teams: self.teams.iter().filter(|t| t.is_verified()).count(),
        }
    }
}
