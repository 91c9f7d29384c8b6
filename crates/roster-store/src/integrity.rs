//! Cross-reference checks over a whole batch of validated records.

use std::collections::HashMap;

use roster_core::errors::ValidationError;
use roster_core::models::{Adversary, Character, EntityKind, Team};

use crate::store::Table;

/// Resolve every variant link and enforce unique ranks per base.
///
/// Returns base id -> variant positions ordered by rank.
pub fn check_variants(
    adversaries: &Table<Adversary>,
) -> Result<HashMap<String, Vec<usize>>, ValidationError> {
    let mut ranks: HashMap<&str, HashMap<u32, &str>> = HashMap::new();
    let mut chains: HashMap<String, Vec<(u32, usize)>> = HashMap::new();

    for (pos, adversary) in adversaries.iter().enumerate() {
        let Some(link) = &adversary.variant else {
            continue;
        };
        let base = adversaries.get(&link.base_id).ok_or_else(|| {
            ValidationError::UnresolvedReference {
                kind: EntityKind::Adversary,
                record_id: adversary.id.clone(),
                field: "base_id",
                target_kind: EntityKind::Adversary,
                target_id: link.base_id.clone(),
            }
        })?;
        if base.is_variant() {
            return Err(ValidationError::ConstraintViolated {
                kind: EntityKind::Adversary,
                record_id: adversary.id.clone(),
                field: "base_id",
                reason: format!("points at '{}', which is itself a variant", base.id),
            });
        }
        if let Some(other) = ranks
            .entry(link.base_id.as_str())
            .or_default()
            .insert(link.rank, adversary.id.as_str())
        {
            return Err(ValidationError::DuplicateVariantRank {
                record_id: adversary.id.clone(),
                base_id: link.base_id.clone(),
                rank: link.rank,
                other_id: other.to_string(),
            });
        }
        chains
            .entry(link.base_id.clone())
            .or_default()
            .push((link.rank, pos));
    }

    Ok(chains
        .into_iter()
        .map(|(base, mut chain)| {
            chain.sort_unstable();
            (base, chain.into_iter().map(|(_, pos)| pos).collect())
        })
        .collect())
}

/// Every team must name an existing adversary and existing members.
pub fn check_teams(
    teams: &Table<Team>,
    characters: &Table<Character>,
    adversaries: &Table<Adversary>,
) -> Result<(), ValidationError> {
    for team in teams.iter() {
        if !adversaries.contains(&team.adversary_id) {
            return Err(unresolved(
                team,
                "adversary_id",
                EntityKind::Adversary,
                &team.adversary_id,
            ));
        }
        for (field, members) in [("front", &team.front), ("back", &team.back)] {
            if let Some(missing) = members.iter().find(|m| !characters.contains(m)) {
                return Err(unresolved(team, field, EntityKind::Character, missing));
            }
        }
    }
    Ok(())
}

fn unresolved(
    team: &Team,
    field: &'static str,
    target_kind: EntityKind,
    target_id: &str,
) -> ValidationError {
    ValidationError::UnresolvedReference {
        kind: EntityKind::Team,
        record_id: team.id.clone(),
        field,
        target_kind,
        target_id: target_id.to_string(),
    }
}
