use std::collections::HashSet;

use roster_core::constants::{MAX_BACK_LINE, MAX_FRONT_LINE};
use roster_core::errors::ValidationError;
use roster_core::models::{
    DataConfidence, EntityKind, InvestmentLevel, RawTeam, StrategyType, Team,
};

use super::{clean_list, non_blank, RecordCtx};

/// Validate one raw team. Member and adversary references are resolved at
/// batch level.
pub fn validate_team(raw: &RawTeam, position: usize) -> Result<Team, ValidationError> {
    let ctx = RecordCtx::new(EntityKind::Team, &raw.id, position);

    let id = ctx.required("id", &raw.id)?;
    let adversary_id = ctx.required("adversary_id", &raw.adversary_id)?;
    let rationale = ctx.required("rationale", &raw.rationale)?;

    let front = line(&ctx, "front", &raw.front)?;
    let back = line(&ctx, "back", &raw.back)?;

    if front.is_empty() {
        return Err(ctx.missing("front"));
    }
    if front.len() > MAX_FRONT_LINE {
        return Err(ctx.violated(
            "front",
            format!("holds at most {MAX_FRONT_LINE} members, got {}", front.len()),
        ));
    }
    if back.len() > MAX_BACK_LINE {
        return Err(ctx.violated(
            "back",
            format!("holds at most {MAX_BACK_LINE} members, got {}", back.len()),
        ));
    }

    let mut seen = HashSet::new();
    for (field, member) in front
        .iter()
        .map(|m| ("front", m))
        .chain(back.iter().map(|m| ("back", m)))
    {
        if !seen.insert(member.as_str()) {
            return Err(ctx.violated(field, format!("lists '{member}' more than once")));
        }
    }

    Ok(Team {
        id,
        name: non_blank(raw.name.as_ref()),
        adversary_id,
        front,
        back,
        strategy_type: ctx.optional_token(
            "strategy_type",
            raw.strategy_type.as_ref(),
            StrategyType::parse,
        )?,
        strategy_tags: clean_list(&raw.strategy_tags),
        investment_level: ctx.optional_token(
            "investment_level",
            raw.investment_level.as_ref(),
            InvestmentLevel::parse,
        )?,
        rationale,
        key_synergies: clean_list(&raw.key_synergies),
        verified: raw.verified,
        data_confidence: ctx
            .optional_token(
                "data_confidence",
                raw.data_confidence.as_ref(),
                DataConfidence::parse,
            )?
            .unwrap_or_default(),
    })
}

fn line(ctx: &RecordCtx, field: &'static str, members: &[String]) -> Result<Vec<String>, ValidationError> {
    members
        .iter()
        .map(|m| {
            let trimmed = m.trim();
            if trimmed.is_empty() {
                Err(ctx.violated(field, "contains a blank member identifier"))
            } else {
                Ok(trimmed.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawTeam {
        RawTeam {
            id: "t1".into(),
            adversary_id: "gertrude".into(),
            front: vec!["a".into(), "b".into()],
            back: vec!["c".into()],
            rationale: "Break early, burst on break.".into(),
            strategy_type: Some("burst".into()),
            ..Default::default()
        }
    }

    #[test]
    fn valid_team_keeps_slot_order() {
        let t = validate_team(&raw(), 0).unwrap();
        assert_eq!(t.members().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(t.strategy_type, Some(StrategyType::Burst));
    }

    #[test]
    fn oversized_front_line_is_rejected() {
        let mut r = raw();
        r.front = (0..5).map(|i| format!("m{i}")).collect();
        let err = validate_team(&r, 0).unwrap_err();
        assert_eq!(err.field(), Some("front"));
    }

    #[test]
    fn empty_front_line_is_missing() {
        let mut r = raw();
        r.front.clear();
        let err = validate_team(&r, 0).unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { field: "front", .. }));
    }

    #[test]
    fn member_listed_on_both_lines_is_rejected() {
        let mut r = raw();
        r.back.push("a".into());
        let err = validate_team(&r, 0).unwrap_err();
        assert_eq!(err.field(), Some("back"));
    }

    #[test]
    fn rationale_is_required() {
        let mut r = raw();
        r.rationale = String::new();
        let err = validate_team(&r, 0).unwrap_err();
        assert_eq!(err.field(), Some("rationale"));
    }
}
