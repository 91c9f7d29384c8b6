use roster_core::constants::{MAX_RARITY, MIN_RARITY};
use roster_core::errors::ValidationError;
use roster_core::models::{
    Character, DataConfidence, EntityKind, Influence, Job, RawCharacter, RegionTiers, Role, Tier,
    Weakness,
};

use super::{clean_list, non_blank, RecordCtx};

/// Validate one raw character. `position` names the record when its id is blank.
pub fn validate_character(raw: &RawCharacter, position: usize) -> Result<Character, ValidationError> {
    let ctx = RecordCtx::new(EntityKind::Character, &raw.id, position);

    let id = ctx.required("id", &raw.id)?;
    let display_name = ctx.required("display_name", &raw.display_name)?;
    let job = ctx.required("job", &raw.job)?;
    let job = ctx.token("job", &job, Job::parse)?;

    if let Some(rarity) = raw.rarity {
        if !(MIN_RARITY..=MAX_RARITY).contains(&rarity) {
            return Err(ctx.violated(
                "rarity",
                format!("must be between {MIN_RARITY} and {MAX_RARITY}, got {rarity}"),
            ));
        }
    }

    Ok(Character {
        id,
        display_name,
        job,
        rarity: raw.rarity,
        influence: ctx.optional_token("influence", raw.influence.as_ref(), Influence::parse)?,
        origin: non_blank(raw.origin.as_ref()),
        weakness_coverage: ctx.token_set(
            "weakness_coverage",
            &raw.weakness_coverage,
            Weakness::parse,
        )?,
        roles: ctx.token_set("roles", &raw.roles, Role::parse)?,
        role_notes: non_blank(raw.role_notes.as_ref()),
        tiers: RegionTiers {
            jp: ctx.optional_token("jp_tier", raw.jp_tier.as_ref(), Tier::parse)?,
            gl: ctx.optional_token("gl_tier", raw.gl_tier.as_ref(), Tier::parse)?,
        },
        description: non_blank(raw.description.as_ref()).unwrap_or_default(),
        best_use_cases: clean_list(&raw.best_use_cases),
        limitations: clean_list(&raw.limitations),
        data_confidence: ctx
            .optional_token(
                "data_confidence",
                raw.data_confidence.as_ref(),
                DataConfidence::parse,
            )?
            .unwrap_or_default(),
        last_updated: raw.last_updated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawCharacter {
        RawCharacter {
            id: "richard".into(),
            display_name: "Richard".into(),
            job: "Warrior".into(),
            roles: vec!["tank".into(), "breaker".into(), "tank".into()],
            weakness_coverage: vec!["sword".into(), "spear".into()],
            jp_tier: Some("S+".into()),
            ..Default::default()
        }
    }

    #[test]
    fn valid_character_is_normalized() {
        let c = validate_character(&raw(), 0).unwrap();
        assert_eq!(c.job, Job::Warrior);
        assert_eq!(c.roles.len(), 2);
        assert!(c.weakness_coverage.contains(&Weakness::Polearm));
        assert_eq!(c.tiers.jp, Some(Tier::SPlus));
        assert_eq!(c.data_confidence, DataConfidence::Incomplete);
    }

    #[test]
    fn blank_id_is_reported_by_position() {
        let mut r = raw();
        r.id = "  ".into();
        let err = validate_character(&r, 7).unwrap_err();
        assert_eq!(err.record_id(), Some("#7"));
        assert_eq!(err.field(), Some("id"));
    }

    #[test]
    fn unknown_role_names_the_field() {
        let mut r = raw();
        r.roles.push("dps".into());
        let err = validate_character(&r, 0).unwrap_err();
        assert_eq!(err.field(), Some("roles"));
        assert!(matches!(err, ValidationError::UnknownToken { ref token, .. } if token == "dps"));
    }

    #[test]
    fn rarity_out_of_range_is_rejected() {
        let mut r = raw();
        r.rarity = Some(6);
        let err = validate_character(&r, 0).unwrap_err();
        assert_eq!(err.field(), Some("rarity"));
    }

    #[test]
    fn blank_optional_tokens_are_absent() {
        let mut r = raw();
        r.gl_tier = Some(String::new());
        let c = validate_character(&r, 0).unwrap();
        assert_eq!(c.tiers.gl, None);
    }
}
