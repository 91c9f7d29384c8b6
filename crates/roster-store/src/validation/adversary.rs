use roster_core::errors::ValidationError;
use roster_core::models::{
    Adversary, ContentType, DataConfidence, Difficulty, EntityKind, Mechanic, RawAdversary, Role,
    VariantLink, Weakness,
};

use super::{non_blank, RecordCtx};

/// Validate one raw adversary. Reference resolution happens at batch level.
pub fn validate_adversary(raw: &RawAdversary, position: usize) -> Result<Adversary, ValidationError> {
    let ctx = RecordCtx::new(EntityKind::Adversary, &raw.id, position);

    let id = ctx.required("id", &raw.id)?;
    let display_name = ctx.required("display_name", &raw.display_name)?;

    let variant = match (non_blank(raw.base_id.as_ref()), raw.variant_rank) {
        (None, None) => None,
        (Some(_), None) => return Err(ctx.missing("variant_rank")),
        (None, Some(_)) => return Err(ctx.missing("base_id")),
        (Some(base_id), Some(rank)) => {
            if base_id == id {
                return Err(ctx.violated("base_id", "must not refer to the record itself"));
            }
            if rank == 0 {
                return Err(ctx.violated("variant_rank", "must be at least 1"));
            }
            Some(VariantLink { base_id, rank })
        }
    };

    let mechanics = raw
        .mechanics
        .iter()
        .map(|m| {
            let name = m.name.trim();
            if name.is_empty() {
                Err(ctx.violated("mechanics", "every mechanic needs a name"))
            } else {
                Ok(Mechanic {
                    name: name.to_string(),
                    counter_strategy: non_blank(m.counter_strategy.as_ref()),
                })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Adversary {
        id,
        display_name,
        weaknesses: ctx.token_set("weaknesses", &raw.weaknesses, Weakness::parse)?,
        variant,
        difficulty: ctx.optional_token("difficulty", raw.difficulty.as_ref(), Difficulty::parse)?,
        content_type: ctx.optional_token(
            "content_type",
            raw.content_type.as_ref(),
            ContentType::parse,
        )?,
        location: non_blank(raw.location.as_ref()),
        recommended_roles: ctx.token_set("recommended_roles", &raw.recommended_roles, Role::parse)?,
        general_strategy: non_blank(raw.general_strategy.as_ref()),
        mechanics,
        mechanics_description: non_blank(raw.mechanics_description.as_ref()).unwrap_or_default(),
        data_confidence: ctx
            .optional_token(
                "data_confidence",
                raw.data_confidence.as_ref(),
                DataConfidence::parse,
            )?
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawAdversary {
        RawAdversary {
            id: "gertrude-ex1".into(),
            display_name: "Gertrude EX1".into(),
            weaknesses: vec!["fire".into(), "dagger".into()],
            base_id: Some("gertrude".into()),
            variant_rank: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn variant_link_is_built() {
        let a = validate_adversary(&raw(), 0).unwrap();
        assert_eq!(
            a.variant,
            Some(VariantLink {
                base_id: "gertrude".into(),
                rank: 1
            })
        );
        assert!(a.is_variant());
    }

    #[test]
    fn half_a_variant_link_is_rejected() {
        let mut r = raw();
        r.variant_rank = None;
        let err = validate_adversary(&r, 0).unwrap_err();
        assert_eq!(err.field(), Some("variant_rank"));

        let mut r = raw();
        r.base_id = None;
        let err = validate_adversary(&r, 0).unwrap_err();
        assert_eq!(err.field(), Some("base_id"));
    }

    #[test]
    fn self_reference_is_rejected() {
        let mut r = raw();
        r.base_id = Some("gertrude-ex1".into());
        let err = validate_adversary(&r, 0).unwrap_err();
        assert_eq!(err.field(), Some("base_id"));
    }

    #[test]
    fn unknown_weakness_is_rejected() {
        let mut r = raw();
        r.weaknesses.push("water".into());
        let err = validate_adversary(&r, 0).unwrap_err();
        assert_eq!(err.field(), Some("weaknesses"));
        assert_eq!(err.record_id(), Some("gertrude-ex1"));
    }
}
