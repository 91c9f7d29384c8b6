use proptest::prelude::*;

use roster_core::models::{EntityKind, RawCharacter, RawRecords, RawTeam, RawAdversary};
use roster_store::EntityStore;

const ROLES: &[&str] = &["tank", "healer", "buffer", "debuffer", "breaker", "physical-dps", "elemental-dps"];
const JOBS: &[&str] = &["warrior", "merchant", "thief", "apothecary", "hunter", "cleric", "scholar", "dancer"];

fn raw_character(id: String) -> impl Strategy<Value = RawCharacter> {
    (
        prop::sample::select(JOBS),
        prop::collection::vec(prop::sample::select(ROLES), 0..3),
    )
        .prop_map(move |(job, roles)| RawCharacter {
            id: id.clone(),
            display_name: id.to_uppercase(),
            job: job.to_string(),
            roles: roles.into_iter().map(str::to_string).collect(),
            ..Default::default()
        })
}

fn raw_batch() -> impl Strategy<Value = RawRecords> {
    (1usize..20)
        .prop_flat_map(|n| {
            (0..n)
                .map(|i| raw_character(format!("c{i}")))
                .collect::<Vec<_>>()
        })
        .prop_map(|characters| {
            let team = RawTeam {
                id: "t0".into(),
                adversary_id: "boss".into(),
                front: vec![characters[0].id.clone()],
                rationale: "Solo carry.".into(),
                ..Default::default()
            };
            RawRecords {
                characters,
                adversaries: vec![RawAdversary {
                    id: "boss".into(),
                    display_name: "Boss".into(),
                    ..Default::default()
                }],
                teams: vec![team],
            }
        })
}

proptest! {
    #[test]
    fn get_round_trips_every_loaded_record(raw in raw_batch()) {
        let store = EntityStore::load(&raw).unwrap();
        prop_assert_eq!(store.count(EntityKind::Character), raw.characters.len());
        for c in &raw.characters {
            let got = store.character(&c.id).unwrap();
            prop_assert_eq!(&got.id, &c.id);
            prop_assert_eq!(got.roles.len(), {
                let mut r = c.roles.clone();
                r.sort();
                r.dedup();
                r.len()
            });
        }
    }

    #[test]
    fn filter_preserves_load_order(raw in raw_batch()) {
        let store = EntityStore::load(&raw).unwrap();
        let all: Vec<_> = store.filter(EntityKind::Character, |_| true).map(|r| r.id()).collect();
        let expected: Vec<_> = raw.characters.iter().map(|c| c.id.as_str()).collect();
        prop_assert_eq!(all, expected);
    }

    #[test]
    fn dangling_member_rejects_the_batch(raw in raw_batch()) {
        let mut raw = raw;
        raw.teams[0].back.push("nobody".into());
        let err = EntityStore::load(&raw).unwrap_err();
        prop_assert!(err.is_validation());
    }
}
