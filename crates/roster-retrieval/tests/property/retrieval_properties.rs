use std::collections::HashSet;
use std::sync::OnceLock;

use proptest::prelude::*;

use roster_core::config::RosterConfig;
use roster_core::models::{EntityKind, ResultBudget, RetrievalRequest};
use roster_core::traits::IRetriever;
use roster_retrieval::RetrievalEngine;
use roster_store::load_raw_records;

fn engine() -> &'static RetrievalEngine {
    static ENGINE: OnceLock<RetrievalEngine> = OnceLock::new();
    ENGINE.get_or_init(|| {
        let engine = RetrievalEngine::new(RosterConfig::default());
        engine
            .reload(&load_raw_records(test_fixtures::kb_dir()).unwrap())
            .unwrap();
        engine
    })
}

const ANCHORS: &[&str] = &[
    "gertrude", "gertrude-ex1", "gertrude-ex2", "tytos", "auguste", "richard", "rinyu",
    "lynette", "gertrude-burst", "tytos-ice",
];
const WORDS: &[&str] = &[
    "ice", "fire", "provoke", "tank", "heal", "break", "burst", "dark", "arrows", "shield",
];

fn request() -> impl Strategy<Value = RetrievalRequest> {
    (
        prop::option::of(prop::sample::select(ANCHORS)),
        prop::collection::vec(prop::sample::select(WORDS), 0..4),
        prop::option::of(0usize..6),
        prop::option::of(0usize..4),
        prop::option::of(0usize..4),
    )
        .prop_filter("needs anchor or text", |(anchor, words, ..)| {
            anchor.is_some() || !words.is_empty()
        })
        .prop_map(|(anchor, words, characters, adversaries, teams)| RetrievalRequest {
            anchor_id: anchor.map(str::to_string),
            free_text: (!words.is_empty()).then(|| words.join(" ")),
            result_budget: Some(ResultBudget {
                characters,
                adversaries,
                teams,
            }),
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn results_respect_budgets_and_never_repeat(req in request()) {
        let engine = engine();
        let bundle = engine.retrieve(&req).unwrap();
        let caps = engine.config().budget.resolve(req.result_budget.as_ref());
        for kind in EntityKind::ALL {
            let ids = bundle.ids(kind);
            prop_assert!(ids.len() <= caps.cap(kind));
            let unique: HashSet<_> = ids.iter().collect();
            prop_assert_eq!(unique.len(), ids.len());
        }
    }

    #[test]
    fn every_result_exists_in_the_store(req in request()) {
        let engine = engine();
        let snapshot = engine.snapshot();
        let bundle = engine.retrieve(&req).unwrap();
        for kind in EntityKind::ALL {
            for id in bundle.ids(kind) {
                prop_assert!(snapshot.store.find(kind, id).is_some(), "{} {} fabricated", kind, id);
            }
        }
    }

    #[test]
    fn ranking_is_deterministic(req in request()) {
        let engine = engine();
        let first = engine.retrieve(&req).unwrap();
        let second = engine.retrieve(&req).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn exact_items_precede_semantic_items(req in request()) {
        let bundle = engine().retrieve(&req).unwrap();
        for kind in EntityKind::ALL {
            let items = bundle.items(kind);
            for pair in items.windows(2) {
                prop_assert!(pair[0].provenance <= pair[1].provenance);
            }
        }
    }
}
