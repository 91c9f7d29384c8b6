use proptest::prelude::*;

use roster_core::models::{EntityKind, IndexMetadata};
use roster_core::traits::{Embeddable, IEmbeddingProvider};
use roster_embeddings::{vector, EmbeddingIndex, TfIdfFallback};

#[derive(Debug, Clone)]
struct Doc {
    id: String,
    text: String,
}

impl Embeddable for Doc {
    const KIND: EntityKind = EntityKind::Character;

    fn entity_id(&self) -> &str {
        &self.id
    }

    fn embedding_text(&self) -> String {
        self.text.clone()
    }

    fn index_metadata(&self) -> IndexMetadata {
        IndexMetadata::default()
    }
}

const WORDS: &[&str] = &[
    "ice", "fire", "sword", "tank", "healer", "provoke", "burst", "shield", "break", "dagger",
    "wind", "spells", "party", "buff", "debuff",
];

fn docs() -> impl Strategy<Value = Vec<Doc>> {
    prop::collection::vec(prop::collection::vec(prop::sample::select(WORDS), 1..6), 0..25).prop_map(
        |texts| {
            texts
                .into_iter()
                .enumerate()
                .map(|(i, words)| Doc {
                    id: format!("d{i:02}"),
                    text: words.join(" "),
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn every_stored_vector_is_unit_length(docs in docs()) {
        let index = EmbeddingIndex::build(&docs, &TfIdfFallback::new(64)).unwrap();
        prop_assert_eq!(index.len(), docs.len());
        for entry in index.entries() {
            prop_assert!((vector::norm(&entry.vector) - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn query_returns_exactly_min_k_corpus(
        docs in docs(),
        k in 0usize..40,
        words in prop::collection::vec(prop::sample::select(WORDS), 0..4),
    ) {
        let provider = TfIdfFallback::new(64);
        let index = EmbeddingIndex::build(&docs, &provider).unwrap();
        let q = provider.embed(&words.join(" ")).unwrap();
        let hits = index.query(&q, k, None).unwrap();
        prop_assert_eq!(hits.len(), k.min(docs.len()));
        for hit in &hits {
            prop_assert!((-1.0..=1.0).contains(&hit.score));
        }
    }

    #[test]
    fn results_are_ordered_and_repeatable(
        docs in docs(),
        words in prop::collection::vec(prop::sample::select(WORDS), 1..4),
    ) {
        let provider = TfIdfFallback::new(64);
        let index = EmbeddingIndex::build(&docs, &provider).unwrap();
        let q = provider.embed(&words.join(" ")).unwrap();
        let first = index.query(&q, 10, None).unwrap();
        let second = index.query(&q, 10, None).unwrap();
        prop_assert_eq!(&first, &second);
        for pair in first.windows(2) {
            prop_assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].id < pair[1].id)
            );
        }
    }
}
