//! Data-completeness summary of a bundle: how much of what was returned is
//! backed by verified data.

use roster_core::models::{BundleItem, DataCompleteness, EntityKind, KindCompleteness};
use roster_store::EntityStore;

pub fn summarize(
    store: &EntityStore,
    characters: &[BundleItem],
    adversaries: &[BundleItem],
    teams: &[BundleItem],
) -> DataCompleteness {
    DataCompleteness {
        characters: for_kind(store, EntityKind::Character, characters),
        adversaries: for_kind(store, EntityKind::Adversary, adversaries),
        teams: for_kind(store, EntityKind::Team, teams),
    }
}

fn for_kind(store: &EntityStore, kind: EntityKind, items: &[BundleItem]) -> KindCompleteness {
    let verified = items
        .iter()
        .filter(|i| store.find(kind, &i.id).is_some_and(|r| r.is_verified()))
        .count();
    KindCompleteness::new(items.len(), verified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::models::{CompletenessGrade, Provenance, RawCharacter, RawRecords};

    fn item(id: &str) -> BundleItem {
        BundleItem {
            id: id.into(),
            provenance: Provenance::Exact,
            score: None,
        }
    }

    #[test]
    fn grades_by_verified_share() {
        let raw = RawRecords {
            characters: (0..5)
                .map(|i| RawCharacter {
                    id: format!("c{i}"),
                    display_name: format!("C{i}"),
                    job: "thief".into(),
                    data_confidence: Some(if i < 3 { "verified" } else { "tested" }.into()),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        };
        let store = EntityStore::load(&raw).unwrap();
        let items: Vec<_> = (0..5).map(|i| item(&format!("c{i}"))).collect();

        let summary = summarize(&store, &items, &[], &[]);
        assert_eq!(summary.characters.verified, 3);
        assert_eq!(summary.characters.grade, CompletenessGrade::Partial);
        assert_eq!(summary.teams.grade, CompletenessGrade::Minimal);

        let summary = summarize(&store, &items[..3], &[], &[]);
        assert_eq!(summary.characters.grade, CompletenessGrade::Complete);
    }
}
