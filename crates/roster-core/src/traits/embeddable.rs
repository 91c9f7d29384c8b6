use crate::models::{Adversary, Character, EntityKind, IndexMetadata, Team};

/// A record that can be placed in an embedding index.
pub trait Embeddable {
    const KIND: EntityKind;

    fn entity_id(&self) -> &str;

    /// Descriptive text for the embedding provider. Never the bare identifier.
    fn embedding_text(&self) -> String;

    fn index_metadata(&self) -> IndexMetadata;
}

impl Embeddable for Character {
    const KIND: EntityKind = EntityKind::Character;

    fn entity_id(&self) -> &str {
        &self.id
    }

    fn embedding_text(&self) -> String {
        Character::embedding_text(self)
    }

    fn index_metadata(&self) -> IndexMetadata {
        Character::index_metadata(self)
    }
}

impl Embeddable for Adversary {
    const KIND: EntityKind = EntityKind::Adversary;

    fn entity_id(&self) -> &str {
        &self.id
    }

    fn embedding_text(&self) -> String {
        Adversary::embedding_text(self)
    }

    fn index_metadata(&self) -> IndexMetadata {
        Adversary::index_metadata(self)
    }
}

impl Embeddable for Team {
    const KIND: EntityKind = EntityKind::Team;

    fn entity_id(&self) -> &str {
        &self.id
    }

    fn embedding_text(&self) -> String {
        Team::embedding_text(self)
    }

    fn index_metadata(&self) -> IndexMetadata {
        Team::index_metadata(self)
    }
}
