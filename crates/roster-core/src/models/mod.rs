pub mod adversary;
pub mod bundle;
pub mod character;
pub mod entity_kind;
pub mod metadata;
pub mod raw;
pub mod request;
pub mod team;
pub mod vocab;

pub use adversary::{Adversary, Mechanic, VariantLink};
pub use bundle::{
    BundleItem, CompletenessGrade, DataCompleteness, DataGap, GapReason, KindCompleteness,
    Provenance, RetrievalBundle,
};
pub use character::{Character, RegionTiers};
pub use entity_kind::EntityKind;
pub use metadata::{IndexMetadata, MetadataFilter};
pub use raw::{RawAdversary, RawCharacter, RawMechanic, RawRecords, RawTeam};
pub use request::{Constraints, ResultBudget, RetrievalRequest};
pub use team::Team;
pub use vocab::{
    ContentType, DataConfidence, Difficulty, Influence, InvestmentLevel, Job, Role,
    StrategyType, Tier, TierRegion, Weakness,
};
