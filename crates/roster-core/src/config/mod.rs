pub mod budget_config;
pub mod defaults;
pub mod embedding_config;
pub mod retrieval_config;
pub mod roster_config;

pub use budget_config::BudgetConfig;
pub use embedding_config::EmbeddingConfig;
pub use retrieval_config::RetrievalConfig;
pub use roster_config::RosterConfig;
