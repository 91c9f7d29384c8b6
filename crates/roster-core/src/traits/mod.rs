pub mod embeddable;
pub mod embedding;
pub mod retriever;

pub use embeddable::Embeddable;
pub use embedding::IEmbeddingProvider;
pub use retriever::IRetriever;
