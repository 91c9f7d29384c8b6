use crate::errors::RosterResult;
use crate::models::{RetrievalBundle, RetrievalRequest};

/// Answers retrieval requests with a ranked, capped grounding bundle.
pub trait IRetriever: Send + Sync {
    fn retrieve(&self, request: &RetrievalRequest) -> RosterResult<RetrievalBundle>;
}
