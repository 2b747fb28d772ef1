//! Retriever trait for fetching textbook chunks

use async_trait::async_trait;

use crate::error::Result;
use crate::types::RetrievedChunk;

/// Trait for relevance search over a textbook's chunks
///
/// Nearest-neighbour search lives behind this trait, typically a pgvector
/// collection per textbook (see `VectorStoreConfig`). Results are returned
/// in the store's relevance order and are not re-ranked by the pipeline.
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Fetch chunks relevant to the query
    async fn fetch_relevant(&self, query: &str) -> Result<Vec<RetrievedChunk>>;
}
