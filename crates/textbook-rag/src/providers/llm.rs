//! Generative model trait for answer generation

use async_trait::async_trait;

use crate::error::Result;
use crate::generation::ChatPrompt;
use crate::types::RetrievedChunk;

/// Trait for document-grounded answer generation
///
/// Implementations:
/// - `OllamaChatModel`: Ollama chat endpoint
///
/// `context` holds the chunks already stuffed into `prompt.user`; adapters
/// that pass documents separately can use them directly.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Generate an answer for the prompt
    async fn generate(&self, prompt: &ChatPrompt, context: &[RetrievedChunk]) -> Result<String>;

    /// Model identifier for logging
    fn model_id(&self) -> &str;
}
