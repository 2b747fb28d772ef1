//! Retrieval-augmented answer pipeline
//!
//! ```text
//! query ─▶ Retriever ─▶ (no chunks? "no information")
//!                  │
//!                  ▼
//!          PromptResolver ─▶ PromptBuilder ─▶ GenerativeModel
//!                                                   │
//!                          collect_sources(chunks) ◀┘
//! ```
//!
//! Every stage runs once, in order. Any error becomes an apology response
//! with no sources; callers never see an `Err`.

use std::sync::Arc;

use crate::config::RagConfig;
use crate::error::Result;
use crate::generation::{collect_sources, PromptBuilder, PromptResolver};
use crate::providers::{GenerativeModel, OllamaChatModel, Retriever};
use crate::storage::{PromptStore, SqlitePromptStore};
use crate::types::AnswerResponse;

const QUERY_LOG_CHARS: usize = 50;

/// Answer a query about a textbook
pub async fn answer(
    query: &str,
    textbook_id: &str,
    model: &dyn GenerativeModel,
    retriever: &dyn Retriever,
    prompts: Option<&dyn PromptStore>,
) -> AnswerResponse {
    let preview: String = query.chars().take(QUERY_LOG_CHARS).collect();
    tracing::info!("Generating response for query: {}...", preview);

    match try_answer(query, textbook_id, model, retriever, prompts).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(origin = e.origin(), "Error answering query: {}", e);
            AnswerResponse::from_error(&e)
        }
    }
}

async fn try_answer(
    query: &str,
    textbook_id: &str,
    model: &dyn GenerativeModel,
    retriever: &dyn Retriever,
    prompts: Option<&dyn PromptStore>,
) -> Result<AnswerResponse> {
    let chunks = retriever.fetch_relevant(query).await?;
    tracing::info!("Retrieved {} documents", chunks.len());

    if chunks.is_empty() {
        return Ok(AnswerResponse::not_found(textbook_id));
    }

    let instructions = PromptResolver::resolve(textbook_id, prompts);
    let prompt = PromptBuilder::build_chat_prompt(&instructions, query, &chunks);

    let answer = model.generate(&prompt, &chunks).await?;
    let sources_used = collect_sources(&chunks)?;

    tracing::info!(
        "Answered with model {}, {} sources",
        model.model_id(),
        sources_used.len()
    );

    Ok(AnswerResponse::new(answer, sources_used))
}

/// Pipeline holding shared capabilities for repeated queries
#[derive(Clone)]
pub struct AnswerPipeline {
    retriever: Arc<dyn Retriever>,
    model: Arc<dyn GenerativeModel>,
    prompts: Option<Arc<dyn PromptStore>>,
}

impl AnswerPipeline {
    /// Create a pipeline without a prompt store
    pub fn new(retriever: Arc<dyn Retriever>, model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            retriever,
            model,
            prompts: None,
        }
    }

    /// Attach a custom prompt store
    pub fn with_prompt_store(mut self, prompts: Arc<dyn PromptStore>) -> Self {
        self.prompts = Some(prompts);
        self
    }

    /// Build the configured model and prompt store around a retriever
    pub fn from_config(config: &RagConfig, retriever: Arc<dyn Retriever>) -> Result<Self> {
        let model = Arc::new(OllamaChatModel::new(&config.llm)?);
        let pipeline = Self::new(retriever, model);

        match &config.prompt_store.path {
            Some(path) => {
                let store = SqlitePromptStore::open(path)?;
                Ok(pipeline.with_prompt_store(Arc::new(store)))
            }
            None => {
                tracing::warn!("No prompt store configured, default instructions only");
                Ok(pipeline)
            }
        }
    }

    /// Whether custom prompts can be looked up
    pub fn has_prompt_store(&self) -> bool {
        self.prompts.is_some()
    }

    /// Answer a query about a textbook
    pub async fn answer(&self, query: &str, textbook_id: &str) -> AnswerResponse {
        answer(
            query,
            textbook_id,
            self.model.as_ref(),
            self.retriever.as_ref(),
            self.prompts.as_deref(),
        )
        .await
    }
}
