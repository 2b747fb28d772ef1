//! textbook-rag: retrieval-augmented answers over textbooks
//!
//! Given a question and a textbook, the pipeline fetches relevant chunks,
//! picks the textbook's custom instructions (or the default ones), asks a
//! generative model for an answer grounded in those chunks, and cites the
//! source documents the chunks came from.
//!
//! Retrieval, generation and prompt storage are capabilities behind traits
//! ([`Retriever`], [`GenerativeModel`], [`PromptStore`]); the pipeline itself
//! holds no state between queries.

pub mod config;
pub mod error;
pub mod generation;
pub mod logging;
pub mod pipeline;
pub mod providers;
pub mod storage;
pub mod text;
pub mod types;

pub use config::RagConfig;
pub use error::{Error, Result};
pub use generation::{ChatPrompt, PromptResolver, DEFAULT_INSTRUCTIONS};
pub use pipeline::{answer, AnswerPipeline};
pub use providers::{GenerativeModel, ModelKwargs, Retriever};
pub use storage::{PromptStore, SqlitePromptStore};
pub use text::split_into_sentences;
pub use types::{AnswerResponse, RetrievedChunk};
