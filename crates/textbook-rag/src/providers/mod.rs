//! Provider abstractions for retrieval and generation
//!
//! The pipeline depends only on the traits; concrete backends plug in
//! behind them.

pub mod llm;
pub mod model_params;
pub mod ollama;
pub mod retriever;

pub use llm::GenerativeModel;
pub use model_params::{ModelFamily, ModelKwargs, OutputLimit};
pub use ollama::OllamaChatModel;
pub use retriever::Retriever;
