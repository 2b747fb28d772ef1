//! Prompt construction and citation handling

pub mod citation;
pub mod prompt;

pub use citation::collect_sources;
pub use prompt::{ChatMessage, ChatPrompt, PromptBuilder, PromptResolver, Role, DEFAULT_INSTRUCTIONS};
