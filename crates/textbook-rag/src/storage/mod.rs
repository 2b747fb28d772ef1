//! Storage for custom textbook prompts
//!
//! The answer pipeline treats the database as optional: callers pass
//! `Option<&dyn PromptStore>` and the resolver falls back to default
//! instructions when it is absent.

mod prompt_store;

pub use prompt_store::{PromptStore, SqlitePromptStore};
