//! Prompt templates and instruction resolution for textbook answers

use serde::{Deserialize, Serialize};

use crate::storage::PromptStore;
use crate::types::RetrievedChunk;

/// Instruction text used when a textbook has no custom prompt
pub const DEFAULT_INSTRUCTIONS: &str = "You are a helpful assistant that answers questions about textbooks. \
Provide accurate information based only on the content provided. \
If the context doesn't contain relevant information to fully answer the question, acknowledge this limitation. \
When appropriate, reference specific sections or page numbers from the textbook.";

/// Separator placed between chunk texts when stuffing them into the prompt
pub const CHUNK_SEPARATOR: &str = "\n\n";

/// Chat role of a prompt message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Two-message prompt: instructions plus the user's question with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    /// System message content
    pub system: String,
    /// Human message content (query followed by textbook context)
    pub user: String,
}

impl ChatPrompt {
    /// Messages in the order a chat endpoint expects
    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: Role::System,
                content: self.system.clone(),
            },
            ChatMessage {
                role: Role::User,
                content: self.user.clone(),
            },
        ]
    }
}

/// Prompt builder for textbook queries
pub struct PromptBuilder;

impl PromptBuilder {
    /// Concatenate chunk texts in retrieval order
    pub fn build_context(chunks: &[RetrievedChunk]) -> String {
        chunks
            .iter()
            .map(|chunk| chunk.text.as_str())
            .collect::<Vec<_>>()
            .join(CHUNK_SEPARATOR)
    }

    /// Build the chat prompt with the chunks stuffed into the human message
    pub fn build_chat_prompt(
        instructions: &str,
        query: &str,
        chunks: &[RetrievedChunk],
    ) -> ChatPrompt {
        ChatPrompt {
            system: instructions.to_string(),
            user: format!(
                "{query}\n\nContext from textbook:\n{context}",
                query = query,
                context = Self::build_context(chunks)
            ),
        }
    }
}

/// Resolves the instruction text for a textbook.
///
/// With no store the default instructions are returned without any lookup.
/// Otherwise exactly one read is made; a missing row, an empty prompt or a
/// failed read all fall back to the default. Failures are logged, never
/// returned.
pub struct PromptResolver;

impl PromptResolver {
    pub fn resolve(textbook_id: &str, store: Option<&dyn PromptStore>) -> String {
        let Some(store) = store else {
            tracing::debug!("No prompt store, using default instructions");
            return DEFAULT_INSTRUCTIONS.to_string();
        };

        match store.latest_prompt(textbook_id) {
            Ok(Some(prompt)) if !prompt.is_empty() => {
                tracing::debug!("Using custom prompt for textbook {}", textbook_id);
                prompt
            }
            Ok(_) => {
                tracing::debug!("No custom prompt for textbook {}, using default", textbook_id);
                DEFAULT_INSTRUCTIONS.to_string()
            }
            Err(e) => {
                tracing::error!("Error fetching textbook prompt: {}", e);
                DEFAULT_INSTRUCTIONS.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedStore {
        answer: fn() -> Result<Option<String>>,
        calls: AtomicUsize,
    }

    impl FixedStore {
        fn new(answer: fn() -> Result<Option<String>>) -> Self {
            Self {
                answer,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl PromptStore for FixedStore {
        fn latest_prompt(&self, _textbook_id: &str) -> Result<Option<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.answer)()
        }
    }

    #[test]
    fn test_default_instructions_text() {
        assert_eq!(
            DEFAULT_INSTRUCTIONS,
            "You are a helpful assistant that answers questions about textbooks. Provide accurate information based only on the content provided. If the context doesn't contain relevant information to fully answer the question, acknowledge this limitation. When appropriate, reference specific sections or page numbers from the textbook."
        );
    }

    #[test]
    fn test_no_store_uses_default() {
        assert_eq!(PromptResolver::resolve("bio-101", None), DEFAULT_INSTRUCTIONS);
    }

    #[test]
    fn test_custom_prompt_wins() {
        let store = FixedStore::new(|| Ok(Some("Answer like a pirate.".to_string())));
        assert_eq!(
            PromptResolver::resolve("bio-101", Some(&store)),
            "Answer like a pirate."
        );
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_missing_or_empty_prompt_uses_default() {
        let missing = FixedStore::new(|| Ok(None));
        let empty = FixedStore::new(|| Ok(Some(String::new())));

        assert_eq!(PromptResolver::resolve("bio-101", Some(&missing)), DEFAULT_INSTRUCTIONS);
        assert_eq!(PromptResolver::resolve("bio-101", Some(&empty)), DEFAULT_INSTRUCTIONS);
    }

    #[test]
    fn test_lookup_error_uses_default_once() {
        let store = FixedStore::new(|| Err(Error::prompt_lookup("connection reset")));
        assert_eq!(PromptResolver::resolve("bio-101", Some(&store)), DEFAULT_INSTRUCTIONS);
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_chat_prompt_layout() {
        let chunks = vec![
            RetrievedChunk::new("Cells are the unit of life."),
            RetrievedChunk::new("Mitochondria make ATP."),
        ];
        let prompt = PromptBuilder::build_chat_prompt("Be brief.", "What is a cell?", &chunks);

        assert_eq!(prompt.system, "Be brief.");
        assert_eq!(
            prompt.user,
            "What is a cell?\n\nContext from textbook:\nCells are the unit of life.\n\nMitochondria make ATP."
        );

        let messages = prompt.messages();
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
    }
}
