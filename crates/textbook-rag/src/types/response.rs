//! Response type for textbook queries

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Answer returned to the request handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResponse {
    /// Generated answer, or an explanatory message
    pub response: String,
    /// Citations in first-seen order, one per source document
    pub sources_used: Vec<String>,
}

impl AnswerResponse {
    /// Create a response with generated text and its citations
    pub fn new(response: String, sources_used: Vec<String>) -> Self {
        Self {
            response,
            sources_used,
        }
    }

    /// Response when retrieval found nothing for the textbook
    pub fn not_found(textbook_id: &str) -> Self {
        Self {
            response: format!(
                "I don't have any information about this in textbook {}.",
                textbook_id
            ),
            sources_used: Vec::new(),
        }
    }

    /// Response when any stage of the pipeline failed
    pub fn from_error(error: &Error) -> Self {
        Self {
            response: format!(
                "Sorry, I encountered an error when trying to answer your question: {}",
                error
            ),
            sources_used: Vec::new(),
        }
    }
}
