//! Error types for the textbook RAG pipeline

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline errors, classified by where they originated
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Retriever failed to fetch chunks
    #[error("Retrieval failed: {0}")]
    Retrieval(String),

    /// Custom prompt lookup failed
    #[error("Prompt lookup failed: {0}")]
    PromptLookup(String),

    /// Model invocation failed
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Chunk metadata could not be turned into a citation
    #[error("Malformed chunk metadata: {0}")]
    Metadata(String),

    /// SQLite error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a retrieval error
    pub fn retrieval(message: impl Into<String>) -> Self {
        Self::Retrieval(message.into())
    }

    /// Create a prompt lookup error
    pub fn prompt_lookup(message: impl Into<String>) -> Self {
        Self::PromptLookup(message.into())
    }

    /// Create a generation error
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation(message.into())
    }

    /// Create a metadata error
    pub fn metadata(message: impl Into<String>) -> Self {
        Self::Metadata(message.into())
    }

    /// Short label for the error's origin, used in log fields
    pub fn origin(&self) -> &'static str {
        match self {
            Error::Config(_) | Error::Toml(_) => "config",
            Error::Retrieval(_) => "retrieval",
            Error::PromptLookup(_) | Error::Database(_) => "prompt_lookup",
            Error::Generation(_) | Error::Http(_) => "generation",
            Error::Metadata(_) | Error::Json(_) => "metadata",
            Error::Io(_) => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_origin_message() {
        let err = Error::generation("model timed out");
        assert_eq!(err.to_string(), "Generation failed: model timed out");
        assert_eq!(err.origin(), "generation");
    }

    #[test]
    fn test_database_errors_count_as_prompt_lookup() {
        let err = Error::from(rusqlite::Error::InvalidQuery);
        assert_eq!(err.origin(), "prompt_lookup");
    }
}
