//! Configuration for the textbook RAG pipeline

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RagConfig {
    /// Generative model configuration
    pub llm: LlmConfig,
    /// Custom prompt database configuration
    pub prompt_store: PromptStoreConfig,
    /// Vector store connection settings
    pub vector_store: VectorStoreConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl RagConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }
}

/// Generative model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Chat endpoint base URL
    pub base_url: String,
    /// Model identifier; also selects the family parameters
    pub model_id: String,
    /// Temperature for generation
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model_id: "llama3.2:3b".to_string(),
            temperature: 0.0,
            timeout_secs: 120,
        }
    }
}

/// Custom prompt database configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptStoreConfig {
    /// SQLite file holding `textbook_prompts`; no store when unset
    pub path: Option<PathBuf>,
}

/// Vector store connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorStoreConfig {
    /// Collection holding the textbook's embeddings
    pub collection_name: String,
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

impl Default for VectorStoreConfig {
    fn default() -> Self {
        Self {
            collection_name: "textbooks".to_string(),
            dbname: "postgres".to_string(),
            user: "postgres".to_string(),
            password: String::new(),
            host: "localhost".to_string(),
            port: 5432,
        }
    }
}

impl VectorStoreConfig {
    /// Connection string in the form the pgvector store expects
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql+psycopg://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.dbname
        )
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "textbook_rag=info".to_string(),
        }
    }
}
