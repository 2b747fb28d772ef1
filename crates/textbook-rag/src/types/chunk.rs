//! Retrieved chunk type with loosely-typed metadata

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Metadata key naming the source document of a chunk
pub const SOURCE_KEY: &str = "source";
/// Metadata key holding the page a chunk came from
pub const PAGE_KEY: &str = "page";

/// A unit of retrieved context: text plus whatever metadata the store kept
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievedChunk {
    /// Chunk text
    pub text: String,
    /// Metadata mapping; keys are not fixed
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl RetrievedChunk {
    /// Create a chunk without metadata
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: Map::new(),
        }
    }

    /// Builder-style metadata insert
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Rendered `source` value, `None` when absent or empty
    pub fn source(&self) -> Result<Option<String>> {
        metadata_text(&self.metadata, SOURCE_KEY)
    }

    /// Rendered `page` value, `None` when absent or falsy (null, 0, "", false)
    pub fn page(&self) -> Result<Option<String>> {
        metadata_text(&self.metadata, PAGE_KEY)
    }
}

/// Render a scalar metadata value as display text.
///
/// Falsy values (null, empty string, zero, false) read as absent.
/// Arrays and objects cannot be cited and are reported as malformed.
fn metadata_text(metadata: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    let Some(value) = metadata.get(key) else {
        return Ok(None);
    };

    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Bool(false) => Ok(None),
        Value::Bool(true) => Ok(Some("true".to_string())),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(None),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Array(_) | Value::Object(_) => Err(Error::metadata(format!(
            "'{}' must be a scalar, got {}",
            key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_source_and_page_rendering() {
        let chunk = RetrievedChunk::new("text")
            .with_metadata("source", "Biology 101")
            .with_metadata("page", 12);

        assert_eq!(chunk.source().unwrap().as_deref(), Some("Biology 101"));
        assert_eq!(chunk.page().unwrap().as_deref(), Some("12"));
    }

    #[test]
    fn test_falsy_values_read_as_absent() {
        let chunk = RetrievedChunk::new("text")
            .with_metadata("source", "")
            .with_metadata("page", 0);

        assert_eq!(chunk.source().unwrap(), None);
        assert_eq!(chunk.page().unwrap(), None);
        assert_eq!(RetrievedChunk::new("bare").page().unwrap(), None);
    }

    #[test]
    fn test_string_pages_are_kept_verbatim() {
        let chunk = RetrievedChunk::new("text").with_metadata("page", "xiv");
        assert_eq!(chunk.page().unwrap().as_deref(), Some("xiv"));
    }

    #[test]
    fn test_structured_source_is_malformed() {
        let chunk = RetrievedChunk::new("text").with_metadata("source", json!({"title": "A"}));
        assert!(matches!(chunk.source(), Err(Error::Metadata(_))));
    }

    #[test]
    fn test_deserialize_without_metadata() {
        let chunk: RetrievedChunk = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert!(chunk.metadata.is_empty());
    }
}
