//! Generation keyword arguments per model family
//!
//! Families are matched by case-insensitive substring on the model
//! identifier. Rows are tried in table order; the first match wins and the
//! default family applies when nothing matches.

use serde_json::{json, Value};

/// Model families with distinct generation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    /// General-purpose models taking `max_tokens`
    Default,
    /// Llama models taking `max_gen_len`
    Llama,
    /// Titan models taking `maxTokenCount`
    Titan,
}

/// Output length limit, named the way each family expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLimit {
    MaxTokens(u32),
    MaxGenLen(u32),
    MaxTokenCount(u32),
}

impl OutputLimit {
    /// Parameter name in the family's request body
    pub fn field_name(&self) -> &'static str {
        match self {
            OutputLimit::MaxTokens(_) => "max_tokens",
            OutputLimit::MaxGenLen(_) => "max_gen_len",
            OutputLimit::MaxTokenCount(_) => "maxTokenCount",
        }
    }

    /// Limit value
    pub fn value(&self) -> u32 {
        match *self {
            OutputLimit::MaxTokens(n) | OutputLimit::MaxGenLen(n) | OutputLimit::MaxTokenCount(n) => n,
        }
    }
}

/// Keyword arguments for a generation call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelKwargs {
    pub family: ModelFamily,
    pub temperature: f32,
    pub limit: OutputLimit,
}

type Matcher = fn(&str) -> bool;
type Builder = fn(f32) -> ModelKwargs;

/// Ordered family table; identifiers are lower-cased before matching
const FAMILY_TABLE: &[(Matcher, Builder)] = &[
    (is_llama, llama_kwargs),
    (is_titan, titan_kwargs),
];

fn is_llama(id: &str) -> bool {
    id.contains("llama")
}

fn is_titan(id: &str) -> bool {
    id.contains("titan")
}

fn default_kwargs(temperature: f32) -> ModelKwargs {
    ModelKwargs {
        family: ModelFamily::Default,
        temperature,
        limit: OutputLimit::MaxTokens(4096),
    }
}

fn llama_kwargs(temperature: f32) -> ModelKwargs {
    ModelKwargs {
        family: ModelFamily::Llama,
        temperature,
        limit: OutputLimit::MaxGenLen(2048),
    }
}

fn titan_kwargs(temperature: f32) -> ModelKwargs {
    ModelKwargs {
        family: ModelFamily::Titan,
        temperature,
        limit: OutputLimit::MaxTokenCount(4096),
    }
}

impl ModelKwargs {
    /// Select kwargs for a model identifier
    pub fn for_model(model_id: &str, temperature: f32) -> Self {
        let id = model_id.to_lowercase();

        FAMILY_TABLE
            .iter()
            .find(|(matches, _)| matches(id.as_str()))
            .map(|(_, build)| build(temperature))
            .unwrap_or_else(|| default_kwargs(temperature))
    }

    /// Numeric output limit regardless of its field name
    pub fn output_limit(&self) -> u32 {
        self.limit.value()
    }

    /// Kwargs as the family's JSON request fields
    pub fn to_json(&self) -> Value {
        let mut kwargs = json!({ "temperature": self.temperature });
        kwargs[self.limit.field_name()] = json!(self.limit.value());
        kwargs
    }
}
