//! Ollama chat model for answer generation
//!
//! One request per call; failures surface to the pipeline as generation
//! errors rather than being retried here.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::LlmConfig;
use crate::error::{Error, Result};
use crate::generation::{ChatMessage, ChatPrompt};
use crate::types::RetrievedChunk;

use super::llm::GenerativeModel;
use super::model_params::ModelKwargs;

/// Ollama `/api/chat` client
pub struct OllamaChatModel {
    client: Client,
    base_url: String,
    model_id: String,
    kwargs: ModelKwargs,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    stream: bool,
    options: ChatOptions,
}

#[derive(Debug, Serialize)]
struct ChatOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OllamaChatModel {
    /// Create a chat model from configuration
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(5)
            .build()?;

        let kwargs = ModelKwargs::for_model(&config.model_id, config.temperature);
        tracing::info!("Initializing model {}", config.model_id);
        tracing::debug!("Model kwargs: {}", kwargs.to_json());

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model_id: config.model_id.clone(),
            kwargs,
        })
    }

    /// Generation kwargs selected for this model
    pub fn kwargs(&self) -> &ModelKwargs {
        &self.kwargs
    }

    fn build_request<'a>(&'a self, prompt: &ChatPrompt) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model_id,
            messages: prompt.messages(),
            stream: false,
            options: ChatOptions {
                temperature: self.kwargs.temperature,
                num_predict: self.kwargs.output_limit(),
            },
        }
    }
}

#[async_trait]
impl GenerativeModel for OllamaChatModel {
    async fn generate(&self, prompt: &ChatPrompt, context: &[RetrievedChunk]) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);
        let request = self.build_request(prompt);

        tracing::info!(
            "Generating answer with model {} over {} chunks",
            self.model_id,
            context.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::generation(format!("Chat request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::generation(format!(
                "Chat failed: HTTP {} - {}",
                status, body
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::generation(format!("Failed to parse chat response: {}", e)))?;

        Ok(chat_response.message.content)
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
