use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::service::ClientError;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

pub struct Completion {
    pub content: String,
    /// Model-side processing time as reported by the API, in seconds.
    pub duration_secs: f64,
}

/// Seam over the completion API so the chat loop is testable offline.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(
        &self,
        system: Option<&str>,
        messages: &[ChatMessage],
    ) -> Result<Completion, ClientError>;
}

/// Chat client for a local Ollama instance.
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    temperature: f32,
}

#[derive(Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct OllamaChatResponse {
    message: OllamaResponseMessage,
    #[serde(default)]
    total_duration: u64,
}

#[derive(Deserialize)]
struct OllamaResponseMessage {
    content: String,
}

impl OllamaClient {
    /// `base_url` defaults to the standard local Ollama port when empty.
    pub fn new(base_url: String, model: String, temperature: f32) -> Self {
        let base_url = if base_url.trim().is_empty() {
            "http://127.0.0.1:11434".to_string()
        } else {
            base_url.trim_end_matches('/').to_string()
        };
        Self {
            client: reqwest::Client::new(),
            base_url,
            model,
            temperature,
        }
    }
}

#[async_trait]
impl CompletionBackend for OllamaClient {
    async fn complete(
        &self,
        system: Option<&str>,
        messages: &[ChatMessage],
    ) -> Result<Completion, ClientError> {
        let mut payload = Vec::with_capacity(messages.len() + 1);
        if let Some(system) = system {
            payload.push(ChatMessage::system(system));
        }
        payload.extend_from_slice(messages);

        let url = format!("{}/api/chat", self.base_url);
        let request = OllamaChatRequest {
            model: &self.model,
            messages: payload,
            stream: false,
            options: OllamaOptions {
                temperature: self.temperature,
            },
        };

        debug!(%url, model = %self.model, turns = messages.len(), "calling Ollama");
        let resp = self.client.post(&url).json(&request).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OllamaChatResponse = resp.json().await?;
        Ok(Completion {
            content: parsed.message.content,
            duration_secs: parsed.total_duration as f64 / 1e9,
        })
    }
}
