//! Client side of the fact-check MCP demo: claim detection in prompts,
//! verification against the service, and Ollama completion plumbing.

pub mod chat;
pub mod ollama;
pub mod service;

pub use chat::ChatSession;
pub use ollama::{ChatMessage, Completion, CompletionBackend, OllamaClient};
pub use service::{ClientError, FactCheckClient};
