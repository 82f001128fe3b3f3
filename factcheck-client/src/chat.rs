use factcheck_mcp::models::McpEnvelope;
use factcheck_mcp::pipeline::find_claims;
use tracing::info;

use crate::ollama::{ChatMessage, CompletionBackend};
use crate::service::{ClientError, FactCheckClient};

/// What one chat turn produced: the assistant reply plus any fact checks
/// that were injected along the way.
pub struct TurnOutcome {
    pub response: String,
    pub duration_secs: f64,
    pub fact_checks: Vec<McpEnvelope>,
}

/// Conversation loop state: detects capital claims in user input, verifies
/// them against the service, and forwards the augmented context to the LLM.
pub struct ChatSession<B: CompletionBackend> {
    backend: B,
    checker: FactCheckClient,
    system_prompt: String,
    history: Vec<ChatMessage>,
}

impl<B: CompletionBackend> ChatSession<B> {
    pub fn new(backend: B, checker: FactCheckClient, system_prompt: String) -> Self {
        Self {
            backend,
            checker,
            system_prompt,
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Run one user turn. Claim verification failures abort the turn; the
    /// caller surfaces them as a single terminal message.
    pub async fn turn(&mut self, user_input: &str) -> Result<TurnOutcome, ClientError> {
        let claims = find_claims(user_input);
        let mut fact_checks = Vec::with_capacity(claims.len());
        for claim in &claims {
            info!(%claim, "detected capital claim");
            fact_checks.push(self.checker.verify_claim(claim).await?);
        }

        let system = if fact_checks.is_empty() {
            self.system_prompt.clone()
        } else {
            augmented_system(&self.system_prompt, &verified_facts_block(&fact_checks))
        };

        self.history.push(ChatMessage::user(user_input));
        let completion = self.backend.complete(Some(&system), &self.history).await?;
        self.history
            .push(ChatMessage::assistant(completion.content.clone()));

        Ok(TurnOutcome {
            response: completion.content,
            duration_secs: completion.duration_secs,
            fact_checks,
        })
    }
}

/// Render verified claims as the bullet block injected into the system
/// prompt.
pub fn verified_facts_block(results: &[McpEnvelope]) -> String {
    let mut block = String::from("### Verified Facts:\n");
    for result in results {
        block.push_str(&format!(
            "- {}: {}\n",
            result.context.claim, result.context.correct_answer
        ));
    }
    block
}

pub fn augmented_system(base: &str, facts_block: &str) -> String {
    format!(
        "{}\n\nIMPORTANT: Use the verified facts below to ensure your response is factually accurate:\n{}",
        base, facts_block
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ollama::Completion;
    use async_trait::async_trait;
    use factcheck_mcp::models::{McpContext, MCP_VERSION};
    use std::sync::Mutex;

    struct MockBackend {
        seen_system: Mutex<Vec<String>>,
    }

    impl MockBackend {
        fn new() -> Self {
            Self {
                seen_system: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CompletionBackend for MockBackend {
        async fn complete(
            &self,
            system: Option<&str>,
            messages: &[ChatMessage],
        ) -> Result<Completion, ClientError> {
            self.seen_system
                .lock()
                .unwrap()
                .push(system.unwrap_or_default().to_string());
            Ok(Completion {
                content: format!("echo: {}", messages.last().unwrap().content),
                duration_secs: 0.5,
            })
        }
    }

    fn envelope(claim: &str, answer: &str) -> McpEnvelope {
        McpEnvelope {
            version: MCP_VERSION.to_string(),
            context: McpContext {
                context_type: "fact_check".to_string(),
                claim: claim.to_string(),
                correct_answer: answer.to_string(),
                confidence: 0.95,
            },
        }
    }

    #[tokio::test]
    async fn claim_free_turn_keeps_the_base_system_prompt() {
        let backend = MockBackend::new();
        let checker = FactCheckClient::new("http://127.0.0.1:5000".into());
        let mut session = ChatSession::new(backend, checker, "be helpful".into());

        let outcome = session.turn("Tell me about the weather in Oslo").await.unwrap();
        assert_eq!(outcome.response, "echo: Tell me about the weather in Oslo");
        assert!(outcome.fact_checks.is_empty());
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[0].role, "user");
        assert_eq!(session.history()[1].role, "assistant");

        let seen = session.backend.seen_system.lock().unwrap();
        assert_eq!(seen.as_slice(), ["be helpful"]);
    }

    #[tokio::test]
    async fn history_accumulates_across_turns() {
        let backend = MockBackend::new();
        let checker = FactCheckClient::new("http://127.0.0.1:5000".into());
        let mut session = ChatSession::new(backend, checker, "be helpful".into());

        session.turn("first").await.unwrap();
        session.turn("second").await.unwrap();
        assert_eq!(session.history().len(), 4);
    }

    #[test]
    fn facts_block_lists_each_verified_claim() {
        let block = verified_facts_block(&[
            envelope(
                "The capital of France is London",
                "Incorrect. The capital of France is Paris, not London.",
            ),
            envelope(
                "The capital of Japan is Tokyo",
                "Correct. The capital of Japan is Tokyo.",
            ),
        ]);
        assert!(block.starts_with("### Verified Facts:\n"));
        assert!(block.contains("- The capital of France is London: Incorrect."));
        assert!(block.contains("- The capital of Japan is Tokyo: Correct."));
    }

    #[test]
    fn augmented_system_appends_the_facts_block() {
        let out = augmented_system("base prompt", "### Verified Facts:\n- x: y\n");
        assert!(out.starts_with("base prompt\n\nIMPORTANT:"));
        assert!(out.ends_with("- x: y\n"));
    }
}
