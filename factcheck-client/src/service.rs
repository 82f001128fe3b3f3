use factcheck_mcp::models::McpEnvelope;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
}

/// HTTP client for the fact-check service's `/fact-check` endpoint.
pub struct FactCheckClient {
    client: reqwest::Client,
    base_url: String,
}

impl FactCheckClient {
    /// `base_url` should be like `http://127.0.0.1:5000` (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn verify_claim(&self, claim: &str) -> Result<McpEnvelope, ClientError> {
        let url = format!("{}/fact-check", self.base_url);

        info!(%url, claim, "verifying claim");
        let resp = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "claim": claim }))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: McpEnvelope = resp.json().await?;
        info!(
            confidence = envelope.context.confidence,
            answer = %envelope.context.correct_answer,
            "claim verified"
        );
        Ok(envelope)
    }
}
