//! axum surface for the fact-check pipeline.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use crate::models::{Claim, McpEnvelope};
use crate::pipeline::{FactCheckPipeline, PatternExtractor, TableVerifier};

pub type SharedPipeline = Arc<FactCheckPipeline<PatternExtractor, TableVerifier>>;

#[derive(Debug, Deserialize)]
pub struct FactCheckRequest {
    #[serde(default)]
    pub claim: Option<String>,
}

pub fn router(pipeline: SharedPipeline) -> Router {
    Router::new()
        .route("/fact-check", post(fact_check))
        .route("/health", get(health))
        .with_state(pipeline)
}

async fn fact_check(
    State(pipeline): State<SharedPipeline>,
    Json(request): Json<FactCheckRequest>,
) -> Result<Json<McpEnvelope>, (StatusCode, Json<serde_json::Value>)> {
    let claim = match request.claim {
        Some(c) if !c.trim().is_empty() => c,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": "Missing claim in request" })),
            ));
        }
    };

    let verdict = pipeline.check(&Claim::new(claim));
    info!(kind = ?verdict.kind, confidence = verdict.confidence, claim = %verdict.claim, "fact-check");
    Ok(Json(McpEnvelope::from_verdict(&verdict)))
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
