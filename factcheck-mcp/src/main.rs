use std::env;
use std::sync::Arc;

use dotenv::dotenv;
use factcheck_mcp::models::{parse_fact_pairs, CapitalTable};
use factcheck_mcp::pipeline::{FactCheckPipeline, PatternExtractor, TableVerifier};
use factcheck_mcp::server;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut table = CapitalTable::builtin();
    if let Ok(raw) = env::var("FACTCHECK_EXTRA_FACTS") {
        table.merge_pairs(parse_fact_pairs(&raw));
    }
    info!(facts = table.len(), "reference table loaded");

    let pipeline = Arc::new(FactCheckPipeline {
        extractor: PatternExtractor,
        verifier: TableVerifier::new(table),
    });

    let addr = env::var("FACTCHECK_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "fact-check service listening");
    axum::serve(listener, server::router(pipeline)).await?;
    Ok(())
}
