use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use factcheck_client::{ChatSession, FactCheckClient, OllamaClient};
use tracing_subscriber::EnvFilter;

const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant that provides accurate information.\n\
When discussing facts about countries and capitals, you should be precise and correct.\n\
If you're not sure about a fact, acknowledge your uncertainty.";

/// Interactive chat with fact-checking context injection.
#[derive(Parser, Debug)]
#[command(
    name = "factcheck-client",
    version,
    about = "Chat with an Ollama model, with capital claims verified against the fact-check service"
)]
struct Args {
    /// Ollama model to use
    #[arg(long, env = "OLLAMA_MODEL", default_value = "llama3")]
    model: String,

    /// Temperature for LLM generation
    #[arg(long, default_value_t = 0.7)]
    temperature: f32,

    /// System prompt for the LLM
    #[arg(long)]
    system: Option<String>,

    /// Base URL of the fact-check service
    #[arg(long, env = "FACTCHECK_URL", default_value = "http://127.0.0.1:5000")]
    service_url: String,

    /// Base URL of the Ollama API
    #[arg(long, env = "OLLAMA_URL", default_value = "http://127.0.0.1:11434")]
    ollama_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let system_prompt = args
        .system
        .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());

    let backend = OllamaClient::new(args.ollama_url, args.model.clone(), args.temperature);
    let checker = FactCheckClient::new(args.service_url);
    let mut session = ChatSession::new(backend, checker, system_prompt);

    println!("Fact-Checking MCP Client with Ollama");
    println!("Using model: {}", args.model);
    println!("Type 'exit' or 'quit' to end the conversation");
    println!("---------------------------------------------");

    let stdin = io::stdin();
    loop {
        print!("\nYou: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        let started = std::time::Instant::now();
        let outcome = match session.turn(input).await {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        };

        if !outcome.fact_checks.is_empty() {
            println!("\n[MCP] Factual claims detected and verified");
            for check in &outcome.fact_checks {
                println!("Claim: {}", check.context.claim);
                println!("Fact check: {}", check.context.correct_answer);
                println!("Confidence: {}", check.context.confidence);
            }
        }

        println!("\nAssistant: {}", outcome.response);
        println!(
            "\n[Response time: {:.2}s, LLM processing: {:.2}s]",
            started.elapsed().as_secs_f64(),
            outcome.duration_secs
        );
    }

    Ok(())
}
