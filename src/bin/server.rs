//! Document Q&A server binary
//!
//! Run with: cargo run --bin pdf-chat-server

use pdf_chat::{config::AppConfig, llm::OllamaClient, server::PdfChatServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf_chat=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!(
        r#"
╔═══════════════════════════════════════════════════════════╗
║                         PDF Chat                          ║
║        Upload a PDF, ask questions, get summaries         ║
╚═══════════════════════════════════════════════════════════╝
"#
    );

    // Load configuration
    let config = AppConfig::from_env()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Chat model: {}", config.llm.model);
    tracing::info!("  - Ollama: {}", config.llm.base_url);
    tracing::info!(
        "  - Max upload: {} MiB",
        config.server.max_upload_size / (1024 * 1024)
    );

    // The upload directory is prepared up front even though documents are
    // processed entirely in memory and never written to it.
    std::fs::create_dir_all(&config.server.upload_dir)?;

    // Check Ollama
    tracing::info!("Checking Ollama at {}...", config.llm.base_url);
    let llm = OllamaClient::new(&config.llm);
    match llm.health_check().await {
        Ok(true) => {
            tracing::info!("Ollama is running");
        }
        _ => {
            tracing::warn!("Ollama not available at {}", config.llm.base_url);
            tracing::warn!("Please start Ollama:");
            tracing::warn!("  1. Start: ollama serve");
            tracing::warn!("  2. Pull the model: ollama pull {}", llm.model());
        }
    }

    // Create and start server
    let server = PdfChatServer::new(config);

    println!("\nServer starting...");
    println!("  UI: http://{}/", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("\nEndpoints:");
    println!("  POST /upload    - Upload a PDF");
    println!("  POST /chat      - Ask a question about it");
    println!("  POST /summarize - Summarize it");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
