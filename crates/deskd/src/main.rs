//! Desk Daemon - customer support ticket triage service.
//!
//! Classifies tickets, drafts replies, and serves the HTTP API.

use anyhow::Result;
use deskd::config::DeskConfig;
use deskd::llm::Generate;
use deskd::ollama::OllamaClient;
use deskd::orders::OrderDirectory;
use deskd::pipeline::Pipeline;
use deskd::server::{self, AppState};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Desk Daemon v{} starting", env!("CARGO_PKG_VERSION"));

    let config = DeskConfig::load();

    let orders = match config.orders.seed_path.as_deref() {
        Some(path) if !path.is_empty() => OrderDirectory::from_path(Path::new(path))?,
        _ => OrderDirectory::builtin(),
    };
    info!("Order directory ready: {} records", orders.len());

    let llm: Option<Arc<dyn Generate>> = if config.llm.enabled {
        let client = OllamaClient::new(
            &config.llm.base_url,
            &config.llm.model,
            config.llm.timeout_secs,
        )?;
        if !client.is_running().await {
            warn!(
                "Ollama not reachable at {}; summaries and fallback labels will degrade to deterministic text",
                config.llm.base_url
            );
        } else if !client.has_model().await {
            warn!(
                "Model {} not found on Ollama; pull it or set LLM_MODEL",
                client.model()
            );
        }
        Some(Arc::new(client))
    } else {
        warn!("LLM disabled by config, running deterministic-only");
        None
    };

    let pipeline = Pipeline::new(orders.clone(), llm);
    let state = AppState::new(pipeline, orders);

    info!("Desk Daemon ready");
    server::run(&config.server.bind_addr, state).await
}
