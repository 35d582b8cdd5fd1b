//! HTTP server for deskd.

use crate::orders::OrderDirectory;
use crate::pipeline::Pipeline;
use crate::routes;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub pipeline: Pipeline,
    pub orders: OrderDirectory,
}

impl AppState {
    pub fn new(pipeline: Pipeline, orders: OrderDirectory) -> Self {
        Self { pipeline, orders }
    }
}

/// Build the full router. Split out from `run` so tests can drive the
/// service without binding a socket.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::order_routes())
        .merge(routes::analyze_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // browser UIs post from any origin
        .layer(CorsLayer::permissive())
}

/// Run the HTTP server
pub async fn run(bind_addr: &str, state: AppState) -> Result<()> {
    let app = build_router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("  Listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
