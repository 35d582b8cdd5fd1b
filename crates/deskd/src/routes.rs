//! API routes for deskd.

use crate::order_id;
use crate::server::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use desk_common::{
    AnalyzeRequest, DeskError, ErrorResponse, HealthResponse, OrderInfo, TicketResponse,
    MIN_TICKET_TEXT_CHARS,
};
use std::sync::Arc;
use tracing::info;

type AppStateArc = Arc<AppState>;

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

// ============================================================================
// Order Routes
// ============================================================================

pub fn order_routes() -> Router<AppStateArc> {
    Router::new().route("/orders/:order_id", get(get_order))
}

/// The path value is used verbatim; lookups never normalize, so
/// "ord-1001" and "ORD-1001" are different keys.
async fn get_order(
    State(state): State<AppStateArc>,
    Path(order_id): Path<String>,
) -> Json<OrderInfo> {
    Json(state.orders.lookup(&order_id))
}

// ============================================================================
// Analyze Routes
// ============================================================================

pub fn analyze_routes() -> Router<AppStateArc> {
    Router::new().route("/analyze_ticket", post(analyze_ticket))
}

async fn analyze_ticket(
    State(state): State<AppStateArc>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<TicketResponse>, (StatusCode, Json<ErrorResponse>)> {
    // an order_id that is present must be well formed, even if empty
    let order_id = match req.order_id.as_deref() {
        Some(raw) => Some(order_id::normalize_strict(raw).map_err(reject)?),
        None => None,
    };

    let text_chars = req.text.chars().count();
    if text_chars < MIN_TICKET_TEXT_CHARS {
        return Err(reject(DeskError::TextTooShort {
            min: MIN_TICKET_TEXT_CHARS,
            got: text_chars,
        }));
    }

    info!("  Analyzing ticket ({} chars)", text_chars);
    let response = state.pipeline.analyze(order_id.as_deref(), &req.text).await;
    Ok(Json(response))
}

fn reject(err: DeskError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
