//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter; `api_router` merges them.

pub mod auth;
pub mod client_status;
pub mod dto;
pub mod esignature;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

pub use auth::AuthenticatedViewer;
pub use client_status::{client_status_routes, ClientStatusAppState};
pub use dto::ErrorResponse;
pub use esignature::{esignature_routes, SignatureWebhookAppState};

/// Builds the full API router.
pub fn api_router(
    client_status: ClientStatusAppState,
    esignature: SignatureWebhookAppState,
) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(client_status_routes(client_status))
        .merge(esignature_routes(esignature))
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
