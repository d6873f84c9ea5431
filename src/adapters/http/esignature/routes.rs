//! HTTP routes for e-signature webhooks.

use axum::routing::post;
use axum::Router;

use super::handlers::{handle_signature_webhook, SignatureWebhookAppState};

pub fn esignature_routes(state: SignatureWebhookAppState) -> Router {
    Router::new()
        .route("/api/webhooks/esignature", post(handle_signature_webhook))
        .with_state(state)
}
