//! HTTP routes for client status endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    get_client_status, get_status_catalog, get_status_presentation, list_client_statuses,
    ClientStatusAppState,
};

/// Creates the client status router with all routes.
pub fn client_status_routes(state: ClientStatusAppState) -> Router {
    Router::new()
        .route("/api/clients/status", get(list_client_statuses))
        .route("/api/clients/:client_id/status", get(get_client_status))
        .route("/api/client-statuses", get(get_status_catalog))
        .route("/api/client-statuses/:status_key", get(get_status_presentation))
        .with_state(state)
}
