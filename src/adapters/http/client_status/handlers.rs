//! HTTP handlers for client status endpoints.
//!
//! These handlers connect Axum routes to the client status query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::application::handlers::{
    ClientStatusError, ClientStatusList, ClientStatusView, GetClientStatusHandler,
    GetClientStatusQuery, GetStatusCatalogHandler, GetStatusCatalogQuery,
    GetStatusPresentationHandler, GetStatusPresentationQuery, ListClientStatusesHandler,
    ListClientStatusesQuery, StatusCatalogEntry, StatusPresentation,
};
use crate::domain::foundation::ClientId;
use crate::domain::lifecycle::{ClientStatusKey, StatusPresenter};
use crate::ports::ClientRecordReader;

use super::super::auth::AuthenticatedViewer;
use super::super::dto::ErrorResponse;

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Client status API error that implements IntoResponse.
#[derive(Debug)]
pub enum ClientStatusApiError {
    BadRequest(String),
    /// `?status=` named no known status.
    InvalidStatusFilter(String),
    NotFound(String),
    Forbidden(String),
    UnknownStatusKey(String),
    Internal(String),
}

impl IntoResponse for ClientStatusApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ClientStatusApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ClientStatusApiError::InvalidStatusFilter(raw) => {
                let allowed: Vec<&str> = ClientStatusKey::ALL.iter().map(|k| k.as_str()).collect();
                let error = ErrorResponse::bad_request(format!("Unknown status filter: {}", raw))
                    .with_details(serde_json::json!({ "allowed": allowed }));
                (StatusCode::BAD_REQUEST, error)
            }
            ClientStatusApiError::NotFound(id) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found("Client", &id))
            }
            ClientStatusApiError::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, ErrorResponse::forbidden(msg))
            }
            ClientStatusApiError::UnknownStatusKey(key) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("UNKNOWN_STATUS_KEY", format!("Unknown status key: {}", key)),
            ),
            ClientStatusApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl ClientStatusApiError {
    fn from_query_error(error: ClientStatusError, verbose: bool) -> Self {
        match error {
            ClientStatusError::ClientNotFound(id) => ClientStatusApiError::NotFound(id.to_string()),
            ClientStatusError::Forbidden => {
                ClientStatusApiError::Forbidden("You do not have access to this client".to_string())
            }
            ClientStatusError::UnknownStatusKey(err) => {
                ClientStatusApiError::UnknownStatusKey(err.0)
            }
            ClientStatusError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "Client status query failed");
                if verbose {
                    ClientStatusApiError::Internal(msg)
                } else {
                    ClientStatusApiError::Internal("Internal server error".to_string())
                }
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the client status endpoints.
#[derive(Clone)]
pub struct ClientStatusAppState {
    pub client_reader: Arc<dyn ClientRecordReader>,
    pub presenter: Arc<dyn StatusPresenter>,
    /// Include infrastructure error messages in 500 responses.
    pub verbose_errors: bool,
}

impl ClientStatusAppState {
    pub fn new(
        client_reader: Arc<dyn ClientRecordReader>,
        presenter: Arc<dyn StatusPresenter>,
    ) -> Self {
        Self {
            client_reader,
            presenter,
            verbose_errors: false,
        }
    }

    pub fn with_verbose_errors(mut self, verbose_errors: bool) -> Self {
        self.verbose_errors = verbose_errors;
        self
    }

    pub fn get_client_status_handler(&self) -> GetClientStatusHandler {
        GetClientStatusHandler::new(self.client_reader.clone(), self.presenter.clone())
    }

    pub fn list_client_statuses_handler(&self) -> ListClientStatusesHandler {
        ListClientStatusesHandler::new(self.client_reader.clone(), self.presenter.clone())
    }

    pub fn status_catalog_handler(&self) -> GetStatusCatalogHandler {
        GetStatusCatalogHandler::new(self.presenter.clone())
    }

    pub fn status_presentation_handler(&self) -> GetStatusPresentationHandler {
        GetStatusPresentationHandler::new(self.presenter.clone())
    }

    fn api_error(&self, error: ClientStatusError) -> ClientStatusApiError {
        ClientStatusApiError::from_query_error(error, self.verbose_errors)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Parameters
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters for the client status list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListClientStatusesParams {
    /// Optional status key to narrow the list to.
    pub status: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/clients/:client_id/status
pub async fn get_client_status(
    State(state): State<ClientStatusAppState>,
    Path(client_id_str): Path<String>,
    AuthenticatedViewer(viewer): AuthenticatedViewer,
) -> Result<Json<ClientStatusView>, ClientStatusApiError> {
    let client_id: ClientId = client_id_str
        .parse()
        .map_err(|_| ClientStatusApiError::BadRequest("Invalid client ID format".to_string()))?;

    let query = GetClientStatusQuery { client_id, viewer };
    let view = state
        .get_client_status_handler()
        .handle(query)
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(view))
}

/// GET /api/clients/status?status=<key>
///
/// Dashboard listing for admins, compliance and strategists.
pub async fn list_client_statuses(
    State(state): State<ClientStatusAppState>,
    Query(params): Query<ListClientStatusesParams>,
    AuthenticatedViewer(viewer): AuthenticatedViewer,
) -> Result<Json<ClientStatusList>, ClientStatusApiError> {
    let status = params
        .status
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.trim().parse::<ClientStatusKey>())
        .transpose()
        .map_err(|e| ClientStatusApiError::InvalidStatusFilter(e.0))?;

    let query = ListClientStatusesQuery { viewer, status };
    let list = state
        .list_client_statuses_handler()
        .handle(query)
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(list))
}

/// GET /api/client-statuses
pub async fn get_status_catalog(
    State(state): State<ClientStatusAppState>,
) -> Json<Vec<StatusCatalogEntry>> {
    Json(state.status_catalog_handler().handle(GetStatusCatalogQuery))
}

/// GET /api/client-statuses/:status_key
pub async fn get_status_presentation(
    State(state): State<ClientStatusAppState>,
    Path(status_key): Path<String>,
) -> Result<Json<StatusPresentation>, ClientStatusApiError> {
    let presentation = state
        .status_presentation_handler()
        .handle(GetStatusPresentationQuery { status_key })
        .map_err(|e| state.api_error(e))?;

    Ok(Json(presentation))
}
