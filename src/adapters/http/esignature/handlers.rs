//! HTTP handler for e-signature provider webhooks.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::handlers::{HandleSignatureWebhookCommand, HandleSignatureWebhookHandler};
use crate::domain::esignature::{SignatureWebhookError, SignatureWebhookVerifier};
use crate::ports::SignatureStatusWriter;

use super::super::dto::ErrorResponse;

/// Shared state for the webhook endpoint.
#[derive(Clone)]
pub struct SignatureWebhookAppState {
    pub verifier: Arc<SignatureWebhookVerifier>,
    pub status_writer: Arc<dyn SignatureStatusWriter>,
    /// Header carrying `t=<unix>,v1=<hex>`.
    pub signature_header: String,
}

impl SignatureWebhookAppState {
    pub fn webhook_handler(&self) -> HandleSignatureWebhookHandler {
        HandleSignatureWebhookHandler::new(self.verifier.clone(), self.status_writer.clone())
    }
}

/// Acknowledgement body for accepted deliveries.
#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub received: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub ignored: bool,
}

/// API error type that converts webhook errors to HTTP responses.
#[derive(Debug)]
pub enum SignatureWebhookApiError {
    MissingSignature(String),
    Webhook(SignatureWebhookError),
}

impl From<SignatureWebhookError> for SignatureWebhookApiError {
    fn from(err: SignatureWebhookError) -> Self {
        Self::Webhook(err)
    }
}

impl IntoResponse for SignatureWebhookApiError {
    fn into_response(self) -> axum::response::Response {
        let err = match self {
            SignatureWebhookApiError::MissingSignature(header) => {
                let error = ErrorResponse::new(
                    "MISSING_SIGNATURE",
                    format!("Missing {} header", header),
                );
                return (StatusCode::BAD_REQUEST, Json(error)).into_response();
            }
            SignatureWebhookApiError::Webhook(err) => err,
        };

        if let SignatureWebhookError::Ignored(_) = err {
            let ack = WebhookAck {
                received: true,
                ignored: true,
            };
            return (StatusCode::OK, Json(ack)).into_response();
        }

        let code = match &err {
            SignatureWebhookError::InvalidSignature => "INVALID_SIGNATURE",
            SignatureWebhookError::TimestampOutOfRange => "TIMESTAMP_OUT_OF_RANGE",
            SignatureWebhookError::InvalidTimestamp => "INVALID_TIMESTAMP",
            SignatureWebhookError::ParseError(_) => "PARSE_ERROR",
            SignatureWebhookError::DocumentNotFound(_) => "DOCUMENT_NOT_FOUND",
            SignatureWebhookError::Database(_) => "DATABASE_ERROR",
            SignatureWebhookError::Ignored(_) => "IGNORED",
        };
        if err.is_retryable() {
            tracing::error!(error = %err, "E-signature webhook failed, provider will retry");
        } else {
            tracing::warn!(error = %err, "E-signature webhook rejected");
        }

        let error = ErrorResponse::new(code, err.to_string());
        (err.status_code(), Json(error)).into_response()
    }
}

/// POST /api/webhooks/esignature
pub async fn handle_signature_webhook(
    State(state): State<SignatureWebhookAppState>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> Result<Json<WebhookAck>, SignatureWebhookApiError> {
    let signature = headers
        .get(state.signature_header.as_str())
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| SignatureWebhookApiError::MissingSignature(state.signature_header.clone()))?;

    let cmd = HandleSignatureWebhookCommand {
        payload: body.to_vec(),
        signature: signature.to_string(),
    };
    state.webhook_handler().handle(cmd).await?;

    Ok(Json(WebhookAck {
        received: true,
        ignored: false,
    }))
}
