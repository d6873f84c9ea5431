//! Webhook error types for e-signature provider callbacks.
//!
//! Defines all error conditions that can occur during webhook processing,
//! with HTTP status code mapping and retryability semantics.

use http::StatusCode;
use thiserror::Error;

use crate::domain::foundation::{DocumentId, DomainError};

/// Errors that occur during webhook processing.
#[derive(Debug, Error)]
pub enum SignatureWebhookError {
    /// Webhook signature verification failed.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Webhook timestamp is outside the acceptable window (5 minutes).
    #[error("Timestamp out of range")]
    TimestampOutOfRange,

    /// Event timestamp is in the future beyond clock skew tolerance.
    #[error("Invalid timestamp")]
    InvalidTimestamp,

    /// Failed to parse webhook payload or signature header.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The provider reported a document this service has no record of.
    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    /// Event was intentionally ignored (not an error condition).
    #[error("Event ignored: {0}")]
    Ignored(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(String),
}

impl SignatureWebhookError {
    /// Returns true if the provider should retry delivering this webhook.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SignatureWebhookError::Database(_)
                // The document row may not be committed yet.
                | SignatureWebhookError::DocumentNotFound(_)
        )
    }

    /// Maps the error to an appropriate HTTP status code.
    ///
    /// - 2xx: Event acknowledged, no retry
    /// - 4xx: Client error, no retry
    /// - 5xx: Server error, will retry
    pub fn status_code(&self) -> StatusCode {
        match self {
            SignatureWebhookError::InvalidSignature
            | SignatureWebhookError::TimestampOutOfRange => StatusCode::UNAUTHORIZED,

            SignatureWebhookError::InvalidTimestamp | SignatureWebhookError::ParseError(_) => {
                StatusCode::BAD_REQUEST
            }

            SignatureWebhookError::Ignored(_) => StatusCode::OK,

            SignatureWebhookError::DocumentNotFound(_) | SignatureWebhookError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<DomainError> for SignatureWebhookError {
    fn from(err: DomainError) -> Self {
        SignatureWebhookError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn invalid_signature_displays_correctly() {
        let err = SignatureWebhookError::InvalidSignature;
        assert_eq!(format!("{}", err), "Invalid signature");
    }

    #[test]
    fn parse_error_displays_message() {
        let err = SignatureWebhookError::ParseError("invalid JSON".to_string());
        assert_eq!(format!("{}", err), "Parse error: invalid JSON");
    }

    #[test]
    fn document_not_found_displays_id() {
        let err = SignatureWebhookError::DocumentNotFound(DocumentId::new("doc-9").unwrap());
        assert_eq!(format!("{}", err), "Document not found: doc-9");
    }

    #[test]
    fn only_storage_and_missing_document_are_retryable() {
        assert!(SignatureWebhookError::Database("down".into()).is_retryable());
        assert!(
            SignatureWebhookError::DocumentNotFound(DocumentId::new("d").unwrap()).is_retryable()
        );
        assert!(!SignatureWebhookError::InvalidSignature.is_retryable());
        assert!(!SignatureWebhookError::ParseError("x".into()).is_retryable());
        assert!(!SignatureWebhookError::Ignored("x".into()).is_retryable());
    }

    #[test]
    fn status_codes_follow_retry_semantics() {
        assert_eq!(
            SignatureWebhookError::InvalidSignature.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            SignatureWebhookError::TimestampOutOfRange.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            SignatureWebhookError::InvalidTimestamp.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SignatureWebhookError::Ignored("draft".into()).status_code(),
            StatusCode::OK
        );
        assert_eq!(
            SignatureWebhookError::Database("down".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn domain_errors_become_database_errors() {
        let err: SignatureWebhookError =
            DomainError::new(ErrorCode::DatabaseError, "connection reset").into();
        assert!(matches!(err, SignatureWebhookError::Database(_)));
    }
}
