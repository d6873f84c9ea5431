//! HandleSignatureWebhookHandler - Command handler for e-signature provider callbacks.
//!
//! Verifies the delivery, maps the provider status onto ours and stores it
//! on the document. The next status read picks the change up; nothing is
//! cached in between.

use std::sync::Arc;

use crate::domain::client::SignatureStatus;
use crate::domain::esignature::{SignatureWebhookError, SignatureWebhookVerifier};
use crate::domain::foundation::DocumentId;
use crate::ports::{SignatureStatusWriter, UpdateResult};

/// Command to handle an e-signature webhook.
#[derive(Debug, Clone)]
pub struct HandleSignatureWebhookCommand {
    /// Raw webhook payload.
    pub payload: Vec<u8>,
    /// Webhook signature header.
    pub signature: String,
}

/// Result of a processed webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleSignatureWebhookResult {
    pub event_id: String,
    pub document_id: DocumentId,
    pub status: SignatureStatus,
}

pub struct HandleSignatureWebhookHandler {
    verifier: Arc<SignatureWebhookVerifier>,
    writer: Arc<dyn SignatureStatusWriter>,
}

impl HandleSignatureWebhookHandler {
    pub fn new(verifier: Arc<SignatureWebhookVerifier>, writer: Arc<dyn SignatureStatusWriter>) -> Self {
        Self { verifier, writer }
    }

    /// # Errors
    ///
    /// `Ignored` is returned for provider statuses that carry no signature
    /// progress. Callers acknowledge it like a success.
    pub async fn handle(
        &self,
        cmd: HandleSignatureWebhookCommand,
    ) -> Result<HandleSignatureWebhookResult, SignatureWebhookError> {
        let event = self.verifier.verify_and_parse(&cmd.payload, &cmd.signature)?;

        let Some(status) = event.signature_status() else {
            tracing::warn!(
                event_id = %event.id,
                provider_status = %event.status,
                "Ignoring e-signature event with unmapped status"
            );
            return Err(SignatureWebhookError::Ignored(event.status));
        };

        let document_id = DocumentId::new(event.document_id.as_str())
            .map_err(|e| SignatureWebhookError::ParseError(e.to_string()))?;

        match self.writer.update_signature_status(&document_id, status).await? {
            UpdateResult::Updated => {
                tracing::info!(
                    event_id = %event.id,
                    document_id = %document_id,
                    status = status.as_str(),
                    "Signature status updated"
                );
                Ok(HandleSignatureWebhookResult {
                    event_id: event.id,
                    document_id,
                    status,
                })
            }
            UpdateResult::AlreadySigned => {
                tracing::info!(
                    event_id = %event.id,
                    document_id = %document_id,
                    status = status.as_str(),
                    "Document already signed, keeping signed status"
                );
                Ok(HandleSignatureWebhookResult {
                    event_id: event.id,
                    document_id,
                    status: SignatureStatus::Signed,
                })
            }
            UpdateResult::NotFound => {
                tracing::warn!(
                    event_id = %event.id,
                    document_id = %document_id,
                    "E-signature event for unknown document"
                );
                Err(SignatureWebhookError::DocumentNotFound(document_id))
            }
        }
    }
}
