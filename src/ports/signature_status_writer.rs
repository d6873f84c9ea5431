//! Signature status writer port.
//!
//! Persists the signature status the e-signature provider reports for a
//! document.

use async_trait::async_trait;

use crate::domain::client::SignatureStatus;
use crate::domain::foundation::{DocumentId, DomainError};

/// Outcome of a signature status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateResult {
    /// The document existed and now carries the new status.
    Updated,
    /// The document is already signed and the new status was not stored.
    AlreadySigned,
    /// No document with that id is stored.
    NotFound,
}

#[async_trait]
pub trait SignatureStatusWriter: Send + Sync {
    async fn update_signature_status(
        &self,
        document_id: &DocumentId,
        status: SignatureStatus,
    ) -> Result<UpdateResult, DomainError>;
}
