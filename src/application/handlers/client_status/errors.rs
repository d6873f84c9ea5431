//! Errors for client status queries.

use thiserror::Error;

use crate::domain::foundation::{ClientId, DomainError};
use crate::domain::lifecycle::UnknownStatusKey;

#[derive(Debug, Error)]
pub enum ClientStatusError {
    #[error("Client not found: {0}")]
    ClientNotFound(ClientId),

    #[error("Not allowed to view this client")]
    Forbidden,

    #[error(transparent)]
    UnknownStatusKey(#[from] UnknownStatusKey),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl From<DomainError> for ClientStatusError {
    fn from(err: DomainError) -> Self {
        ClientStatusError::Infrastructure(err.to_string())
    }
}
