//! Client record reader port (read side).
//!
//! Supplies the `ClientRecord`s the lifecycle engine runs on. Records are
//! assembled fresh on every call; nothing upstream caches computed status.

use async_trait::async_trait;

use crate::domain::client::ClientRecord;
use crate::domain::foundation::{ClientId, DomainError, UserId};

/// Narrows which clients a list query returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientListFilter {
    /// Only clients assigned to this strategist.
    pub strategist_id: Option<UserId>,
}

impl ClientListFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn assigned_to(strategist_id: UserId) -> Self {
        Self {
            strategist_id: Some(strategist_id),
        }
    }

    pub fn matches(&self, record: &ClientRecord) -> bool {
        match &self.strategist_id {
            Some(strategist) => record.is_assigned_to(strategist),
            None => true,
        }
    }
}

/// Reader port for client records.
#[async_trait]
pub trait ClientRecordReader: Send + Sync {
    /// Loads one client's record. `None` if the client does not exist.
    async fn get_record(&self, client_id: &ClientId) -> Result<Option<ClientRecord>, DomainError>;

    /// Loads every client matching `filter`, ordered by display name.
    async fn list_records(&self, filter: &ClientListFilter)
        -> Result<Vec<ClientRecord>, DomainError>;
}
