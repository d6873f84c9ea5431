//! Read models returned by the client status queries.

use serde::Serialize;

use crate::domain::client::ClientRecord;
use crate::domain::foundation::ClientId;
use crate::domain::lifecycle::{
    compute_status_with, ClientStatus, ClientStatusConfig, ClientStatusKey, StatusPresenter,
    TimelineStep,
};

/// A client with their computed lifecycle status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientStatusView {
    pub client_id: ClientId,
    pub display_name: String,
    #[serde(flatten)]
    pub status: ClientStatus,
    pub steps: Vec<TimelineStep>,
}

impl ClientStatusView {
    pub fn from_record(record: &ClientRecord, presenter: &dyn StatusPresenter) -> Self {
        let status = compute_status_with(record, presenter);
        Self {
            client_id: record.client_id,
            display_name: record.display_name.clone(),
            steps: status.steps().to_vec(),
            status,
        }
    }
}

/// Number of clients in one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status_key: ClientStatusKey,
    pub label: &'static str,
    pub count: usize,
}

/// A status key with its presentation entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCatalogEntry {
    pub status_key: ClientStatusKey,
    #[serde(flatten)]
    pub config: &'static ClientStatusConfig,
}
