//! GetClientStatusHandler - Query handler for one client's lifecycle status.
//!
//! Loads the client record, checks the viewer may see it, and runs the
//! lifecycle engine over it.

use std::sync::Arc;

use crate::domain::foundation::{ClientId, Viewer};
use crate::domain::lifecycle::StatusPresenter;
use crate::ports::ClientRecordReader;

use super::errors::ClientStatusError;
use super::view::ClientStatusView;

/// Query to get a client's status.
#[derive(Debug, Clone)]
pub struct GetClientStatusQuery {
    pub client_id: ClientId,
    /// Who is asking, for authorization.
    pub viewer: Viewer,
}

/// Result of a successful status query.
pub type GetClientStatusResult = ClientStatusView;

pub struct GetClientStatusHandler {
    reader: Arc<dyn ClientRecordReader>,
    presenter: Arc<dyn StatusPresenter>,
}

impl GetClientStatusHandler {
    pub fn new(reader: Arc<dyn ClientRecordReader>, presenter: Arc<dyn StatusPresenter>) -> Self {
        Self { reader, presenter }
    }

    pub async fn handle(
        &self,
        query: GetClientStatusQuery,
    ) -> Result<GetClientStatusResult, ClientStatusError> {
        let record = self
            .reader
            .get_record(&query.client_id)
            .await?
            .ok_or(ClientStatusError::ClientNotFound(query.client_id))?;

        if !record.is_visible_to(&query.viewer) {
            return Err(ClientStatusError::Forbidden);
        }

        Ok(ClientStatusView::from_record(&record, self.presenter.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::{ClientRecord, OnboardingTask, OnboardingTaskType};
    use crate::domain::foundation::{DomainError, ErrorCode, Role, UserId};
    use crate::domain::lifecycle::{ClientStatusKey, StatusTable};
    use crate::ports::ClientListFilter;
    use async_trait::async_trait;

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementation
    // ─────────────────────────────────────────────────────────────────────

    struct MockClientReader {
        record: Option<ClientRecord>,
        should_fail: bool,
    }

    impl MockClientReader {
        fn with_record(record: ClientRecord) -> Self {
            Self {
                record: Some(record),
                should_fail: false,
            }
        }

        fn empty() -> Self {
            Self {
                record: None,
                should_fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                record: None,
                should_fail: true,
            }
        }
    }

    #[async_trait]
    impl ClientRecordReader for MockClientReader {
        async fn get_record(
            &self,
            _client_id: &ClientId,
        ) -> Result<Option<ClientRecord>, DomainError> {
            if self.should_fail {
                return Err(DomainError::new(ErrorCode::DatabaseError, "Simulated failure"));
            }
            Ok(self.record.clone())
        }

        async fn list_records(
            &self,
            _filter: &ClientListFilter,
        ) -> Result<Vec<ClientRecord>, DomainError> {
            unimplemented!()
        }
    }

    fn handler(reader: MockClientReader) -> GetClientStatusHandler {
        GetClientStatusHandler::new(Arc::new(reader), Arc::new(StatusTable::default()))
    }

    fn admin() -> Viewer {
        Viewer::new(UserId::new("admin-1").unwrap(), Role::Admin)
    }

    fn client_record() -> ClientRecord {
        ClientRecord::new(ClientId::new(), "Dana Client")
            .with_user(UserId::new("client-1").unwrap())
            .with_strategist(UserId::new("strategist-1").unwrap())
            .with_task(OnboardingTask::completed(OnboardingTaskType::SignAgreement))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn returns_computed_status() {
        let record = client_record();
        let handler = handler(MockClientReader::with_record(record.clone()));

        let view = handler
            .handle(GetClientStatusQuery {
                client_id: record.client_id,
                viewer: admin(),
            })
            .await
            .unwrap();

        assert_eq!(view.client_id, record.client_id);
        assert_eq!(view.display_name, "Dana Client");
        assert_eq!(view.status.status_key, ClientStatusKey::AwaitingPayment);
        assert_eq!(view.steps.len(), 5);
    }

    #[tokio::test]
    async fn missing_client_is_not_found() {
        let handler = handler(MockClientReader::empty());
        let client_id = ClientId::new();

        let result = handler
            .handle(GetClientStatusQuery {
                client_id,
                viewer: admin(),
            })
            .await;

        assert!(matches!(result, Err(ClientStatusError::ClientNotFound(id)) if id == client_id));
    }

    #[tokio::test]
    async fn client_can_view_own_status() {
        let record = client_record();
        let handler = handler(MockClientReader::with_record(record.clone()));

        let result = handler
            .handle(GetClientStatusQuery {
                client_id: record.client_id,
                viewer: Viewer::new(UserId::new("client-1").unwrap(), Role::Client),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn other_client_is_forbidden() {
        let record = client_record();
        let handler = handler(MockClientReader::with_record(record.clone()));

        let result = handler
            .handle(GetClientStatusQuery {
                client_id: record.client_id,
                viewer: Viewer::new(UserId::new("client-2").unwrap(), Role::Client),
            })
            .await;

        assert!(matches!(result, Err(ClientStatusError::Forbidden)));
    }

    #[tokio::test]
    async fn unassigned_strategist_is_forbidden() {
        let record = client_record();
        let handler = handler(MockClientReader::with_record(record.clone()));

        let result = handler
            .handle(GetClientStatusQuery {
                client_id: record.client_id,
                viewer: Viewer::new(UserId::new("strategist-2").unwrap(), Role::Strategist),
            })
            .await;

        assert!(matches!(result, Err(ClientStatusError::Forbidden)));
    }

    #[tokio::test]
    async fn propagates_reader_errors() {
        let handler = handler(MockClientReader::failing());

        let result = handler
            .handle(GetClientStatusQuery {
                client_id: ClientId::new(),
                viewer: admin(),
            })
            .await;

        assert!(matches!(result, Err(ClientStatusError::Infrastructure(_))));
    }
}
