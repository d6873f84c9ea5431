//! ListClientStatusesHandler - Query handler behind the role dashboards.
//!
//! Returns each visible client with their status, plus a per-status count
//! for the dashboard summary cards.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::Viewer;
use crate::domain::lifecycle::{ClientStatusKey, StatusPresenter};
use crate::ports::{ClientListFilter, ClientRecordReader};

use super::errors::ClientStatusError;
use super::view::{ClientStatusView, StatusCount};

/// Query to list client statuses.
#[derive(Debug, Clone)]
pub struct ListClientStatusesQuery {
    pub viewer: Viewer,
    /// Only return clients in this status. Counts are unaffected.
    pub status: Option<ClientStatusKey>,
}

/// Clients and status counts for a dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientStatusList {
    pub items: Vec<ClientStatusView>,
    /// One entry per status key, in pipeline order.
    pub counts: Vec<StatusCount>,
    pub total: usize,
}

pub type ListClientStatusesResult = ClientStatusList;

pub struct ListClientStatusesHandler {
    reader: Arc<dyn ClientRecordReader>,
    presenter: Arc<dyn StatusPresenter>,
}

impl ListClientStatusesHandler {
    pub fn new(reader: Arc<dyn ClientRecordReader>, presenter: Arc<dyn StatusPresenter>) -> Self {
        Self { reader, presenter }
    }

    pub async fn handle(
        &self,
        query: ListClientStatusesQuery,
    ) -> Result<ListClientStatusesResult, ClientStatusError> {
        let role = query.viewer.role;
        if !role.can_list_clients() {
            return Err(ClientStatusError::Forbidden);
        }
        let filter = if role.sees_all_clients() {
            ClientListFilter::all()
        } else {
            ClientListFilter::assigned_to(query.viewer.user_id.clone())
        };

        let records = self.reader.list_records(&filter).await?;
        let views: Vec<ClientStatusView> = records
            .iter()
            .map(|record| ClientStatusView::from_record(record, self.presenter.as_ref()))
            .collect();

        let mut tally: HashMap<ClientStatusKey, usize> = HashMap::new();
        for view in &views {
            *tally.entry(view.status.status_key).or_default() += 1;
        }
        let counts = ClientStatusKey::ALL
            .into_iter()
            .map(|key| StatusCount {
                status_key: key,
                label: self.presenter.present(key).label,
                count: tally.get(&key).copied().unwrap_or(0),
            })
            .collect();

        let total = views.len();
        let items = match query.status {
            Some(wanted) => views
                .into_iter()
                .filter(|view| view.status.status_key == wanted)
                .collect(),
            None => views,
        };

        Ok(ClientStatusList {
            items,
            counts,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::{
        ClientRecord, OnboardingTask, OnboardingTaskType, PaymentRecord, PaymentStatus,
    };
    use crate::domain::foundation::{ClientId, DomainError, Role, UserId};
    use crate::domain::lifecycle::StatusTable;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockClientReader {
        records: Vec<ClientRecord>,
        last_filter: Mutex<Option<ClientListFilter>>,
    }

    impl MockClientReader {
        fn new(records: Vec<ClientRecord>) -> Self {
            Self {
                records,
                last_filter: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl ClientRecordReader for MockClientReader {
        async fn get_record(
            &self,
            _client_id: &ClientId,
        ) -> Result<Option<ClientRecord>, DomainError> {
            unimplemented!()
        }

        async fn list_records(
            &self,
            filter: &ClientListFilter,
        ) -> Result<Vec<ClientRecord>, DomainError> {
            *self.last_filter.lock().unwrap() = Some(filter.clone());
            Ok(self
                .records
                .iter()
                .filter(|record| filter.matches(record))
                .cloned()
                .collect())
        }
    }

    fn strategist_id() -> UserId {
        UserId::new("strategist-1").unwrap()
    }

    fn fixtures() -> Vec<ClientRecord> {
        let new_client = ClientRecord::new(ClientId::new(), "Avery").with_strategist(strategist_id());
        let signed = ClientRecord::new(ClientId::new(), "Blake")
            .with_strategist(strategist_id())
            .with_task(OnboardingTask::completed(OnboardingTaskType::SignAgreement));
        let paid = ClientRecord::new(ClientId::new(), "Casey")
            .with_strategist(UserId::new("strategist-2").unwrap())
            .with_task(OnboardingTask::completed(OnboardingTaskType::SignAgreement))
            .with_onboarding_payment(PaymentRecord::new(PaymentStatus::Completed));
        let also_new = ClientRecord::new(ClientId::new(), "Drew");
        vec![new_client, signed, paid, also_new]
    }

    fn handler(reader: Arc<MockClientReader>) -> ListClientStatusesHandler {
        ListClientStatusesHandler::new(reader, Arc::new(StatusTable::default()))
    }

    fn count_for(list: &ClientStatusList, key: ClientStatusKey) -> usize {
        list.counts
            .iter()
            .find(|c| c.status_key == key)
            .map(|c| c.count)
            .unwrap()
    }

    #[tokio::test]
    async fn compliance_sees_every_client_with_counts() {
        let reader = Arc::new(MockClientReader::new(fixtures()));
        let list = handler(reader.clone())
            .handle(ListClientStatusesQuery {
                viewer: Viewer::new(UserId::new("cmp-1").unwrap(), Role::Compliance),
                status: None,
            })
            .await
            .unwrap();

        assert_eq!(list.total, 4);
        assert_eq!(list.items.len(), 4);
        assert_eq!(list.counts.len(), ClientStatusKey::ALL.len());
        assert_eq!(count_for(&list, ClientStatusKey::AwaitingAgreement), 2);
        assert_eq!(count_for(&list, ClientStatusKey::AwaitingPayment), 1);
        assert_eq!(count_for(&list, ClientStatusKey::AwaitingDocuments), 1);
        assert_eq!(count_for(&list, ClientStatusKey::Active), 0);
        assert_eq!(reader.last_filter.lock().unwrap().clone(), Some(ClientListFilter::all()));
    }

    #[tokio::test]
    async fn strategist_sees_only_assigned_clients() {
        let reader = Arc::new(MockClientReader::new(fixtures()));
        let list = handler(reader.clone())
            .handle(ListClientStatusesQuery {
                viewer: Viewer::new(strategist_id(), Role::Strategist),
                status: None,
            })
            .await
            .unwrap();

        assert_eq!(list.total, 2);
        let names: Vec<&str> = list.items.iter().map(|v| v.display_name.as_str()).collect();
        assert_eq!(names, vec!["Avery", "Blake"]);
        assert_eq!(
            reader.last_filter.lock().unwrap().clone(),
            Some(ClientListFilter::assigned_to(strategist_id()))
        );
    }

    #[tokio::test]
    async fn status_filter_narrows_items_but_not_counts() {
        let reader = Arc::new(MockClientReader::new(fixtures()));
        let list = handler(reader)
            .handle(ListClientStatusesQuery {
                viewer: Viewer::new(UserId::new("admin-1").unwrap(), Role::Admin),
                status: Some(ClientStatusKey::AwaitingAgreement),
            })
            .await
            .unwrap();

        assert_eq!(list.items.len(), 2);
        assert!(list
            .items
            .iter()
            .all(|v| v.status.status_key == ClientStatusKey::AwaitingAgreement));
        assert_eq!(list.total, 4);
        assert_eq!(count_for(&list, ClientStatusKey::AwaitingPayment), 1);
    }

    #[tokio::test]
    async fn listed_clients_match_single_record_visibility() {
        for viewer in [
            Viewer::new(UserId::new("admin-1").unwrap(), Role::Admin),
            Viewer::new(UserId::new("cmp-1").unwrap(), Role::Compliance),
            Viewer::new(strategist_id(), Role::Strategist),
        ] {
            let reader = Arc::new(MockClientReader::new(fixtures()));
            let list = handler(reader)
                .handle(ListClientStatusesQuery {
                    viewer: viewer.clone(),
                    status: None,
                })
                .await
                .unwrap();

            let listed: Vec<String> = list.items.into_iter().map(|v| v.display_name).collect();
            let visible: Vec<String> = fixtures()
                .into_iter()
                .filter(|record| record.is_visible_to(&viewer))
                .map(|record| record.display_name)
                .collect();
            assert_eq!(listed, visible, "role {}", viewer.role);
        }
    }

    #[tokio::test]
    async fn clients_cannot_list() {
        let reader = Arc::new(MockClientReader::new(fixtures()));
        let result = handler(reader.clone())
            .handle(ListClientStatusesQuery {
                viewer: Viewer::new(UserId::new("client-1").unwrap(), Role::Client),
                status: None,
            })
            .await;

        assert!(matches!(result, Err(ClientStatusError::Forbidden)));
        assert!(reader.last_filter.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn counts_carry_presentation_labels() {
        let reader = Arc::new(MockClientReader::new(vec![]));
        let list = handler(reader)
            .handle(ListClientStatusesQuery {
                viewer: Viewer::new(UserId::new("admin-1").unwrap(), Role::Admin),
                status: None,
            })
            .await
            .unwrap();

        assert_eq!(list.total, 0);
        assert_eq!(list.counts[0].label, "Awaiting Agreement");
        assert_eq!(list.counts[5].label, "Active");
    }
}
