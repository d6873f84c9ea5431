//! In-memory client store.
//!
//! Backs both client ports with a map guarded by an async lock. Used by
//! tests and by the server when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::client::{ClientRecord, SignatureStatus};
use crate::domain::foundation::{ClientId, DocumentId, DomainError};
use crate::ports::{ClientListFilter, ClientRecordReader, SignatureStatusWriter, UpdateResult};

#[derive(Default)]
pub struct InMemoryClientStore {
    records: RwLock<HashMap<ClientId, ClientRecord>>,
}

impl InMemoryClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `records`.
    pub fn with_records(records: impl IntoIterator<Item = ClientRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.client_id, record))
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }

    /// Inserts or replaces a record.
    pub async fn insert(&self, record: ClientRecord) {
        self.records.write().await.insert(record.client_id, record);
    }
}

#[async_trait]
impl ClientRecordReader for InMemoryClientStore {
    async fn get_record(&self, client_id: &ClientId) -> Result<Option<ClientRecord>, DomainError> {
        Ok(self.records.read().await.get(client_id).cloned())
    }

    async fn list_records(
        &self,
        filter: &ClientListFilter,
    ) -> Result<Vec<ClientRecord>, DomainError> {
        let mut records: Vec<ClientRecord> = self
            .records
            .read()
            .await
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        records.sort_by(|a, b| {
            a.display_name
                .cmp(&b.display_name)
                .then_with(|| a.client_id.cmp(&b.client_id))
        });
        Ok(records)
    }
}

#[async_trait]
impl SignatureStatusWriter for InMemoryClientStore {
    async fn update_signature_status(
        &self,
        document_id: &DocumentId,
        status: SignatureStatus,
    ) -> Result<UpdateResult, DomainError> {
        let mut records = self.records.write().await;
        let document = records
            .values_mut()
            .flat_map(|record| record.documents.iter_mut())
            .find(|document| &document.id == document_id);

        match document {
            Some(document) if !status.may_replace(document.signature_status) => {
                Ok(UpdateResult::AlreadySigned)
            }
            Some(document) => {
                document.signature_status = status;
                Ok(UpdateResult::Updated)
            }
            None => Ok(UpdateResult::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::{DocumentRecord, OnboardingTask, OnboardingTaskType};
    use crate::domain::foundation::UserId;
    use crate::domain::lifecycle::{compute_status, ClientStatusKey};

    fn agreement_client(name: &str, doc_id: &str) -> ClientRecord {
        let doc_id = DocumentId::new(doc_id).unwrap();
        ClientRecord::new(ClientId::new(), name)
            .with_task(
                OnboardingTask::pending(OnboardingTaskType::SignAgreement)
                    .with_agreement_document(doc_id.clone()),
            )
            .with_document(DocumentRecord::contract(doc_id, "Engagement Agreement.pdf"))
    }

    #[tokio::test]
    async fn get_returns_inserted_record() {
        let store = InMemoryClientStore::new();
        let record = agreement_client("Quinn", "agr-1");
        store.insert(record.clone()).await;

        assert_eq!(store.get_record(&record.client_id).await.unwrap(), Some(record));
        assert_eq!(store.get_record(&ClientId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_is_sorted_by_display_name_and_filtered() {
        let strategist = UserId::new("strategist-1").unwrap();
        let store = InMemoryClientStore::with_records(vec![
            agreement_client("Zed", "agr-1").with_strategist(strategist.clone()),
            agreement_client("Ana", "agr-2"),
            agreement_client("Moe", "agr-3").with_strategist(strategist.clone()),
        ]);

        let all = store.list_records(&ClientListFilter::all()).await.unwrap();
        let names: Vec<&str> = all.iter().map(|r| r.display_name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Moe", "Zed"]);

        let assigned = store
            .list_records(&ClientListFilter::assigned_to(strategist))
            .await
            .unwrap();
        let names: Vec<&str> = assigned.iter().map(|r| r.display_name.as_str()).collect();
        assert_eq!(names, vec!["Moe", "Zed"]);
    }

    #[tokio::test]
    async fn signature_update_is_seen_by_next_read() {
        let record = agreement_client("Quinn", "agr-1");
        let client_id = record.client_id;
        let store = InMemoryClientStore::with_records(vec![record]);

        let before = store.get_record(&client_id).await.unwrap().unwrap();
        assert_eq!(compute_status(&before).status_key, ClientStatusKey::AwaitingAgreement);

        let result = store
            .update_signature_status(&DocumentId::new("agr-1").unwrap(), SignatureStatus::Signed)
            .await
            .unwrap();
        assert_eq!(result, UpdateResult::Updated);

        let after = store.get_record(&client_id).await.unwrap().unwrap();
        assert_eq!(after.documents[0].signature_status, SignatureStatus::Signed);
        assert_eq!(compute_status(&after).status_key, ClientStatusKey::AwaitingPayment);
    }

    #[tokio::test]
    async fn late_delivery_does_not_unsign_a_document() {
        let record = agreement_client("Rowan", "agr-1");
        let client_id = record.client_id;
        let store = InMemoryClientStore::with_records(vec![record]);
        let doc_id = DocumentId::new("agr-1").unwrap();

        store
            .update_signature_status(&doc_id, SignatureStatus::Signed)
            .await
            .unwrap();
        let result = store
            .update_signature_status(&doc_id, SignatureStatus::Sent)
            .await
            .unwrap();
        assert_eq!(result, UpdateResult::AlreadySigned);

        let after = store.get_record(&client_id).await.unwrap().unwrap();
        assert_eq!(after.documents[0].signature_status, SignatureStatus::Signed);
        assert_eq!(compute_status(&after).status_key, ClientStatusKey::AwaitingPayment);
    }

    #[tokio::test]
    async fn unknown_document_is_not_found() {
        let store = InMemoryClientStore::with_records(vec![agreement_client("Quinn", "agr-1")]);

        let result = store
            .update_signature_status(&DocumentId::new("agr-9").unwrap(), SignatureStatus::Signed)
            .await
            .unwrap();
        assert_eq!(result, UpdateResult::NotFound);
    }
}
