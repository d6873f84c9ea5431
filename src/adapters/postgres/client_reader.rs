//! PostgreSQL implementation of ClientRecordReader.
//!
//! Loads the client row and its tasks, documents and payments, then hands
//! them to the client-data normalizer. Nothing is cached between calls.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::adapters::client_data::{
    normalize_client, RawClientData, RawDocument, RawOnboardingTask, RawPayment,
};
use crate::domain::client::ClientRecord;
use crate::domain::foundation::{ClientId, DomainError, ErrorCode};
use crate::ports::{ClientListFilter, ClientRecordReader};

pub struct PostgresClientReader {
    pool: PgPool,
}

impl PostgresClientReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ClientRow {
    id: Uuid,
    display_name: String,
    user_id: Option<String>,
    strategist_id: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
    client_id: Uuid,
    task_type: String,
    status: String,
    agreement_document_id: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct DocumentRow {
    client_id: Uuid,
    id: String,
    category: String,
    original_name: String,
    signature_status: String,
    role: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct PaymentRow {
    client_id: Uuid,
    status: String,
    payment_link_url: Option<String>,
    purpose: Option<String>,
}

impl From<TaskRow> for RawOnboardingTask {
    fn from(row: TaskRow) -> Self {
        RawOnboardingTask {
            task_type: row.task_type,
            status: row.status,
            agreement_document_id: row.agreement_document_id,
        }
    }
}

impl From<DocumentRow> for RawDocument {
    fn from(row: DocumentRow) -> Self {
        RawDocument {
            id: row.id,
            category: row.category,
            original_name: row.original_name,
            signature_status: row.signature_status,
            role: row.role,
        }
    }
}

impl From<PaymentRow> for RawPayment {
    fn from(row: PaymentRow) -> Self {
        RawPayment {
            status: row.status,
            payment_link_url: row.payment_link_url,
            purpose: row.purpose,
        }
    }
}

fn db_error(what: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Failed to {}: {}", what, e))
}

/// Child rows for a batch of clients, grouped by client.
#[derive(Default)]
struct ChildRows {
    tasks: HashMap<Uuid, Vec<RawOnboardingTask>>,
    documents: HashMap<Uuid, Vec<RawDocument>>,
    payments: HashMap<Uuid, Vec<RawPayment>>,
}

impl ChildRows {
    fn assemble(&mut self, client: ClientRow) -> Result<ClientRecord, DomainError> {
        normalize_client(RawClientData {
            client_id: client.id.to_string(),
            display_name: client.display_name,
            user_id: client.user_id,
            strategist_id: client.strategist_id,
            onboarding_tasks: self.tasks.remove(&client.id).unwrap_or_default(),
            documents: self.documents.remove(&client.id).unwrap_or_default(),
            payments: self.payments.remove(&client.id).unwrap_or_default(),
        })
    }
}

impl PostgresClientReader {
    async fn load_children(&self, client_ids: &[Uuid]) -> Result<ChildRows, DomainError> {
        let mut children = ChildRows::default();
        if client_ids.is_empty() {
            return Ok(children);
        }

        let tasks: Vec<TaskRow> = sqlx::query_as(
            r#"
            SELECT client_id, task_type, status, agreement_document_id
            FROM onboarding_tasks
            WHERE client_id = ANY($1)
            ORDER BY created_at, id
            "#,
        )
        .bind(client_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("load onboarding tasks", e))?;

        let documents: Vec<DocumentRow> = sqlx::query_as(
            r#"
            SELECT client_id, id, category, original_name, signature_status, role
            FROM client_documents
            WHERE client_id = ANY($1)
            ORDER BY uploaded_at, id
            "#,
        )
        .bind(client_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("load client documents", e))?;

        // Creation order matters: untagged rows fall back to the first payment.
        let payments: Vec<PaymentRow> = sqlx::query_as(
            r#"
            SELECT client_id, status, payment_link_url, purpose
            FROM client_payments
            WHERE client_id = ANY($1)
            ORDER BY created_at, id
            "#,
        )
        .bind(client_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("load client payments", e))?;

        for row in tasks {
            children.tasks.entry(row.client_id).or_default().push(row.into());
        }
        for row in documents {
            children
                .documents
                .entry(row.client_id)
                .or_default()
                .push(row.into());
        }
        for row in payments {
            children
                .payments
                .entry(row.client_id)
                .or_default()
                .push(row.into());
        }
        Ok(children)
    }
}

#[async_trait]
impl ClientRecordReader for PostgresClientReader {
    async fn get_record(&self, client_id: &ClientId) -> Result<Option<ClientRecord>, DomainError> {
        let row: Option<ClientRow> = sqlx::query_as(
            r#"
            SELECT id, display_name, user_id, strategist_id
            FROM clients
            WHERE id = $1
            "#,
        )
        .bind(client_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("get client", e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut children = self.load_children(&[row.id]).await?;
        children.assemble(row).map(Some)
    }

    async fn list_records(
        &self,
        filter: &ClientListFilter,
    ) -> Result<Vec<ClientRecord>, DomainError> {
        let rows: Vec<ClientRow> = sqlx::query_as(
            r#"
            SELECT id, display_name, user_id, strategist_id
            FROM clients
            WHERE $1::TEXT IS NULL OR strategist_id = $1
            ORDER BY display_name, id
            "#,
        )
        .bind(filter.strategist_id.as_ref().map(|id| id.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("list clients", e))?;

        let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let mut children = self.load_children(&ids).await?;

        rows.into_iter()
            .map(|row| children.assemble(row))
            .collect()
    }
}
