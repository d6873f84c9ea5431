//! PostgreSQL implementation of SignatureStatusWriter.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::client::SignatureStatus;
use crate::domain::foundation::{DocumentId, DomainError, ErrorCode};
use crate::ports::{SignatureStatusWriter, UpdateResult};

pub struct PostgresSignatureStatusWriter {
    pool: PgPool,
}

impl PostgresSignatureStatusWriter {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SignatureStatusWriter for PostgresSignatureStatusWriter {
    async fn update_signature_status(
        &self,
        document_id: &DocumentId,
        status: SignatureStatus,
    ) -> Result<UpdateResult, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE client_documents
            SET signature_status = $1, updated_at = now()
            WHERE id = $2
              AND (signature_status <> 'SIGNED' OR $1 = 'SIGNED')
            "#,
        )
        .bind(status.as_str())
        .bind(document_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update signature status: {}", e),
            )
        })?;

        if result.rows_affected() > 0 {
            return Ok(UpdateResult::Updated);
        }

        // Either the document is missing or it is signed and stayed that way.
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM client_documents WHERE id = $1)",
        )
        .bind(document_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to look up document: {}", e),
            )
        })?;

        if exists {
            Ok(UpdateResult::AlreadySigned)
        } else {
            Ok(UpdateResult::NotFound)
        }
    }
}
