//! Generic PostgreSQL soft-delete repository driven by a model descriptor.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use hrms_core::error::{AppError, ErrorKind};
use hrms_core::result::AppResult;
use hrms_core::traits::ArchivableRepository;
use hrms_core::types::ModelDescriptor;

/// Archive operations over one table, returning rows as JSON via `to_jsonb`.
///
/// Table and column names come from a `'static` descriptor registered at
/// startup and are never taken from request input.
#[derive(Debug, Clone)]
pub struct PgArchivableRepository {
    pool: PgPool,
    descriptor: ModelDescriptor,
}

impl PgArchivableRepository {
    /// Create a repository for the model described by `descriptor`.
    pub fn new(pool: PgPool, descriptor: ModelDescriptor) -> Self {
        Self { pool, descriptor }
    }

    fn table(&self) -> String {
        quote_ident(self.descriptor.collection)
    }

    fn flag(&self) -> String {
        quote_ident(self.descriptor.flag_field)
    }

    fn error(&self, operation: &str, err: sqlx::Error) -> AppError {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to {operation} for {}", self.descriptor.name),
            err,
        )
    }

    async fn set_flag(&self, id: Uuid, archived: bool) -> Result<Option<Value>, sqlx::Error> {
        // updated_at moves only when the flag actually changes
        let sql = format!(
            "UPDATE {table} AS t SET {flag} = $2, \
             updated_at = CASE WHEN t.{flag} = $2 THEN t.updated_at ELSE NOW() END \
             WHERE t.id = $1 RETURNING to_jsonb(t)",
            table = self.table(),
            flag = self.flag(),
        );
        sqlx::query_scalar::<_, Value>(&sql)
            .bind(id)
            .bind(archived)
            .fetch_optional(&self.pool)
            .await
    }
}

#[async_trait]
impl ArchivableRepository for PgArchivableRepository {
    fn descriptor(&self) -> &ModelDescriptor {
        &self.descriptor
    }

    async fn find_archived(&self) -> AppResult<Vec<Value>> {
        let sql = format!(
            "SELECT to_jsonb(t) FROM {} AS t WHERE t.{} = TRUE ORDER BY t.created_at DESC",
            self.table(),
            self.flag()
        );
        sqlx::query_scalar::<_, Value>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| self.error("find archived records", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Value>> {
        let sql = format!(
            "SELECT to_jsonb(t) FROM {} AS t ORDER BY t.created_at ASC",
            self.table()
        );
        sqlx::query_scalar::<_, Value>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| self.error("export records", e))
    }

    async fn count_by_flag(&self, archived: bool) -> AppResult<u64> {
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE {} = $1",
            self.table(),
            self.flag()
        );
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(archived)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| self.error("count records", e))?;
        Ok(count as u64)
    }

    async fn restore_all(&self) -> AppResult<u64> {
        let sql = format!(
            "UPDATE {table} SET {flag} = FALSE, updated_at = NOW() WHERE {flag} = TRUE",
            table = self.table(),
            flag = self.flag(),
        );
        let result = sqlx::query(&sql)
            .execute(&self.pool)
            .await
            .map_err(|e| self.error("restore records", e))?;
        Ok(result.rows_affected())
    }

    async fn restore_by_id(&self, id: Uuid) -> AppResult<Option<Value>> {
        self.set_flag(id, false)
            .await
            .map_err(|e| self.error("restore record", e))
    }

    async fn archive_by_id(&self, id: Uuid) -> AppResult<Option<Value>> {
        self.set_flag(id, true)
            .await
            .map_err(|e| self.error("archive record", e))
    }
}

/// Quote a SQL identifier, doubling embedded quotes.
fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
