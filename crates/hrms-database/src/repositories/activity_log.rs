//! Activity log repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use hrms_core::error::{AppError, ErrorKind};
use hrms_core::result::AppResult;
use hrms_core::traits::ActivityLogStore;
use hrms_core::types::{NewActivityEntry, PageRequest, PageResponse};
use hrms_entity::audit::{ActivityLogEntry, ActivityLogFilter};

/// Repository for the append-only `activity_logs` table.
///
/// Only inserts and reads are exposed.
#[derive(Debug, Clone)]
pub struct ActivityLogRepository {
    pool: PgPool,
}

impl ActivityLogRepository {
    /// Create a new activity log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an entry by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ActivityLogEntry>> {
        sqlx::query_as::<_, ActivityLogEntry>("SELECT * FROM activity_logs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find activity entry", e)
            })
    }

    /// Search the log, newest first.
    pub async fn search(
        &self,
        filter: &ActivityLogFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ActivityLogEntry>> {
        let mut conditions = Vec::new();
        let mut param_idx = 1u32;

        if filter.actor_id.is_some() {
            conditions.push(format!("actor_id = ${param_idx}"));
            param_idx += 1;
        }
        if filter.action.is_some() {
            conditions.push(format!("action = ${param_idx}"));
            param_idx += 1;
        }
        if filter.module.is_some() {
            conditions.push(format!("module = ${param_idx}"));
            param_idx += 1;
        }
        if filter.record_id.is_some() {
            conditions.push(format!("record_id = ${param_idx}"));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM activity_logs {where_clause}");
        let select_sql = format!(
            "SELECT * FROM activity_logs {where_clause} \
             ORDER BY created_at DESC LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        let mut select_query = sqlx::query_as::<_, ActivityLogEntry>(&select_sql);

        if let Some(actor_id) = filter.actor_id {
            count_query = count_query.bind(actor_id);
            select_query = select_query.bind(actor_id);
        }
        if let Some(action) = filter.action {
            count_query = count_query.bind(action);
            select_query = select_query.bind(action);
        }
        if let Some(module) = &filter.module {
            count_query = count_query.bind(module.clone());
            select_query = select_query.bind(module.clone());
        }
        if let Some(record_id) = &filter.record_id {
            count_query = count_query.bind(record_id.clone());
            select_query = select_query.bind(record_id.clone());
        }

        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count activity entries", e)
        })?;

        let entries = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to search activity log", e)
            })?;

        Ok(PageResponse::new(entries, page, total as u64))
    }
}

#[async_trait]
impl ActivityLogStore for ActivityLogRepository {
    async fn append(&self, entry: NewActivityEntry) -> AppResult<Uuid> {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO activity_logs \
             (actor_id, actor_name, actor_email, actor_role, action, module, record_id, \
              description, old_values, new_values, ip_address, user_agent, method, url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING id",
        )
        .bind(entry.actor.id)
        .bind(&entry.actor.name)
        .bind(&entry.actor.email)
        .bind(&entry.actor.role)
        .bind(entry.action)
        .bind(&entry.module)
        .bind(&entry.record_id)
        .bind(&entry.description)
        .bind(&entry.old_values)
        .bind(&entry.new_values)
        .bind(&entry.request.ip_address)
        .bind(&entry.request.user_agent)
        .bind(&entry.request.method)
        .bind(&entry.request.url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to append activity entry", e)
        })
    }
}
