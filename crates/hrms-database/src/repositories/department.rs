//! Department repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use hrms_core::error::{AppError, ErrorKind};
use hrms_core::result::AppResult;
use hrms_core::types::{PageRequest, PageResponse};
use hrms_entity::resource::{CreateDepartment, Department, UpdateDepartment};

use super::write_error;

/// Repository for departments. Reads skip archived rows unless stated.
#[derive(Debug, Clone)]
pub struct DepartmentRepository {
    pool: PgPool,
}

impl DepartmentRepository {
    /// Create a new department repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an active department by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Department>> {
        sqlx::query_as::<_, Department>(
            "SELECT * FROM departments WHERE id = $1 AND archive_department = FALSE",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find department", e))
    }

    /// List active departments, optionally matching `search` against name or code.
    pub async fn list(
        &self,
        search: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Department>> {
        let pattern = search.map(|s| format!("%{s}%"));

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM departments WHERE archive_department = FALSE \
             AND ($1::TEXT IS NULL OR name ILIKE $1 OR code ILIKE $1)",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count departments", e))?;

        let items = sqlx::query_as::<_, Department>(
            "SELECT * FROM departments WHERE archive_department = FALSE \
             AND ($1::TEXT IS NULL OR name ILIKE $1 OR code ILIKE $1) \
             ORDER BY name ASC LIMIT $2 OFFSET $3",
        )
        .bind(&pattern)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list departments", e))?;

        Ok(PageResponse::new(items, page, total as u64))
    }

    /// Insert a department. The archive flag starts cleared.
    pub async fn create(&self, data: &CreateDepartment) -> AppResult<Department> {
        sqlx::query_as::<_, Department>(
            "INSERT INTO departments (name, code, description) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.code)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("Failed to create department", e))
    }

    /// Apply a partial update to an active department.
    pub async fn update(&self, id: Uuid, data: &UpdateDepartment) -> AppResult<Option<Department>> {
        sqlx::query_as::<_, Department>(
            "UPDATE departments SET \
             name = COALESCE($2, name), \
             code = COALESCE($3, code), \
             description = COALESCE($4, description), \
             updated_at = NOW() \
             WHERE id = $1 AND archive_department = FALSE RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.code)
        .bind(&data.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error("Failed to update department", e))
    }
}
