//! Employee repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use hrms_core::error::{AppError, ErrorKind};
use hrms_core::result::AppResult;
use hrms_core::types::{PageRequest, PageResponse};
use hrms_entity::resource::{CreateEmployee, Employee, UpdateEmployee};

use super::write_error;

/// Repository for employees. Reads skip archived rows.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    /// Create a new employee repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an active employee by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees WHERE id = $1 AND is_archived = FALSE",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find employee", e))
    }

    /// List active employees, optionally restricted to one department.
    pub async fn list(
        &self,
        department_id: Option<Uuid>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Employee>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM employees WHERE is_archived = FALSE \
             AND ($1::UUID IS NULL OR department_id = $1)",
        )
        .bind(department_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count employees", e))?;

        let items = sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees WHERE is_archived = FALSE \
             AND ($1::UUID IS NULL OR department_id = $1) \
             ORDER BY last_name ASC, first_name ASC LIMIT $2 OFFSET $3",
        )
        .bind(department_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list employees", e))?;

        Ok(PageResponse::new(items, page, total as u64))
    }

    /// Insert an employee.
    pub async fn create(&self, data: &CreateEmployee) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>(
            "INSERT INTO employees \
             (employee_code, first_name, last_name, email, phone, department_id, designation_id, hire_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&data.employee_code)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(data.department_id)
        .bind(data.designation_id)
        .bind(data.hire_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("Failed to create employee", e))
    }

    /// Apply a partial update to an active employee.
    pub async fn update(&self, id: Uuid, data: &UpdateEmployee) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>(
            "UPDATE employees SET \
             first_name = COALESCE($2, first_name), \
             last_name = COALESCE($3, last_name), \
             email = COALESCE($4, email), \
             phone = COALESCE($5, phone), \
             department_id = COALESCE($6, department_id), \
             designation_id = COALESCE($7, designation_id), \
             updated_at = NOW() \
             WHERE id = $1 AND is_archived = FALSE RETURNING *",
        )
        .bind(id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(data.department_id)
        .bind(data.designation_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error("Failed to update employee", e))
    }
}
