//! Department use cases.
//!
//! Activity for departments is recorded by the HTTP layer from the
//! before/after images these methods return.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use hrms_core::error::AppError;
use hrms_core::result::AppResult;
use hrms_core::types::{PageRequest, PageResponse};
use hrms_database::repositories::{DepartmentRepository, PgArchivableRepository};
use hrms_entity::resource::{CreateDepartment, Department, UpdateDepartment};

use super::archive_through_registry;
use crate::archive::ModelRegistry;

/// Register departments as an archivable model.
pub fn register(registry: &ModelRegistry, pool: &PgPool) -> AppResult<()> {
    registry.register(Arc::new(PgArchivableRepository::new(
        pool.clone(),
        Department::DESCRIPTOR,
    )))
}

/// Manages departments.
#[derive(Debug, Clone)]
pub struct DepartmentService {
    repo: Arc<DepartmentRepository>,
    registry: Arc<ModelRegistry>,
}

impl DepartmentService {
    /// Create a department service. Deletes go through the archivable
    /// repository registered for `Department`.
    pub fn new(repo: Arc<DepartmentRepository>, registry: Arc<ModelRegistry>) -> Self {
        Self { repo, registry }
    }

    /// List active departments.
    pub async fn list(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<PageResponse<Department>, AppError> {
        self.repo.list(search, &page).await
    }

    /// Get an active department.
    pub async fn get(&self, id: Uuid) -> Result<Department, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Department {id} not found")))
    }

    /// Create a department.
    pub async fn create(&self, data: CreateDepartment) -> Result<Department, AppError> {
        let department = self.repo.create(&data).await?;
        info!(department_id = %department.id, code = %department.code, "Department created");
        Ok(department)
    }

    /// Update a department, returning `(before, after)`.
    pub async fn update(
        &self,
        id: Uuid,
        data: UpdateDepartment,
    ) -> Result<(Department, Department), AppError> {
        let before = self.get(id).await?;
        let after = self
            .repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Department {id} not found")))?;
        Ok((before, after))
    }

    /// Archive a department, returning its state before archiving.
    pub async fn archive(&self, id: Uuid) -> Result<Department, AppError> {
        let before = self.get(id).await?;
        archive_through_registry(&self.registry, &Department::DESCRIPTOR, id).await?;
        info!(department_id = %id, "Department archived");
        Ok(before)
    }
}
