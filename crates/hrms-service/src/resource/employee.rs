//! Employee use cases with explicit activity recording.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use hrms_core::error::AppError;
use hrms_core::result::AppResult;
use hrms_core::types::{AuditAction, PageRequest, PageResponse};
use hrms_database::repositories::{EmployeeRepository, PgArchivableRepository};
use hrms_entity::resource::{CreateEmployee, Employee, UpdateEmployee};

use super::{EMPLOYEES_MODULE, archive_through_registry};
use crate::activity::{ActivityEvent, ActivityRecorder};
use crate::archive::ModelRegistry;
use crate::context::RequestContext;

/// Register employees as an archivable model.
pub fn register(registry: &ModelRegistry, pool: &PgPool) -> AppResult<()> {
    registry.register(Arc::new(PgArchivableRepository::new(
        pool.clone(),
        Employee::DESCRIPTOR,
    )))
}

/// Manages employees and records each change in the activity log.
#[derive(Debug, Clone)]
pub struct EmployeeService {
    repo: Arc<EmployeeRepository>,
    registry: Arc<ModelRegistry>,
    recorder: ActivityRecorder,
}

impl EmployeeService {
    /// Create an employee service.
    pub fn new(
        repo: Arc<EmployeeRepository>,
        registry: Arc<ModelRegistry>,
        recorder: ActivityRecorder,
    ) -> Self {
        Self {
            repo,
            registry,
            recorder,
        }
    }

    /// List active employees.
    pub async fn list(
        &self,
        department_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<PageResponse<Employee>, AppError> {
        self.repo.list(department_id, &page).await
    }

    /// Get an active employee.
    pub async fn get(&self, id: Uuid) -> Result<Employee, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))
    }

    /// Create an employee.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateEmployee,
    ) -> Result<Employee, AppError> {
        let employee = self.repo.create(&data).await?;
        info!(employee_id = %employee.id, actor = %ctx.user_id, "Employee created");

        self.record(ctx, AuditAction::Create, employee.id, None, Some(&employee));
        Ok(employee)
    }

    /// Update an employee.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateEmployee,
    ) -> Result<Employee, AppError> {
        let before = self.get(id).await?;
        let after = self
            .repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;

        self.record(ctx, AuditAction::Update, id, Some(&before), Some(&after));
        Ok(after)
    }

    /// Archive an employee, returning the state before archiving.
    pub async fn archive(&self, ctx: &RequestContext, id: Uuid) -> Result<Employee, AppError> {
        let before = self.get(id).await?;
        archive_through_registry(&self.registry, &Employee::DESCRIPTOR, id).await?;
        info!(employee_id = %id, actor = %ctx.user_id, "Employee archived");

        self.record(ctx, AuditAction::Delete, id, Some(&before), None);
        Ok(before)
    }

    fn record(
        &self,
        ctx: &RequestContext,
        action: AuditAction,
        id: Uuid,
        old: Option<&Employee>,
        new: Option<&Employee>,
    ) {
        let event = ActivityEvent::new(ctx.user_id, EMPLOYEES_MODULE, action)
            .record_id(id.to_string())
            .old_values(old.and_then(|e| serde_json::to_value(e).ok()))
            .new_values(new.and_then(|e| serde_json::to_value(e).ok()))
            .request(ctx.request.clone());
        self.recorder.spawn_record(event);
    }
}
