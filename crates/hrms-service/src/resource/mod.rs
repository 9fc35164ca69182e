//! HR resource use cases.
//!
//! Each resource module registers its own archivable model; soft-deletes
//! go through that registered repository so archive and restore act on
//! the same storage.

pub mod catalog;
pub mod department;
pub mod employee;

pub use department::DepartmentService;
pub use employee::EmployeeService;

use serde_json::Value;
use uuid::Uuid;

use hrms_core::error::AppError;
use hrms_core::result::AppResult;
use hrms_core::types::ModelDescriptor;

use crate::archive::ModelRegistry;

/// Module name recorded for department activity.
pub const DEPARTMENTS_MODULE: &str = "Departments";
/// Module name recorded for employee activity.
pub const EMPLOYEES_MODULE: &str = "Employees";

/// Soft-delete one record through the repository registered for `model`.
pub(crate) async fn archive_through_registry(
    registry: &ModelRegistry,
    model: &ModelDescriptor,
    id: Uuid,
) -> AppResult<Value> {
    registry
        .resolve(model.name)?
        .archive_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("{} {id} not found", model.name)))
}
