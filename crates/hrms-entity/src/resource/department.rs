//! Department entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use hrms_core::types::ModelDescriptor;

/// An organisational department.
///
/// Departments use a model-specific flag column, `archive_department`,
/// instead of the common `is_archived`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Department {
    /// Unique department identifier.
    pub id: Uuid,
    /// Department name.
    pub name: String,
    /// Short unique code (e.g. `ENG`).
    pub code: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Soft-delete flag.
    pub archive_department: bool,
    /// When the department was created.
    pub created_at: DateTime<Utc>,
    /// When the department was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Department {
    /// Archive registry entry for departments.
    pub const DESCRIPTOR: ModelDescriptor =
        ModelDescriptor::new("Department", "departments", "archive_department");
}

/// Data required to create a department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDepartment {
    /// Department name.
    pub name: String,
    /// Short unique code.
    pub code: String,
    /// Free-form description.
    pub description: Option<String>,
}

/// Partial update of a department.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDepartment {
    /// New name.
    pub name: Option<String>,
    /// New code.
    pub code: Option<String>,
    /// New description.
    pub description: Option<String>,
}
