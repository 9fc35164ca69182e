//! Employee entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use hrms_core::types::ModelDescriptor;

/// An employee record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: Uuid,
    /// Human-facing employee number.
    pub employee_code: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Work email.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Owning department.
    pub department_id: Option<Uuid>,
    /// Job title.
    pub designation_id: Option<Uuid>,
    /// First working day.
    pub hire_date: Option<NaiveDate>,
    /// Soft-delete flag.
    pub is_archived: bool,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Archive registry entry for employees.
    pub const DESCRIPTOR: ModelDescriptor =
        ModelDescriptor::new("Employee", "employees", "is_archived");

    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Data required to create an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployee {
    /// Human-facing employee number.
    pub employee_code: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Work email.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Owning department.
    pub department_id: Option<Uuid>,
    /// Job title.
    pub designation_id: Option<Uuid>,
    /// First working day.
    pub hire_date: Option<NaiveDate>,
}

/// Partial update of an employee.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployee {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New department.
    pub department_id: Option<Uuid>,
    /// New designation.
    pub designation_id: Option<Uuid>,
}
