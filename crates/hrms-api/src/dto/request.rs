//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use hrms_core::error::AppError;
use hrms_entity::resource::{CreateDepartment, CreateEmployee, UpdateDepartment, UpdateEmployee};

/// Run `validator` checks, turning failures into a validation error.
pub fn validate_request<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid request: {e}")))
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create department request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDepartmentRequest {
    /// Department name.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Short unique code.
    #[validate(length(min = 1, max = 32))]
    pub code: String,
    /// Description.
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

impl From<CreateDepartmentRequest> for CreateDepartment {
    fn from(req: CreateDepartmentRequest) -> Self {
        Self {
            name: req.name,
            code: req.code,
            description: req.description,
        }
    }
}

/// Update department request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateDepartmentRequest {
    /// New name.
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    /// New code.
    #[validate(length(min = 1, max = 32))]
    pub code: Option<String>,
    /// New description.
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

impl From<UpdateDepartmentRequest> for UpdateDepartment {
    fn from(req: UpdateDepartmentRequest) -> Self {
        Self {
            name: req.name,
            code: req.code,
            description: req.description,
        }
    }
}

/// Create employee request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    /// Employee number.
    #[validate(length(min = 1, max = 32))]
    pub employee_code: String,
    /// Given name.
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    /// Work email.
    #[validate(email)]
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Department.
    pub department_id: Option<Uuid>,
    /// Designation.
    pub designation_id: Option<Uuid>,
    /// First working day.
    pub hire_date: Option<NaiveDate>,
}

impl From<CreateEmployeeRequest> for CreateEmployee {
    fn from(req: CreateEmployeeRequest) -> Self {
        Self {
            employee_code: req.employee_code,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            department_id: req.department_id,
            designation_id: req.designation_id,
            hire_date: req.hire_date,
        }
    }
}

/// Update employee request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    /// New given name.
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    /// New family name.
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    /// New email.
    #[validate(email)]
    pub email: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New department.
    pub department_id: Option<Uuid>,
    /// New designation.
    pub designation_id: Option<Uuid>,
}

impl From<UpdateEmployeeRequest> for UpdateEmployee {
    fn from(req: UpdateEmployeeRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            department_id: req.department_id,
            designation_id: req.designation_id,
        }
    }
}

/// Filters for `GET /api/activity-logs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityLogQuery {
    /// Only entries by this actor.
    pub actor_id: Option<String>,
    /// Only entries with this action.
    pub action: Option<String>,
    /// Only entries for this module.
    pub module: Option<String>,
    /// Only entries for this record.
    pub record_id: Option<String>,
}

/// Filters for department listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentQuery {
    /// Matches name or code.
    pub search: Option<String>,
}

/// Filters for employee listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeQuery {
    /// Only employees of this department.
    pub department_id: Option<Uuid>,
}
