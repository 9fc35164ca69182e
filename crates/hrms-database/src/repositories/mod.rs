//! PostgreSQL repository implementations.

pub mod activity_log;
pub mod archivable;
pub mod department;
pub mod employee;
pub mod user;

pub use activity_log::ActivityLogRepository;
pub use archivable::PgArchivableRepository;
pub use department::DepartmentRepository;
pub use employee::EmployeeRepository;
pub use user::UserRepository;

use hrms_core::error::{AppError, ErrorKind};

/// Map a write failure, turning unique-constraint violations into conflicts.
pub(crate) fn write_error(context: &str, err: sqlx::Error) -> AppError {
    let unique = err
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());
    if unique {
        AppError::with_source(ErrorKind::Conflict, format!("{context}: already exists"), err)
    } else {
        AppError::with_source(ErrorKind::Database, context.to_string(), err)
    }
}
