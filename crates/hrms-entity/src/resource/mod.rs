//! HR resource entities that support soft-deletion.

pub mod catalog;
pub mod department;
pub mod employee;

pub use catalog::{DESIGNATION, JOB_POSTING, LEAVE_REQUEST, PAYROLL_RECORD};
pub use department::{CreateDepartment, Department, UpdateDepartment};
pub use employee::{CreateEmployee, Employee, UpdateEmployee};
