//! Archivable models that have no dedicated controller in this service.
//!
//! Their tables exist and carry the common `is_archived` flag, so they take
//! part in archive administration without a typed entity.

use hrms_core::types::ModelDescriptor;

/// Job titles.
pub const DESIGNATION: ModelDescriptor =
    ModelDescriptor::new("Designation", "designations", "is_archived");

/// Employee leave requests.
pub const LEAVE_REQUEST: ModelDescriptor =
    ModelDescriptor::new("LeaveRequest", "leave_requests", "is_archived");

/// Monthly payroll records.
pub const PAYROLL_RECORD: ModelDescriptor =
    ModelDescriptor::new("PayrollRecord", "payroll_records", "is_archived");

/// Open job postings.
pub const JOB_POSTING: ModelDescriptor =
    ModelDescriptor::new("JobPosting", "job_postings", "is_archived");
