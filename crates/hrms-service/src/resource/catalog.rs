//! Archivable models without a dedicated controller.

use std::sync::Arc;

use sqlx::PgPool;

use hrms_core::result::AppResult;
use hrms_database::repositories::PgArchivableRepository;
use hrms_entity::resource::{DESIGNATION, JOB_POSTING, LEAVE_REQUEST, PAYROLL_RECORD};

use crate::archive::ModelRegistry;

/// Register the catalog tables that only take part in archive administration.
pub fn register(registry: &ModelRegistry, pool: &PgPool) -> AppResult<()> {
    for descriptor in [DESIGNATION, LEAVE_REQUEST, PAYROLL_RECORD, JOB_POSTING] {
        registry.register(Arc::new(PgArchivableRepository::new(pool.clone(), descriptor)))?;
    }
    Ok(())
}
