//! Read access to the activity log.

use std::sync::Arc;

use uuid::Uuid;

use hrms_core::error::AppError;
use hrms_core::types::{PageRequest, PageResponse};
use hrms_database::repositories::ActivityLogRepository;
use hrms_entity::audit::{ActivityLogEntry, ActivityLogFilter};

/// Queries over recorded activity. There is no write or delete path here.
#[derive(Debug, Clone)]
pub struct ActivityLogService {
    repo: Arc<ActivityLogRepository>,
}

impl ActivityLogService {
    /// Create an activity log service.
    pub fn new(repo: Arc<ActivityLogRepository>) -> Self {
        Self { repo }
    }

    /// Search entries, newest first.
    pub async fn search(
        &self,
        filter: &ActivityLogFilter,
        page: PageRequest,
    ) -> Result<PageResponse<ActivityLogEntry>, AppError> {
        self.repo
            .search(filter, &page)
            .await
            .map_err(|e| e.context("Activity log search failed"))
    }

    /// Fetch one entry.
    pub async fn get(&self, id: Uuid) -> Result<ActivityLogEntry, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Activity entry {id} not found")))
    }
}
