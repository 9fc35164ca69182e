//! In-memory activity log.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use hrms_core::error::AppError;
use hrms_core::result::AppResult;
use hrms_core::traits::ActivityLogStore;
use hrms_core::types::NewActivityEntry;
use hrms_entity::audit::ActivityLogEntry;

/// Append-only activity log kept in a vector.
#[derive(Debug, Default)]
pub struct MemoryActivityLog {
    entries: RwLock<Vec<ActivityLogEntry>>,
    unavailable: AtomicBool,
}

impl MemoryActivityLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every entry in append order.
    pub async fn entries(&self) -> Vec<ActivityLogEntry> {
        self.entries.read().await.clone()
    }

    /// Make appends fail, or recover.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

#[async_trait]
impl ActivityLogStore for MemoryActivityLog {
    async fn append(&self, entry: NewActivityEntry) -> AppResult<Uuid> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::database("activity log is unavailable"));
        }
        let id = Uuid::now_v7();
        self.entries
            .write()
            .await
            .push(ActivityLogEntry::from_new(id, entry, Utc::now()));
        Ok(id)
    }
}
