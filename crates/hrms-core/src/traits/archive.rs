//! Per-model soft-delete storage contract.

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::result::AppResult;
use crate::types::model::ModelDescriptor;

/// Storage operations over the records of one archivable model.
///
/// Records travel as plain JSON objects so that the archive subsystem can
/// operate on any resource without knowing its schema. Every method is
/// atomic at the granularity of a single storage call; nothing here spans
/// more than one model.
#[async_trait]
pub trait ArchivableRepository: Send + Sync + 'static {
    /// The model this repository serves.
    fn descriptor(&self) -> &ModelDescriptor;

    /// Archived records, newest `created_at` first.
    async fn find_archived(&self) -> AppResult<Vec<Value>>;

    /// Every record regardless of its flag.
    async fn find_all(&self) -> AppResult<Vec<Value>>;

    /// Number of records whose flag equals `archived`.
    async fn count_by_flag(&self, archived: bool) -> AppResult<u64>;

    /// Clear the flag on every archived record, returning how many changed.
    async fn restore_all(&self) -> AppResult<u64>;

    /// Clear the flag on one record.
    ///
    /// Returns `None` only when no record with `id` exists. An already
    /// active record is returned unchanged.
    async fn restore_by_id(&self, id: Uuid) -> AppResult<Option<Value>>;

    /// Set the flag on one record. Returns `None` when `id` does not exist.
    async fn archive_by_id(&self, id: Uuid) -> AppResult<Option<Value>>;
}
