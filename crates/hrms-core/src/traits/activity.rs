//! Activity-log sink and actor lookup contracts.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;
use crate::types::activity::{ActorSnapshot, NewActivityEntry};

/// Append-only destination for activity entries.
///
/// Entries cannot be modified or removed once appended.
#[async_trait]
pub trait ActivityLogStore: Send + Sync + 'static {
    /// Persist one entry and return its identifier.
    async fn append(&self, entry: NewActivityEntry) -> AppResult<Uuid>;
}

/// Resolves a user id into the identity recorded on activity entries.
#[async_trait]
pub trait ActorDirectory: Send + Sync + 'static {
    /// Look up the actor's current identity. `None` if the user is unknown.
    async fn resolve(&self, actor_id: Uuid) -> AppResult<Option<ActorSnapshot>>;
}
