//! In-memory actor directory.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use hrms_core::error::AppError;
use hrms_core::result::AppResult;
use hrms_core::traits::ActorDirectory;
use hrms_core::types::ActorSnapshot;

/// Actor identities keyed by user id.
#[derive(Debug, Default)]
pub struct MemoryActorDirectory {
    actors: DashMap<Uuid, ActorSnapshot>,
    unavailable: AtomicBool,
}

impl MemoryActorDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an actor.
    pub fn insert(&self, actor: ActorSnapshot) {
        self.actors.insert(actor.id, actor);
    }

    /// Make lookups fail, or recover.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

#[async_trait]
impl ActorDirectory for MemoryActorDirectory {
    async fn resolve(&self, actor_id: Uuid) -> AppResult<Option<ActorSnapshot>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::database("actor directory is unavailable"));
        }
        Ok(self.actors.get(&actor_id).map(|a| a.value().clone()))
    }
}
