//! Best-effort activity recorder.

use std::sync::Arc;

use serde_json::Value;
use tokio_util::task::TaskTracker;
use tracing::{debug, warn};
use uuid::Uuid;

use hrms_core::traits::{ActivityLogStore, ActorDirectory};
use hrms_core::types::{ActorSnapshot, AuditAction, NewActivityEntry, RequestMeta};

/// One mutating action to be written to the activity log.
#[derive(Debug, Clone)]
pub struct ActivityEvent {
    /// Who acted.
    pub actor_id: Uuid,
    /// Target module (e.g. `"Employees"`).
    pub module: String,
    /// What happened.
    pub action: AuditAction,
    /// Explicit target record id. Falls back to the payload ids.
    pub record_id: Option<String>,
    /// State before the action.
    pub old_values: Option<Value>,
    /// State after the action.
    pub new_values: Option<Value>,
    /// Request metadata.
    pub request: RequestMeta,
}

impl ActivityEvent {
    /// Start an event with no payloads.
    pub fn new(actor_id: Uuid, module: impl Into<String>, action: AuditAction) -> Self {
        Self {
            actor_id,
            module: module.into(),
            action,
            record_id: None,
            old_values: None,
            new_values: None,
            request: RequestMeta::default(),
        }
    }

    /// Set the target record id.
    pub fn record_id(mut self, id: impl Into<String>) -> Self {
        self.record_id = Some(id.into());
        self
    }

    /// Set the before-image.
    pub fn old_values(mut self, values: Option<Value>) -> Self {
        self.old_values = values;
        self
    }

    /// Set the after-image.
    pub fn new_values(mut self, values: Option<Value>) -> Self {
        self.new_values = values;
        self
    }

    /// Attach request metadata.
    pub fn request(mut self, request: RequestMeta) -> Self {
        self.request = request;
        self
    }
}

/// Writes activity entries without ever failing the caller.
///
/// Actor identity is looked up when the entry is written. Unknown actors
/// are recorded with a placeholder identity; lookup and storage failures
/// are logged and the entry is dropped.
#[derive(Clone)]
pub struct ActivityRecorder {
    store: Arc<dyn ActivityLogStore>,
    actors: Arc<dyn ActorDirectory>,
    tracker: TaskTracker,
}

impl std::fmt::Debug for ActivityRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityRecorder")
            .field("pending", &self.tracker.len())
            .finish()
    }
}

impl ActivityRecorder {
    /// Create a recorder over the given store and actor directory.
    pub fn new(store: Arc<dyn ActivityLogStore>, actors: Arc<dyn ActorDirectory>) -> Self {
        Self {
            store,
            actors,
            tracker: TaskTracker::new(),
        }
    }

    /// Write `event` now. Returns the entry id, or `None` if nothing was written.
    pub async fn record(&self, event: ActivityEvent) -> Option<Uuid> {
        let actor = match self.actors.resolve(event.actor_id).await {
            Ok(Some(actor)) => actor,
            Ok(None) => ActorSnapshot::unknown(event.actor_id),
            Err(e) => {
                warn!(
                    actor_id = %event.actor_id,
                    module = %event.module,
                    action = %event.action,
                    error = %e,
                    "Failed to resolve actor; activity not recorded"
                );
                return None;
            }
        };

        let record_id = event.record_id.or_else(|| {
            extract_record_id(event.new_values.as_ref())
                .or_else(|| extract_record_id(event.old_values.as_ref()))
        });

        let entry = NewActivityEntry {
            actor,
            action: event.action,
            description: event.action.describe(&event.module),
            module: event.module,
            record_id,
            old_values: event.old_values,
            new_values: event.new_values,
            request: event.request,
        };
        let (module, action) = (entry.module.clone(), entry.action);

        match self.store.append(entry).await {
            Ok(id) => {
                debug!(entry_id = %id, %module, %action, "Activity recorded");
                Some(id)
            }
            Err(e) => {
                warn!(%module, %action, error = %e, "Failed to record activity");
                None
            }
        }
    }

    /// Write `event` on a tracked background task.
    pub fn spawn_record(&self, event: ActivityEvent) {
        let recorder = self.clone();
        self.tracker.spawn(async move {
            recorder.record(event).await;
        });
    }

    /// Number of background writes still running.
    pub fn pending(&self) -> usize {
        self.tracker.len()
    }

    /// Wait for every background write spawned so far.
    ///
    /// The recorder keeps accepting new work afterwards.
    pub async fn drain(&self) {
        self.tracker.close();
        self.tracker.wait().await;
        self.tracker.reopen();
    }
}

/// The record id carried by a payload: `id` first, then `_id`.
fn extract_record_id(values: Option<&Value>) -> Option<String> {
    let values = values?;
    ["id", "_id"]
        .iter()
        .filter_map(|key| values.get(*key))
        .find_map(|v| match v {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}
