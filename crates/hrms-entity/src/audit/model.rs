//! Activity log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use hrms_core::types::{AuditAction, NewActivityEntry};

/// An immutable activity log entry.
///
/// Actor fields are copies taken when the entry was written, so the entry
/// stays accurate after the user is renamed or removed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivityLogEntry {
    /// Unique entry identifier.
    pub id: Uuid,
    /// The user who performed the action.
    pub actor_id: Uuid,
    /// Actor display name at event time.
    pub actor_name: String,
    /// Actor email at event time.
    pub actor_email: Option<String>,
    /// Actor role at event time.
    pub actor_role: String,
    /// The action performed.
    pub action: AuditAction,
    /// Target module (e.g. `"Employees"`).
    pub module: String,
    /// Target record identifier.
    pub record_id: Option<String>,
    /// Human-readable description.
    pub description: String,
    /// Record state before the action.
    pub old_values: Option<serde_json::Value>,
    /// Record state after the action.
    pub new_values: Option<serde_json::Value>,
    /// Caller IP address.
    pub ip_address: Option<String>,
    /// Caller User-Agent.
    pub user_agent: Option<String>,
    /// HTTP method of the triggering request.
    pub method: Option<String>,
    /// URL of the triggering request.
    pub url: Option<String>,
    /// When the entry was written.
    pub created_at: DateTime<Utc>,
}

impl ActivityLogEntry {
    /// Materialize a pending entry with its assigned id and timestamp.
    pub fn from_new(id: Uuid, entry: NewActivityEntry, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            actor_id: entry.actor.id,
            actor_name: entry.actor.name,
            actor_email: entry.actor.email,
            actor_role: entry.actor.role,
            action: entry.action,
            module: entry.module,
            record_id: entry.record_id,
            description: entry.description,
            old_values: entry.old_values,
            new_values: entry.new_values,
            ip_address: entry.request.ip_address,
            user_agent: entry.request.user_agent,
            method: entry.request.method,
            url: entry.request.url,
            created_at,
        }
    }
}

/// Optional filters for searching the activity log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityLogFilter {
    /// Only entries by this actor.
    pub actor_id: Option<Uuid>,
    /// Only entries with this action.
    pub action: Option<AuditAction>,
    /// Only entries for this module.
    pub module: Option<String>,
    /// Only entries for this record.
    pub record_id: Option<String>,
}
