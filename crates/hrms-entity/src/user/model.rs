//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use hrms_core::types::ActorSnapshot;

use super::role::UserRole;

/// A user account that can sign in and act on HR records.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Human-readable full name.
    pub full_name: String,
    /// Email address.
    pub email: Option<String>,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
    /// Whether the account may sign in.
    pub is_active: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// The identity copied onto activity log entries.
    pub fn actor_snapshot(&self) -> ActorSnapshot {
        ActorSnapshot {
            id: self.id,
            name: self.full_name.clone(),
            email: self.email.clone(),
            role: self.role.as_str().to_string(),
        }
    }
}
