//! Activity-log value types shared by producers and stores.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// The kind of action an activity log entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(
    feature = "sqlx",
    sqlx(type_name = "audit_action", rename_all = "UPPERCASE")
)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditAction {
    /// A record was created.
    Create,
    /// A record was modified.
    Update,
    /// A record was archived (soft-deleted).
    Delete,
    /// A user signed in.
    Login,
    /// A user signed out.
    Logout,
}

impl AuditAction {
    /// Infer the action from an HTTP method. Only mutating methods map.
    pub fn from_method(method: &str) -> Option<Self> {
        match method {
            "POST" => Some(Self::Create),
            "PUT" | "PATCH" => Some(Self::Update),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }

    /// Return the action as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Login => "LOGIN",
            Self::Logout => "LOGOUT",
        }
    }

    /// Build the human-readable description stored with an entry.
    pub fn describe(&self, module: &str) -> String {
        match self {
            Self::Create => format!("Created a record in {module}"),
            Self::Update => format!("Updated a record in {module}"),
            Self::Delete => format!("Archived a record in {module}"),
            Self::Login => format!("Logged in to {module}"),
            Self::Logout => format!("Logged out of {module}"),
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CREATE" => Ok(Self::Create),
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            "LOGIN" => Ok(Self::Login),
            "LOGOUT" => Ok(Self::Logout),
            _ => Err(AppError::validation(format!(
                "Invalid audit action: '{s}'. Expected one of: CREATE, UPDATE, DELETE, LOGIN, LOGOUT"
            ))),
        }
    }
}

/// The acting user's identity, frozen at the time of the action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorSnapshot {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Option<String>,
    /// Role name.
    pub role: String,
}

impl ActorSnapshot {
    /// Placeholder identity for an actor id that no longer resolves.
    pub fn unknown(id: Uuid) -> Self {
        Self {
            id,
            name: "Unknown User".to_string(),
            email: None,
            role: "unknown".to_string(),
        }
    }
}

/// Request metadata captured alongside an activity entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestMeta {
    /// Caller IP address.
    pub ip_address: Option<String>,
    /// Caller User-Agent.
    pub user_agent: Option<String>,
    /// HTTP method.
    pub method: Option<String>,
    /// Request URL (path and query).
    pub url: Option<String>,
}

/// A fully-resolved activity entry ready to be appended to the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActivityEntry {
    /// Actor identity at event time.
    pub actor: ActorSnapshot,
    /// Action performed.
    pub action: AuditAction,
    /// Target module (e.g. `"Employees"`).
    pub module: String,
    /// Target record identifier, if known.
    pub record_id: Option<String>,
    /// Human-readable description.
    pub description: String,
    /// State before the action.
    pub old_values: Option<serde_json::Value>,
    /// State after the action.
    pub new_values: Option<serde_json::Value>,
    /// Request context.
    pub request: RequestMeta,
}
