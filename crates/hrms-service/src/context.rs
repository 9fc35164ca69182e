//! Request context carrying the authenticated user and request metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hrms_core::types::RequestMeta;
use hrms_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Built by the API layer from the bearer token and request headers, and
/// passed into service methods that record activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// Role from the token.
    pub role: UserRole,
    /// Username from the token.
    pub username: String,
    /// HTTP method, path and caller details.
    pub request: RequestMeta,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Create a request context.
    pub fn new(user_id: Uuid, role: UserRole, username: String, request: RequestMeta) -> Self {
        Self {
            user_id,
            role,
            username,
            request,
            request_time: Utc::now(),
        }
    }
}
