//! Credential checks, token issuance and sign-in activity.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use hrms_auth::{JwtEncoder, PasswordHasher};
use hrms_core::error::AppError;
use hrms_core::types::{AuditAction, RequestMeta};
use hrms_database::repositories::UserRepository;
use hrms_entity::user::User;

use crate::activity::{ActivityEvent, ActivityRecorder};
use crate::context::RequestContext;

/// Module name recorded for sign-in activity.
pub const AUTH_MODULE: &str = "Auth";

/// A successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    /// Bearer token for subsequent requests.
    pub access_token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
    /// The signed-in user.
    pub user: User,
}

/// Authenticates users.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<UserRepository>,
    hasher: PasswordHasher,
    encoder: Arc<JwtEncoder>,
    recorder: ActivityRecorder,
}

impl AuthService {
    /// Create an auth service.
    pub fn new(
        users: Arc<UserRepository>,
        encoder: Arc<JwtEncoder>,
        recorder: ActivityRecorder,
    ) -> Self {
        Self {
            users,
            hasher: PasswordHasher::new(),
            encoder,
            recorder,
        }
    }

    /// Check credentials and issue an access token.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        request: RequestMeta,
    ) -> Result<LoginResult, AppError> {
        let invalid = || AppError::authentication("Invalid username or password");

        let Some(user) = self.users.find_by_username(username).await? else {
            self.hasher.verify_dummy(password);
            warn!(username, "Login rejected: unknown user");
            return Err(invalid());
        };
        if !self.hasher.verify(password, &user.password_hash)? {
            warn!(username, "Login rejected: wrong password");
            return Err(invalid());
        }
        if !user.is_active {
            return Err(AppError::authentication("Account is disabled"));
        }

        let token = self.encoder.issue(user.id, user.role, &user.username)?;
        info!(user_id = %user.id, "User logged in");

        self.recorder
            .spawn_record(ActivityEvent::new(user.id, AUTH_MODULE, AuditAction::Login).request(request));

        Ok(LoginResult {
            access_token: token.token,
            expires_at: token.expires_at,
            user,
        })
    }

    /// Record a sign-out. Tokens are stateless and simply expire.
    pub fn logout(&self, ctx: &RequestContext) {
        info!(user_id = %ctx.user_id, "User logged out");
        self.recorder.spawn_record(
            ActivityEvent::new(ctx.user_id, AUTH_MODULE, AuditAction::Logout)
                .request(ctx.request.clone()),
        );
    }
}
