//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use hrms_core::error::{AppError, ErrorKind};
use hrms_core::result::AppResult;
use hrms_core::traits::ActorDirectory;
use hrms_core::types::ActorSnapshot;
use hrms_entity::user::{User, UserRole};

use super::write_error;

/// Repository for user accounts.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by username (case-insensitive).
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(username) = LOWER($1)")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
            })
    }

    /// Insert a user with an already-hashed password.
    pub async fn create(
        &self,
        username: &str,
        full_name: &str,
        email: Option<&str>,
        password_hash: &str,
        role: UserRole,
    ) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, full_name, email, password_hash, role) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(username)
        .bind(full_name)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("Failed to create user", e))
    }
}

#[async_trait]
impl ActorDirectory for UserRepository {
    async fn resolve(&self, actor_id: Uuid) -> AppResult<Option<ActorSnapshot>> {
        Ok(self
            .find_by_id(actor_id)
            .await?
            .map(|user| user.actor_snapshot()))
    }
}
