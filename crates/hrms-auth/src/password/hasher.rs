//! Argon2id password hashing and verification.

use std::sync::OnceLock;

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use hrms_core::error::AppError;

/// Hashes and verifies passwords with Argon2id.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a hasher.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a random salt.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Whether `password` matches the stored `hash`.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }

    /// Verify `password` against a throwaway hash and discard the result.
    ///
    /// Sign-in calls this for unknown usernames so both paths pay for one
    /// Argon2 verification.
    pub fn verify_dummy(&self, password: &str) {
        if let Some(hash) = self.dummy_hash() {
            let _ = self.verify(password, hash);
        }
    }

    fn dummy_hash(&self) -> Option<&'static str> {
        static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();
        DUMMY_HASH
            .get_or_init(|| self.hash("hrms-unknown-user").ok())
            .as_deref()
    }
}
