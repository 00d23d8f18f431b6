//! Salted Argon2id password hashing.
//!
//! The credential store looks users up by `(login, hash)`, so the hash of
//! a given password must be reproducible. Every hash therefore uses the
//! deployment-wide salt from [`AuthConfig`] rather than a per-call
//! random salt.

use argon2::Argon2;
use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD;

use photoalbum_core::config::AuthConfig;
use photoalbum_core::error::AppError;

/// Smallest salt Argon2 accepts.
const MIN_SALT_LEN: usize = 8;

/// Output length of the raw hash in bytes.
const HASH_LEN: usize = 32;

/// Hashes passwords with Argon2id and a fixed deployment salt.
#[derive(Clone)]
pub struct PasswordHasher {
    salt: Vec<u8>,
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("salt", &"<redacted>")
            .finish()
    }
}

impl PasswordHasher {
    /// Creates a hasher from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        Self::with_salt(&config.password_salt)
    }

    /// Creates a hasher with an explicit salt.
    pub fn with_salt(salt: &str) -> Result<Self, AppError> {
        if salt.len() < MIN_SALT_LEN {
            return Err(AppError::configuration(format!(
                "Password salt must be at least {MIN_SALT_LEN} bytes"
            )));
        }
        Ok(Self {
            salt: salt.as_bytes().to_vec(),
        })
    }

    /// Hashes a plaintext password.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let mut out = [0u8; HASH_LEN];
        Argon2::default()
            .hash_password_into(password.as_bytes(), &self.salt, &mut out)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;
        Ok(STANDARD_NO_PAD.encode(out))
    }
}
