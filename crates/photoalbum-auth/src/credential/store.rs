//! Credential store trait.

use async_trait::async_trait;

use photoalbum_core::result::AppResult;
use photoalbum_entity::user::User;

/// Persistent user records as seen by the authentication workflow.
///
/// Logins and emails are unique and compared case-insensitively.
#[async_trait]
pub trait CredentialStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find the user whose login and password hash both match.
    async fn resolve(&self, login: &str, password_hash: &str) -> AppResult<Option<User>>;

    /// Store a new user and return it.
    async fn create(&self, user: User) -> AppResult<User>;

    /// Whether a user with this login exists.
    async fn exists_by_login(&self, login: &str) -> AppResult<bool>;

    /// Whether a user with this email exists.
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;
}
