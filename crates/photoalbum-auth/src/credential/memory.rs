//! In-memory credential store using a Tokio lock for single-node deployments.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use photoalbum_core::config::DemoUserConfig;
use photoalbum_core::error::AppError;
use photoalbum_core::result::AppResult;
use photoalbum_core::types::UserId;
use photoalbum_entity::user::User;

use super::store::CredentialStore;
use crate::password::PasswordHasher;

/// Internal state guarded by the store lock.
#[derive(Debug, Default)]
struct InnerState {
    /// Users keyed by lowercase login.
    by_login: HashMap<String, User>,
    /// Lowercase emails of all stored users.
    emails: HashMap<String, UserId>,
}

impl InnerState {
    fn insert(&mut self, user: User) -> AppResult<()> {
        let login_key = user.login.to_lowercase();
        let email_key = user.email.to_lowercase();
        if self.by_login.contains_key(&login_key) {
            return Err(AppError::conflict(format!(
                "User with login '{}' already exists",
                user.login
            )));
        }
        if self.emails.contains_key(&email_key) {
            return Err(AppError::conflict(format!(
                "User with email '{}' already exists",
                user.email
            )));
        }
        self.emails.insert(email_key, user.id);
        self.by_login.insert(login_key, user);
        Ok(())
    }
}

/// Credential store holding every user in process memory.
///
/// Lost on restart. Used by the demo server and by tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    state: Arc<RwLock<InnerState>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with the given users.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> AppResult<Self> {
        let mut state = InnerState::default();
        for user in users {
            state.insert(user)?;
        }
        Ok(Self {
            state: Arc::new(RwLock::new(state)),
        })
    }

    /// Creates a store seeded with the configured demo accounts.
    pub fn with_demo_users(
        demo_users: &[DemoUserConfig],
        hasher: &PasswordHasher,
    ) -> AppResult<Self> {
        let users = demo_users
            .iter()
            .map(|demo| {
                Ok(User {
                    id: UserId::new(),
                    login: demo.login.clone(),
                    email: demo.email.clone(),
                    password_hash: hasher.hash_password(&demo.password)?,
                    pre_defined: demo.pre_defined,
                    created_at: Some(Utc::now()),
                    ..User::default()
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        info!(count = users.len(), "Seeding demo users");
        Self::with_users(users)
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn resolve(&self, login: &str, password_hash: &str) -> AppResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state
            .by_login
            .get(&login.to_lowercase())
            .filter(|user| user.password_hash == password_hash)
            .cloned())
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let mut state = self.state.write().await;
        state.insert(user.clone())?;
        info!(user_id = %user.id, login = %user.login, "User created");
        Ok(user)
    }

    async fn exists_by_login(&self, login: &str) -> AppResult<bool> {
        Ok(self
            .state
            .read()
            .await
            .by_login
            .contains_key(&login.to_lowercase()))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self
            .state
            .read()
            .await
            .emails
            .contains_key(&email.to_lowercase()))
    }
}
