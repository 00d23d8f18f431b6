//! Per-session identity and the credentials submitted with a login.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use photoalbum_core::types::UserId;
use photoalbum_entity::user::User;

/// A role granted to an authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Role {
    /// Role name, e.g. `"admin"`.
    pub name: String,
    /// Group the role is scoped to.
    pub group: String,
}

/// Who the current session is acting as.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Identity {
    user_id: Option<UserId>,
    roles: BTreeSet<Role>,
}

impl Identity {
    /// Marks the identity as logged in as `user`. Previously granted roles
    /// are dropped.
    pub fn login(&mut self, user: &User) {
        self.user_id = Some(user.id);
        self.roles.clear();
    }

    /// Ends the identity session and revokes all roles.
    pub fn logout(&mut self) {
        *self = Self::default();
    }

    /// Whether a user is logged in.
    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }

    /// The logged-in user's id.
    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Grants a role.
    pub fn add_role(&mut self, name: impl Into<String>, group: impl Into<String>) {
        self.roles.insert(Role {
            name: name.into(),
            group: group.into(),
        });
    }

    /// Whether a role with this name has been granted in any group.
    pub fn has_role(&self, name: &str) -> bool {
        self.roles.iter().any(|role| role.name == name)
    }

    /// All granted roles.
    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.roles.iter()
    }
}

/// Username and plaintext password awaiting authentication.
#[derive(Clone, Default)]
pub struct Credentials {
    username: String,
    password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Creates credentials from a username and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Replaces both fields.
    pub fn set(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.username = username.into();
        self.password = password.into();
    }

    /// Forgets both fields.
    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
    }

    /// The submitted username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The submitted plaintext password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Whether a username has been submitted.
    pub fn is_set(&self) -> bool {
        !self.username.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_and_logout() {
        let user = User {
            id: UserId::new(),
            login: "alice".to_string(),
            ..User::default()
        };
        let mut identity = Identity::default();
        assert!(!identity.is_logged_in());

        identity.login(&user);
        identity.add_role("admin", "Users");
        assert!(identity.is_logged_in());
        assert_eq!(identity.user_id(), Some(user.id));
        assert!(identity.has_role("admin"));

        identity.logout();
        assert!(!identity.is_logged_in());
        assert!(!identity.has_role("admin"));
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("alice", "hunter2");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_credentials_clear() {
        let mut creds = Credentials::new("alice", "p1");
        assert!(creds.is_set());
        creds.clear();
        assert!(!creds.is_set());
        assert_eq!(creds.password(), "");
    }
}
