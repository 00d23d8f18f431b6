//! Authentication workflow configuration.

use serde::{Deserialize, Serialize};

/// Authentication and registration configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Role granted to every successfully authenticated user.
    #[serde(default = "default_granted_role")]
    pub granted_role: String,
    /// Group the granted role belongs to.
    #[serde(default = "default_granted_role_group")]
    pub granted_role_group: String,
    /// Navigation outcome returned by logout.
    #[serde(default = "default_logout_outcome")]
    pub logout_outcome: String,
    /// Salt mixed into every password hash. At least 8 bytes.
    #[serde(default = "default_password_salt")]
    pub password_salt: String,
    /// Refuse logins of pre-defined demo accounts.
    ///
    /// Enabled by the `production` overlay so that shared demo accounts
    /// cannot be used to tamper with a public deployment.
    #[serde(default)]
    pub restrict_predefined_users: bool,
    /// Demo accounts seeded into the in-memory credential store.
    #[serde(default)]
    pub demo_users: Vec<DemoUserConfig>,
}

/// A seeded demo account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoUserConfig {
    /// Login name.
    pub login: String,
    /// Plaintext password, hashed at startup.
    pub password: String,
    /// Email address.
    pub email: String,
    /// Whether the account counts as pre-defined.
    #[serde(default = "default_true")]
    pub pre_defined: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            granted_role: default_granted_role(),
            granted_role_group: default_granted_role_group(),
            logout_outcome: default_logout_outcome(),
            password_salt: default_password_salt(),
            restrict_predefined_users: false,
            demo_users: Vec::new(),
        }
    }
}

fn default_granted_role() -> String {
    "admin".to_string()
}

fn default_granted_role_group() -> String {
    "Users".to_string()
}

fn default_logout_outcome() -> String {
    "loggedOut".to_string()
}

fn default_password_salt() -> String {
    "photoalbum-CHANGE-ME".to_string()
}

fn default_true() -> bool {
    true
}
