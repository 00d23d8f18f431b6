//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use photoalbum_core::types::UserId;

/// A registered user of the photo album.
///
/// `User::default()` is the empty user held by anonymous sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier. Nil until the user is stored.
    pub id: UserId,
    /// Unique login name.
    pub login: String,
    /// Email address, unique across users.
    pub email: String,
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub second_name: Option<String>,
    /// One-way hash of the password. Never the plaintext.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Seeded demo account.
    #[serde(default)]
    pub pre_defined: bool,
    /// Whether an avatar image has been stored for this user.
    #[serde(default)]
    pub has_avatar: bool,
    /// When the user registered.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Whether this is the empty placeholder user.
    pub fn is_anonymous(&self) -> bool {
        self.id.is_nil() && self.login.is_empty()
    }

    /// Name shown in page headers: the full name if known, else the login.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.second_name) {
            (Some(first), Some(second)) => format!("{first} {second}"),
            (Some(first), None) => first.clone(),
            _ => self.login.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user_is_anonymous() {
        let user = User::default();
        assert!(user.is_anonymous());
        assert!(!user.pre_defined);
        assert!(!user.has_avatar);
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            login: "alice".to_string(),
            password_hash: "secret-hash".to_string(),
            ..User::default()
        };
        let json = serde_json::to_string(&user).expect("serialize");
        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("password_hash"));
    }

    #[test]
    fn test_display_name() {
        let mut user = User {
            login: "alice".to_string(),
            ..User::default()
        };
        assert_eq!(user.display_name(), "alice");
        user.first_name = Some("Alice".to_string());
        user.second_name = Some("Liddell".to_string());
        assert_eq!(user.display_name(), "Alice Liddell");
    }
}
