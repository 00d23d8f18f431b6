//! Registration form submitted by a prospective user.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use photoalbum_core::types::UserId;

use super::model::User;

/// Candidate user as entered on the registration page.
///
/// Carries the plaintext password and its confirmation. Neither is ever
/// stored: [`RegistrationForm::into_user`] takes the hash instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegistrationForm {
    /// Desired login name.
    #[validate(length(min = 1, max = 64, message = "Login must be 1-64 characters"))]
    pub login: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub second_name: Option<String>,
    /// Plaintext password.
    #[serde(skip_serializing)]
    pub password: String,
    /// Plaintext password, typed a second time.
    #[serde(skip_serializing)]
    pub confirm_password: String,
    /// Accepted from the form but never honored.
    #[serde(default)]
    pub pre_defined: bool,
}

impl RegistrationForm {
    /// Whether both password fields match.
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    /// Build the user record to store.
    ///
    /// Always produces a non-pre-defined account regardless of what the
    /// form claimed.
    pub fn into_user(self, password_hash: String) -> User {
        User {
            id: UserId::new(),
            login: self.login,
            email: self.email,
            first_name: self.first_name,
            second_name: self.second_name,
            password_hash,
            pre_defined: false,
            has_avatar: false,
            created_at: Some(Utc::now()),
        }
    }
}
