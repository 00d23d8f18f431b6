//! Login policies applied after credentials have been verified.

use photoalbum_core::config::AuthConfig;
use photoalbum_entity::user::User;

/// Decides whether a user whose credentials checked out may log in.
pub trait LoginPolicy: Send + Sync + std::fmt::Debug {
    /// Returns `true` to let the login proceed.
    fn permits(&self, user: &User) -> bool;
}

/// Refuses pre-defined demo accounts on restricted deployments.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreDefinedUserPolicy {
    restricted: bool,
}

impl PreDefinedUserPolicy {
    /// Creates the policy.
    pub fn new(restricted: bool) -> Self {
        Self { restricted }
    }

    /// Creates the policy from auth configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.restrict_predefined_users)
    }
}

impl LoginPolicy for PreDefinedUserPolicy {
    fn permits(&self, user: &User) -> bool {
        !(self.restricted && user.pre_defined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(pre_defined: bool) -> User {
        User {
            login: "demo".to_string(),
            pre_defined,
            ..User::default()
        }
    }

    #[test]
    fn test_unrestricted_permits_everyone() {
        let policy = PreDefinedUserPolicy::new(false);
        assert!(policy.permits(&user(true)));
        assert!(policy.permits(&user(false)));
    }

    #[test]
    fn test_restricted_blocks_predefined_only() {
        let policy = PreDefinedUserPolicy::new(true);
        assert!(!policy.permits(&user(true)));
        assert!(policy.permits(&user(false)));
    }
}
