//! The authentication workflow.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info, warn};

use photoalbum_auth::credential::CredentialStore;
use photoalbum_auth::password::PasswordHasher;
use photoalbum_auth::policy::LoginPolicy;
use photoalbum_core::config::AuthConfig;
use photoalbum_core::error::AppError;
use photoalbum_core::events::{AuthEvent, NavTarget, NavigationEvent};
use photoalbum_core::result::AppResult;
use photoalbum_core::traits::session_tracker::SessionTracker;
use photoalbum_entity::user::{RegistrationForm, User};
use photoalbum_storage::avatar::AvatarStorage;

use super::outcome::{AuthFailure, ConversationOutcome, LoginOutcome, RegistrationOutcome};
use crate::context::WorkflowContext;

/// Orchestrates login, logout, and registration.
///
/// Holds only its collaborators. Per-user state travels in the
/// [`WorkflowContext`] of each call, so one instance serves every session.
#[derive(Debug, Clone)]
pub struct Authenticator {
    /// Where users are looked up and created.
    store: Arc<dyn CredentialStore>,
    /// Process-wide map of user to active session.
    tracker: Arc<dyn SessionTracker>,
    /// Where registration avatars go. Registrations with an avatar fail
    /// when this is absent.
    avatars: Option<Arc<dyn AvatarStorage>>,
    /// Decides whether a resolved user may log in.
    policy: Arc<dyn LoginPolicy>,
    /// Password hasher shared with the credential store.
    hasher: Arc<PasswordHasher>,
    /// Role granted on login.
    granted_role: String,
    /// Group of the granted role.
    granted_role_group: String,
    /// Token returned by logout.
    logout_outcome: String,
}

impl Authenticator {
    /// Creates a workflow without avatar storage.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        tracker: Arc<dyn SessionTracker>,
        policy: Arc<dyn LoginPolicy>,
        hasher: Arc<PasswordHasher>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            store,
            tracker,
            avatars: None,
            policy,
            hasher,
            granted_role: config.granted_role.clone(),
            granted_role_group: config.granted_role_group.clone(),
            logout_outcome: config.logout_outcome.clone(),
        }
    }

    /// Attaches avatar storage.
    pub fn with_avatar_storage(mut self, avatars: Arc<dyn AvatarStorage>) -> Self {
        self.avatars = Some(avatars);
        self
    }

    /// Logs the session in with the credentials it holds.
    ///
    /// Any store or hashing error counts as a failed login. A resolved
    /// user the login policy refuses is treated the same way.
    pub async fn authenticate(&self, ctx: &mut WorkflowContext<'_>) -> LoginOutcome {
        let username = ctx.session.credentials.username().to_string();

        let user = match self.resolve(&username, ctx.session.credentials.password()).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                info!(login = %username, "Login failed: unknown login or wrong password");
                return self.fail_login(ctx);
            }
            Err(e) => {
                warn!(login = %username, error = %e, "Login failed: credential store error");
                return self.fail_login(ctx);
            }
        };

        if !self.policy.permits(&user) {
            warn!(
                login = %username,
                user_id = %user.id,
                pre_defined = user.pre_defined,
                "Login refused by policy"
            );
            ctx.session.user = User::default();
            return self.fail_login(ctx);
        }

        match self.tracker.replace(user.id, ctx.session.id).await {
            Ok(Some(evicted)) => {
                info!(user_id = %user.id, evicted_session = %evicted, "Previous session superseded");
            }
            Ok(None) => {}
            Err(e) => {
                warn!(user_id = %user.id, error = %e, "Login failed: session tracker error");
                return self.fail_login(ctx);
            }
        }

        ctx.session.identity.login(&user);
        ctx.session
            .identity
            .add_role(&self.granted_role, &self.granted_role_group);

        ctx.emit(AuthEvent::Authenticated {
            user_id: user.id.into(),
            login: user.login.clone(),
        });
        info!(user_id = %user.id, session_id = %ctx.session.id, "Login successful");

        ctx.session.user = user;
        ctx.conversation.login_failed = false;
        LoginOutcome::Success
    }

    /// Logs the session out and returns the logout navigation token.
    ///
    /// Works for anonymous sessions too. The tracker entry is only removed
    /// while it still points at this session, so logging out a superseded
    /// session leaves the newer login alone.
    pub async fn logout(&self, ctx: &mut WorkflowContext<'_>) -> String {
        if let Some(user_id) = ctx.session.identity.user_id() {
            match self.tracker.remove_if_current(user_id, ctx.session.id).await {
                Ok(true) => {}
                Ok(false) => {
                    debug!(user_id = %user_id, "Logout of superseded session");
                }
                Err(e) => {
                    warn!(user_id = %user_id, error = %e, "Failed to untrack user on logout");
                }
            }
            info!(user_id = %user_id, session_id = %ctx.session.id, "Logged out");
        }

        ctx.session.identity.logout();
        ctx.session.credentials.clear();
        ctx.session.user = User::default();
        ctx.session.social.clear();
        ctx.conversation.conversation_started = false;

        self.logout_outcome.clone()
    }

    /// Forgets the username and password held by the session.
    pub fn reset_credentials(&self, ctx: &mut WorkflowContext<'_>) {
        ctx.session.credentials.clear();
    }

    /// Registers a new user and logs them in.
    ///
    /// Checks run in order and stop at the first failure: password
    /// confirmation, login uniqueness, email uniqueness. Nothing is created
    /// unless the pending avatar (if any) was stored first, and a stored
    /// avatar is removed again when the store rejects the user.
    pub async fn register(
        &self,
        ctx: &mut WorkflowContext<'_>,
        form: RegistrationForm,
    ) -> RegistrationOutcome {
        if !form.passwords_match() {
            return self.reject_field(ctx, AuthFailure::PasswordMismatch);
        }

        match self.store.exists_by_login(&form.login).await {
            Ok(false) => {}
            Ok(true) => return self.reject_field(ctx, AuthFailure::DuplicateLogin),
            Err(e) => return self.reject_backend(ctx, &form.login, e),
        }

        match self.store.exists_by_email(&form.email).await {
            Ok(false) => {}
            Ok(true) => return self.reject_field(ctx, AuthFailure::DuplicateEmail),
            Err(e) => return self.reject_backend(ctx, &form.login, e),
        }

        let password_hash = match self.hasher.hash_password(&form.password) {
            Ok(hash) => hash,
            Err(e) => return self.reject_backend(ctx, &form.login, e),
        };
        let password = form.password.clone();
        let mut user = form.into_user(password_hash);

        if let Some(avatar) = ctx.conversation.pending_avatar.clone() {
            user.has_avatar = true;
            if let Err(e) = self.save_avatar(avatar, &user).await {
                warn!(login = %user.login, error = %e, "Registration aborted: avatar not stored");
                let failure = AuthFailure::AvatarStorageFailure;
                ctx.emit(AuthEvent::Error {
                    message: failure.to_string(),
                });
                return RegistrationOutcome::Rejected(failure);
            }
        }

        let user = match self.store.create(user.clone()).await {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "Registration aborted: credential store rejected user");
                if user.has_avatar {
                    self.discard_avatar(&user).await;
                }
                let failure = AuthFailure::RegistrationBackendFailure;
                ctx.emit(AuthEvent::Error {
                    message: failure.to_string(),
                });
                return RegistrationOutcome::Rejected(failure);
            }
        };
        ctx.conversation.pending_avatar = None;
        info!(user_id = %user.id, login = %user.login, "User registered");

        ctx.session.credentials.set(&user.login, password);
        if self.authenticate(ctx).await.is_success() {
            return RegistrationOutcome::Registered { auto_login: true };
        }

        warn!(user_id = %user.id, "Automatic login after registration failed");
        ctx.emit(AuthEvent::Error {
            message: AuthFailure::AutoLoginFailure.to_string(),
        });
        RegistrationOutcome::Registered { auto_login: false }
    }

    /// Resets the conversation for a fresh registration form.
    pub fn go_to_register(&self, ctx: &mut WorkflowContext<'_>) {
        ctx.session.user = User::default();
        ctx.conversation.pending_avatar = None;
        ctx.conversation.login_failed = false;
        ctx.emit(AuthEvent::StartRegistration);
    }

    /// Shows the anonymous landing view once per conversation.
    pub fn start_conversation(&self, ctx: &mut WorkflowContext<'_>) -> ConversationOutcome {
        if ctx.conversation.conversation_started {
            debug!(session_id = %ctx.session.id, "Conversation already started");
            return ConversationOutcome::AlreadyStarted;
        }

        ctx.emit(NavigationEvent::UpdateMainArea {
            target: NavTarget::Anonymous,
        });
        ctx.conversation.conversation_started = true;
        ConversationOutcome::Started
    }

    /// Keeps an uploaded avatar until the registration is submitted.
    pub fn stage_avatar(&self, ctx: &mut WorkflowContext<'_>, data: Bytes) -> AppResult<()> {
        if data.is_empty() {
            return Err(AppError::validation("Empty avatar upload"));
        }
        debug!(session_id = %ctx.session.id, bytes = data.len(), "Staged avatar");
        ctx.conversation.pending_avatar = Some(data);
        Ok(())
    }

    async fn resolve(&self, login: &str, password: &str) -> AppResult<Option<User>> {
        let hash = self.hasher.hash_password(password)?;
        self.store.resolve(login, &hash).await
    }

    async fn save_avatar(&self, data: Bytes, user: &User) -> AppResult<String> {
        let avatars = self
            .avatars
            .as_ref()
            .ok_or_else(|| AppError::service_unavailable("Avatar storage is not configured"))?;
        avatars.save(data, user).await
    }

    async fn discard_avatar(&self, user: &User) {
        if let Some(avatars) = &self.avatars {
            if let Err(e) = avatars.delete(user).await {
                warn!(user_id = %user.id, error = %e, "Failed to remove avatar of rejected registration");
            }
        }
    }

    fn fail_login(&self, ctx: &mut WorkflowContext<'_>) -> LoginOutcome {
        let failure = AuthFailure::InvalidCredentials;
        ctx.conversation.login_failed = true;
        ctx.emit(AuthEvent::LoginFailed {
            message: failure.to_string(),
        });
        LoginOutcome::Failure(failure)
    }

    fn reject_field(
        &self,
        ctx: &mut WorkflowContext<'_>,
        failure: AuthFailure,
    ) -> RegistrationOutcome {
        debug!(failure = ?failure, "Registration rejected");
        ctx.emit(AuthEvent::ValidationFailed {
            field: failure.field().unwrap_or_default().to_string(),
            message: failure.to_string(),
        });
        RegistrationOutcome::Rejected(failure)
    }

    fn reject_backend(
        &self,
        ctx: &mut WorkflowContext<'_>,
        login: &str,
        error: AppError,
    ) -> RegistrationOutcome {
        warn!(login = %login, error = %error, "Registration aborted: credential store error");
        let failure = AuthFailure::RegistrationBackendFailure;
        ctx.emit(AuthEvent::Error {
            message: failure.to_string(),
        });
        RegistrationOutcome::Rejected(failure)
    }
}
