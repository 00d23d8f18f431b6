//! Auth handlers: login, logout, registration, me.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use bytes::Bytes;
use validator::Validate;

use photoalbum_entity::user::RegistrationForm;
use photoalbum_service::context::WorkflowContext;
use photoalbum_service::notification::NotificationBuffer;

use super::{WorkflowReply, workflow_reply};
use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, SessionResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{CurrentSession, SessionHeader};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    current: CurrentSession,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<WorkflowReply, ApiError> {
    let Json(req) = payload?;
    req.validate()?;

    let sink = NotificationBuffer::new();
    let mut guard = current.lock().await;
    let entry = &mut *guard;
    entry.session.credentials.set(req.username, req.password);

    let mut ctx = WorkflowContext::new(&mut entry.session, &mut entry.conversation, &sink);
    let outcome = state.authenticator.authenticate(&mut ctx).await;

    Ok(workflow_reply(&current, outcome.as_str(), &sink))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    current: CurrentSession,
) -> Result<WorkflowReply, ApiError> {
    let sink = NotificationBuffer::new();
    let mut guard = current.lock().await;
    let entry = &mut *guard;

    let mut ctx = WorkflowContext::new(&mut entry.session, &mut entry.conversation, &sink);
    let outcome = state.authenticator.logout(&mut ctx).await;

    Ok(workflow_reply(&current, outcome, &sink))
}

/// POST /api/auth/credentials/reset
pub async fn reset_credentials(
    State(state): State<AppState>,
    current: CurrentSession,
) -> Result<WorkflowReply, ApiError> {
    let sink = NotificationBuffer::new();
    let mut guard = current.lock().await;
    let entry = &mut *guard;

    let mut ctx = WorkflowContext::new(&mut entry.session, &mut entry.conversation, &sink);
    state.authenticator.reset_credentials(&mut ctx);

    Ok(workflow_reply(&current, "reset", &sink))
}

/// POST /api/auth/register/start
pub async fn start_registration(
    State(state): State<AppState>,
    current: CurrentSession,
) -> Result<WorkflowReply, ApiError> {
    let sink = NotificationBuffer::new();
    let mut guard = current.lock().await;
    let entry = &mut *guard;

    let mut ctx = WorkflowContext::new(&mut entry.session, &mut entry.conversation, &sink);
    state.authenticator.go_to_register(&mut ctx);

    Ok(workflow_reply(&current, "register", &sink))
}

/// POST /api/auth/register/avatar
///
/// The body is the raw image.
pub async fn upload_avatar(
    State(state): State<AppState>,
    current: CurrentSession,
    body: Bytes,
) -> Result<WorkflowReply, ApiError> {
    let sink = NotificationBuffer::new();
    let mut guard = current.lock().await;
    let entry = &mut *guard;

    let mut ctx = WorkflowContext::new(&mut entry.session, &mut entry.conversation, &sink);
    state.authenticator.stage_avatar(&mut ctx, body)?;

    Ok(workflow_reply(&current, "staged", &sink))
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    current: CurrentSession,
    payload: Result<Json<RegistrationForm>, JsonRejection>,
) -> Result<WorkflowReply, ApiError> {
    let Json(form) = payload?;
    form.validate()?;

    let sink = NotificationBuffer::new();
    let mut guard = current.lock().await;
    let entry = &mut *guard;

    let mut ctx = WorkflowContext::new(&mut entry.session, &mut entry.conversation, &sink);
    let outcome = state.authenticator.register(&mut ctx, form).await;

    Ok(workflow_reply(&current, outcome.as_str(), &sink))
}

/// GET /api/auth/me
pub async fn me(current: CurrentSession) -> (SessionHeader, Json<ApiResponse<SessionResponse>>) {
    let guard = current.lock().await;
    let session = &guard.session;
    let logged_in = session.identity.is_logged_in();

    let response = SessionResponse {
        logged_in,
        user: logged_in.then(|| UserResponse::from(&session.user)),
        roles: session
            .identity
            .roles()
            .map(|role| role.name.clone())
            .collect(),
        login_failed: guard.conversation.login_failed,
        conversation_started: guard.conversation.conversation_started,
    };

    (current.header(), Json(ApiResponse::ok(response)))
}
