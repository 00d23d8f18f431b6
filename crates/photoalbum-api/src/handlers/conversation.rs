//! Conversation handlers.

use axum::extract::State;

use photoalbum_service::context::WorkflowContext;
use photoalbum_service::notification::NotificationBuffer;

use super::{WorkflowReply, workflow_reply};
use crate::error::ApiError;
use crate::extractors::CurrentSession;
use crate::state::AppState;

/// POST /api/conversation/start
pub async fn start(
    State(state): State<AppState>,
    current: CurrentSession,
) -> Result<WorkflowReply, ApiError> {
    let sink = NotificationBuffer::new();
    let mut guard = current.lock().await;
    let entry = &mut *guard;

    let mut ctx = WorkflowContext::new(&mut entry.session, &mut entry.conversation, &sink);
    let outcome = state.authenticator.start_conversation(&mut ctx);

    Ok(workflow_reply(&current, outcome.as_str(), &sink))
}
