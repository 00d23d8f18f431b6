//! HTTP request handlers.

pub mod auth;
pub mod conversation;
pub mod health;
pub mod social;

use axum::Json;

use photoalbum_service::notification::NotificationBuffer;

use crate::dto::response::{ApiResponse, WorkflowResponse};
use crate::extractors::{CurrentSession, SessionHeader};

/// Response of every workflow endpoint.
pub type WorkflowReply = (SessionHeader, Json<ApiResponse<WorkflowResponse>>);

/// Packs an outcome and the drained notifications into a reply.
pub(crate) fn workflow_reply(
    session: &CurrentSession,
    outcome: impl Into<String>,
    sink: &NotificationBuffer,
) -> WorkflowReply {
    (
        session.header(),
        Json(ApiResponse::ok(WorkflowResponse::new(outcome, sink.drain()))),
    )
}
