//! `CurrentSession` extractor: resolves the browser session named by the
//! session header, creating one when the header is missing or unknown.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderName, HeaderValue};
use axum::response::{IntoResponseParts, ResponseParts};
use tokio::sync::MutexGuard;
use tracing::info;

use photoalbum_core::traits::notification::NullSink;
use photoalbum_core::types::SessionId;
use photoalbum_service::context::WorkflowContext;

use crate::error::ApiError;
use crate::session::{SessionEntry, SharedSession};
use crate::state::AppState;

/// The session a request belongs to.
#[derive(Debug, Clone)]
pub struct CurrentSession {
    /// Session id, echoed back in the response.
    pub id: SessionId,
    /// Whether the session was created by this request.
    pub created: bool,
    entry: SharedSession,
    header: HeaderName,
}

impl CurrentSession {
    /// Locks the session for the rest of the request.
    pub async fn lock(&self) -> MutexGuard<'_, SessionEntry> {
        self.entry.lock().await
    }

    /// Response header carrying the session id.
    pub fn header(&self) -> SessionHeader {
        SessionHeader {
            name: self.header.clone(),
            id: self.id,
        }
    }
}

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let requested = parts
            .headers
            .get(&state.session_header)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<SessionId>().ok());

        let (id, entry, created) = state.sessions.get_or_create(requested)?;

        {
            let mut guard = entry.lock().await;
            guard.session.touch();

            // A newer login of the same user elsewhere evicts this one.
            if let Some(user_id) = guard.session.identity.user_id() {
                if !state.tracker.is_current(user_id, id).await? {
                    info!(user_id = %user_id, session_id = %id, "Session superseded by a newer login");
                    let SessionEntry {
                        session,
                        conversation,
                    } = &mut *guard;
                    let mut ctx = WorkflowContext::new(session, conversation, &NullSink);
                    state.authenticator.logout(&mut ctx).await;
                }
            }
        }

        Ok(Self {
            id,
            created,
            entry,
            header: state.session_header.clone(),
        })
    }
}

/// Response part that sets the session header.
#[derive(Debug, Clone)]
pub struct SessionHeader {
    name: HeaderName,
    id: SessionId,
}

impl IntoResponseParts for SessionHeader {
    type Error = std::convert::Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if let Ok(value) = HeaderValue::from_str(&self.id.to_string()) {
            res.headers_mut().insert(self.name, value);
        }
        Ok(res)
    }
}
