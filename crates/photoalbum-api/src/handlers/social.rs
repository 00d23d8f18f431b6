//! Social profile handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde_json::{Map, Value};

use crate::dto::request::AlbumIdsRequest;
use crate::dto::response::{ApiResponse, SocialProfileResponse};
use crate::error::ApiError;
use crate::extractors::{CurrentSession, SessionHeader};

type ProfileReply = (SessionHeader, Json<ApiResponse<SocialProfileResponse>>);

/// GET /api/social/profile
pub async fn get_profile(current: CurrentSession) -> ProfileReply {
    let guard = current.lock().await;
    let response = SocialProfileResponse::from(&guard.session.social);
    (current.header(), Json(ApiResponse::ok(response)))
}

/// PUT /api/social/profile
pub async fn put_profile(
    current: CurrentSession,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<ProfileReply, ApiError> {
    let Json(info) = payload?;

    let mut guard = current.lock().await;
    guard.session.social.set_user_info(info);
    tracing::debug!(session_id = %current.id, "Imported social profile");

    let response = SocialProfileResponse::from(&guard.session.social);
    Ok((current.header(), Json(ApiResponse::ok(response))))
}

/// PUT /api/social/albums
pub async fn put_albums(
    current: CurrentSession,
    payload: Result<Json<AlbumIdsRequest>, JsonRejection>,
) -> Result<ProfileReply, ApiError> {
    let Json(req) = payload?;

    let mut guard = current.lock().await;
    guard.session.social.set_album_ids(&req.ids);

    let response = SocialProfileResponse::from(&guard.session.social);
    Ok((current.header(), Json(ApiResponse::ok(response))))
}
