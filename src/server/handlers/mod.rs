//! HTTP handlers for the label editor API.

pub mod auth;
pub mod export;
pub mod labels;
pub mod preview;

use axum::{Json, http::StatusCode};
use serde::Serialize;

use super::state::AppState;
use crate::store::UserSession;

/// JSON error body, `{"error": "..."}` on the wire.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

pub(super) type ErrorResponse = (StatusCode, Json<ApiError>);

pub(super) fn api_error(status: StatusCode, message: impl Into<String>) -> ErrorResponse {
    (status, Json(ApiError { error: message.into() }))
}

/// Label, preview, and export routes all require a logged in session.
pub(super) fn require_user(state: &AppState) -> Result<UserSession, ErrorResponse> {
    match state.users.load() {
        Some(user) if user.logged_in => Ok(user),
        _ => Err(api_error(StatusCode::UNAUTHORIZED, "Not logged in")),
    }
}
