//! Login gate and registration handlers.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use super::super::state::AppState;
use super::{ErrorResponse, api_error, require_user};
use crate::auth;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub username: String,
}

/// POST /api/login - check the demo credentials and persist the session.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ErrorResponse> {
    let session = auth::login(&req.username, &req.password)
        .map_err(|message| api_error(StatusCode::UNAUTHORIZED, message))?;

    state
        .users
        .save(&session)
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    tracing::info!(username = %session.username, "logged in");
    Ok(Json(SessionResponse { username: session.username }))
}

/// POST /api/logout - drop the persisted session.
pub async fn logout(State(state): State<Arc<AppState>>) -> Result<StatusCode, ErrorResponse> {
    state
        .users
        .clear()
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/session - who is logged in, if anyone.
pub async fn session(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SessionResponse>, ErrorResponse> {
    let user = require_user(&state)?;
    Ok(Json(SessionResponse { username: user.username }))
}

/// POST /api/register - validate the form; no account is ever created.
pub async fn register(
    Json(form): Json<auth::RegistrationForm>,
) -> Result<StatusCode, ErrorResponse> {
    auth::validate_registration(&form)
        .map_err(|message| api_error(StatusCode::BAD_REQUEST, message))?;
    Ok(StatusCode::OK)
}
