//! Saved label CRUD handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

use super::super::state::AppState;
use super::{ErrorResponse, api_error, require_user};
use crate::dashboard::Dashboard;
use crate::label::{LabelDraft, LabelSummary, NutritionLabel};
use crate::session::LabelSession;

/// GET /api/labels - dashboard summaries, newest first.
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LabelSummary>>, ErrorResponse> {
    require_user(&state)?;

    let store = state.labels.read().await;
    let dashboard = Dashboard::new(store.as_ref());
    let summaries = dashboard
        .summaries()
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(summaries))
}

/// GET /api/labels/:id - one full stored record.
pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<NutritionLabel>, ErrorResponse> {
    require_user(&state)?;

    let store = state.labels.read().await;
    let labels = store
        .load()
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    labels
        .into_iter()
        .find(|label| label.id == id)
        .map(Json)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "No label with that id"))
}

/// POST /api/labels - save a draft; upsert by id, insert when the id is
/// missing or new. Returns the stored record.
pub async fn save(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<LabelDraft>,
) -> Result<Json<NutritionLabel>, ErrorResponse> {
    require_user(&state)?;

    let store = state.labels.write().await;
    let mut session = LabelSession::from_draft(draft);
    let saved = session
        .save(store.as_ref(), Utc::now())
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    tracing::info!(id = %saved.id, title = %saved.product_title, "label saved");
    Ok(Json(saved))
}

/// DELETE /api/labels/:id - remove one record. The two-step confirmation
/// lives in the editor; by the time this runs the user already confirmed.
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ErrorResponse> {
    require_user(&state)?;

    let store = state.labels.write().await;
    let mut dashboard = Dashboard::new(store.as_ref());
    dashboard.stage_delete(id);
    let removed = dashboard
        .confirm_delete()
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    if removed {
        tracing::info!(%id, "label deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(api_error(StatusCode::NOT_FOUND, "No label with that id"))
    }
}
