//! Live preview rendering.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use super::super::state::AppState;
use super::{ErrorResponse, api_error, require_user};
use crate::label::LabelDraft;
use crate::render;

/// POST /api/preview - render the posted draft as a PNG at preview scale.
///
/// Rasterization is CPU work, so it runs on a blocking thread.
pub async fn preview(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<LabelDraft>,
) -> Result<impl IntoResponse, ErrorResponse> {
    require_user(&state)?;

    let view = draft.view();
    let png_bytes = tokio::task::spawn_blocking(move || render::render_preview_png(&view))
        .await
        .map_err(|e| {
            api_error(StatusCode::INTERNAL_SERVER_ERROR, format!("render task failed: {e}"))
        })?
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png_bytes))
}
