//! File download handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use super::super::state::AppState;
use super::{ErrorResponse, api_error, require_user};
use crate::export::{self, ExportFormat};
use crate::label::LabelDraft;

/// POST /api/export/:format - render the posted draft at export scale and
/// return it as a file download.
pub async fn export(
    State(state): State<Arc<AppState>>,
    Path(format): Path<String>,
    Json(draft): Json<LabelDraft>,
) -> Result<impl IntoResponse, ErrorResponse> {
    require_user(&state)?;

    let format: ExportFormat = format
        .parse()
        .map_err(|message: String| api_error(StatusCode::BAD_REQUEST, message))?;

    let view = draft.view();
    let file = tokio::task::spawn_blocking(move || export::export(&view, format))
        .await
        .map_err(|e| {
            api_error(StatusCode::INTERNAL_SERVER_ERROR, format!("export task failed: {e}"))
        })?
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    tracing::info!(format = %format, bytes = file.bytes.len(), "label exported");

    let disposition = format!("attachment; filename=\"{}\"", file.filename);
    Ok((
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.bytes,
    ))
}
