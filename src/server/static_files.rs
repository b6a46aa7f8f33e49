//! Static file serving for the embedded editor.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};
use include_dir::{Dir, include_dir};

use super::state::AppState;

/// Embedded editor files, compiled into the binary.
static WEB_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/web");

/// Serve index.html with a cache-busting parameter on its asset links.
pub async fn index_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match WEB_DIR.get_file("index.html") {
        Some(file) => {
            let contents = String::from_utf8_lossy(file.contents());
            let cache_bust = format!("?v={}", state.boot_time);
            let busted = contents
                .replace(".js\"", &format!(".js{cache_bust}\""))
                .replace(".css\"", &format!(".css{cache_bust}\""));
            Html(busted).into_response()
        }
        None => (StatusCode::NOT_FOUND, "Editor assets missing").into_response(),
    }
}

/// Serve static assets from the assets directory.
pub async fn asset_handler(Path(path): Path<String>) -> impl IntoResponse {
    // strip query params if present
    let clean_path = path.split('?').next().unwrap_or(&path);
    let file_path = format!("assets/{clean_path}");

    match WEB_DIR.get_file(&file_path) {
        Some(file) => {
            let mime = mime_guess::from_path(clean_path)
                .first_or_octet_stream()
                .to_string();
            // long cache lifetime works because links carry the boot stamp
            (
                [
                    (header::CONTENT_TYPE, mime),
                    (header::CACHE_CONTROL, "public, max-age=31536000".to_string()),
                ],
                file.contents().to_vec(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "Asset not found").into_response(),
    }
}
