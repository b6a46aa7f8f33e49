//! # HTTP Server for the Label Editor
//!
//! Serves the embedded web editor and the JSON API behind it: the mock
//! login gate, saved label CRUD, live preview rendering, and file export.
//!
//! ## Usage
//!
//! ```bash
//! etiqueta serve --listen 0.0.0.0:4775 --data-dir ./data
//! ```
//!
//! Then open http://localhost:4775 in a browser to compose labels.

mod handlers;
mod state;
mod static_files;

pub use state::{AppState, ServerConfig};

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::error::EtiquetaError;

/// Start the HTTP server.
pub async fn serve(config: ServerConfig) -> Result<(), EtiquetaError> {
    let app_state = Arc::new(AppState::new(&config));
    let app = router(app_state);

    tracing::info!(listen = %config.listen_addr, "label editor starting");
    if config.ephemeral {
        tracing::info!("ephemeral mode: labels are kept in memory only");
    } else {
        tracing::info!(data_dir = %config.data_dir.display(), "persisting to disk");
    }
    tracing::info!("open http://{}/ in a browser to compose labels", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| EtiquetaError::Serve(format!("failed to bind {}: {e}", config.listen_addr)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| EtiquetaError::Serve(format!("server error: {e}")))?;

    Ok(())
}

/// Build the full router. Separate from [`serve`] so tests can drive it.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // embedded editor
        .route("/", get(static_files::index_handler))
        .route("/assets/*path", get(static_files::asset_handler))
        // login gate
        .route("/api/login", post(handlers::auth::login))
        .route("/api/logout", post(handlers::auth::logout))
        .route("/api/session", get(handlers::auth::session))
        .route("/api/register", post(handlers::auth::register))
        // saved labels
        .route("/api/labels", get(handlers::labels::list).post(handlers::labels::save))
        .route(
            "/api/labels/:id",
            get(handlers::labels::show).delete(handlers::labels::remove),
        )
        // rendering
        .route("/api/preview", post(handlers::preview::preview))
        .route("/api/export/:format", post(handlers::export::export))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
