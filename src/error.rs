//! # Error Types
//!
//! This module defines error types used throughout the etiqueta library.

use thiserror::Error;

/// Main error type for etiqueta operations
#[derive(Debug, Error)]
pub enum EtiquetaError {
    /// Persistence errors (blob read/write, data dir)
    #[error("Store error: {0}")]
    Store(String),

    /// Invalid label data or draft parameter
    #[error("Invalid label: {0}")]
    InvalidLabel(String),

    /// Rasterization error
    #[error("Render error: {0}")]
    Render(String),

    /// Export encoding error (JPEG, PNG, PDF)
    #[error("Export error: {0}")]
    Export(String),

    /// HTTP server error
    #[error("Server error: {0}")]
    Serve(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
