//! # Persistence
//!
//! Saved labels live in a single JSON blob: one array under one well-known
//! key, the file-system rendition of the browser-storage layout this tool's
//! data predates. [`LabelStore`] is the seam the session and dashboard work
//! against; [`JsonFileStore`] backs normal runs and [`MemoryStore`] backs
//! tests and ephemeral serving. The logged-in user is a second, separate
//! blob handled by [`user::UserStore`].
//!
//! Load never fails on bad data: a missing or malformed blob is an empty
//! collection. The next save overwrites it with well-formed JSON.

pub mod file;
pub mod user;

use std::sync::Mutex;

use crate::error::EtiquetaError;
use crate::label::NutritionLabel;

pub use file::JsonFileStore;
pub use user::{UserSession, UserStore};

/// Where the saved-label collection lives.
pub trait LabelStore: Send + Sync {
    /// The full saved collection. Missing or malformed data loads as an
    /// empty collection; only real I/O failures error.
    fn load(&self) -> Result<Vec<NutritionLabel>, EtiquetaError>;

    /// Persist the full collection, replacing whatever was stored.
    fn save(&self, labels: &[NutritionLabel]) -> Result<(), EtiquetaError>;
}

/// In-memory store for tests and `--ephemeral` serving.
///
/// Holds the serialized blob rather than the typed collection so it
/// exercises the same JSON path as the file store, including recovery
/// from malformed data.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with a raw blob, valid or not.
    pub fn with_blob(raw: impl Into<String>) -> Self {
        Self { blob: Mutex::new(Some(raw.into())) }
    }
}

impl LabelStore for MemoryStore {
    fn load(&self) -> Result<Vec<NutritionLabel>, EtiquetaError> {
        let blob = self
            .blob
            .lock()
            .map_err(|_| EtiquetaError::Store("label store lock poisoned".into()))?;
        Ok(match blob.as_deref() {
            Some(raw) => serde_json::from_str(raw).unwrap_or_default(),
            None => Vec::new(),
        })
    }

    fn save(&self, labels: &[NutritionLabel]) -> Result<(), EtiquetaError> {
        let json = serde_json::to_string(labels)?;
        let mut blob = self
            .blob
            .lock()
            .map_err(|_| EtiquetaError::Store("label store lock poisoned".into()))?;
        *blob = Some(json);
        Ok(())
    }
}
