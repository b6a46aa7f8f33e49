//! File-backed label store: one pretty-printed JSON array per data dir.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::EtiquetaError;
use crate::label::NutritionLabel;

use super::LabelStore;

/// Stores the whole collection in `<dir>/nutrition-facts.json`.
///
/// Saves write to a sibling temp file and rename over the blob, so a crash
/// mid-save leaves the previous collection intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub const FILE_NAME: &'static str = "nutrition-facts.json";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { path: dir.into().join(Self::FILE_NAME) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LabelStore for JsonFileStore {
    fn load(&self) -> Result<Vec<NutritionLabel>, EtiquetaError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw).unwrap_or_default())
    }

    fn save(&self, labels: &[NutritionLabel]) -> Result<(), EtiquetaError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(labels)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
