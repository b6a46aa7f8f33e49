//! The logged-in user blob, separate from the label collection.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::EtiquetaError;

/// What the login gate persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub username: String,
    #[serde(rename = "isLoggedIn")]
    pub logged_in: bool,
}

impl UserSession {
    pub fn logged_in(username: impl Into<String>) -> Self {
        Self { username: username.into(), logged_in: true }
    }
}

/// Reads and writes the `user.json` blob. A missing or malformed blob means
/// nobody is logged in. The memory backing mirrors the ephemeral label store.
#[derive(Debug)]
pub struct UserStore {
    backing: Backing,
}

#[derive(Debug)]
enum Backing {
    File(PathBuf),
    Memory(Mutex<Option<UserSession>>),
}

impl UserStore {
    pub const FILE_NAME: &'static str = "user.json";

    pub fn file(dir: impl Into<PathBuf>) -> Self {
        Self { backing: Backing::File(dir.into().join(Self::FILE_NAME)) }
    }

    pub fn memory() -> Self {
        Self { backing: Backing::Memory(Mutex::new(None)) }
    }

    /// The current session, if someone is logged in.
    pub fn load(&self) -> Option<UserSession> {
        match &self.backing {
            Backing::File(path) => {
                let raw = fs::read_to_string(path).ok()?;
                serde_json::from_str(&raw).ok()
            }
            Backing::Memory(slot) => slot.lock().ok()?.clone(),
        }
    }

    pub fn save(&self, user: &UserSession) -> Result<(), EtiquetaError> {
        match &self.backing {
            Backing::File(path) => {
                if let Some(dir) = path.parent() {
                    fs::create_dir_all(dir)?;
                }
                fs::write(path, serde_json::to_string_pretty(user)?)?;
                Ok(())
            }
            Backing::Memory(slot) => {
                let mut slot = slot
                    .lock()
                    .map_err(|_| EtiquetaError::Store("user store lock poisoned".into()))?;
                *slot = Some(user.clone());
                Ok(())
            }
        }
    }

    pub fn clear(&self) -> Result<(), EtiquetaError> {
        match &self.backing {
            Backing::File(path) => match fs::remove_file(path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            },
            Backing::Memory(slot) => {
                let mut slot = slot
                    .lock()
                    .map_err(|_| EtiquetaError::Store("user store lock poisoned".into()))?;
                *slot = None;
                Ok(())
            }
        }
    }
}
