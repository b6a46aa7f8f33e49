//! Server state and configuration.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::RwLock;

use crate::store::{JsonFileStore, LabelStore, MemoryStore, UserStore};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g. "0.0.0.0:4775")
    pub listen_addr: String,
    /// Directory holding the persisted JSON blobs
    pub data_dir: PathBuf,
    /// Keep everything in memory; nothing touches the disk
    pub ephemeral: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:4775".to_string(),
            data_dir: PathBuf::from("data"),
            ephemeral: false,
        }
    }
}

/// Application state shared across handlers.
///
/// The label store sits behind an `RwLock` so that save and delete can
/// run their load, modify, save sequence without interleaving.
pub struct AppState {
    pub labels: RwLock<Box<dyn LabelStore>>,
    pub users: UserStore,
    /// Unix timestamp of server boot for cache busting.
    pub boot_time: u64,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        let (labels, users): (Box<dyn LabelStore>, UserStore) = if config.ephemeral {
            (Box::new(MemoryStore::new()), UserStore::memory())
        } else {
            (
                Box::new(JsonFileStore::new(&config.data_dir)),
                UserStore::file(&config.data_dir),
            )
        };

        let boot_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        Self { labels: RwLock::new(labels), users, boot_time }
    }

    /// Memory-backed state for tests and `--ephemeral` runs.
    pub fn ephemeral() -> Self {
        Self::new(&ServerConfig { ephemeral: true, ..ServerConfig::default() })
    }
}
