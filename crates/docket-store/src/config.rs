//! Store configuration

use docket_domain::StoreError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_path() -> PathBuf {
    PathBuf::from("docket.db")
}

fn default_busy_timeout_ms() -> u64 {
    5_000
}

/// Configuration for opening a [`crate::SqliteStore`]
///
/// Loaded from TOML; every field has a default so an empty file is valid.
///
/// # Examples
///
/// ```
/// use docket_store::StoreConfig;
///
/// let config = StoreConfig::from_toml_str("path = \"office.db\"").unwrap();
/// assert_eq!(config.path.to_str(), Some("office.db"));
/// assert_eq!(config.busy_timeout_ms, 5000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Database file path; `:memory:` is accepted for ephemeral stores
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// How long a statement waits on a locked database before failing
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl StoreConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(raw: &str) -> Result<Self, StoreError> {
        toml::from_str(raw).map_err(|e| StoreError::InvalidData(format!("invalid config: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|e| {
            StoreError::InvalidData(format!(
                "could not read config {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&contents)
    }
}
