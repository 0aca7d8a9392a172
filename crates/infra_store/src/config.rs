//! Store configuration
//!
//! Slots are files named `<slot>.json` inside a single data directory.

use std::path::{Path, PathBuf};
use tracing::info;

use core_kernel::StoreError;

/// Configuration for file-backed collection slots
///
/// # Example
///
/// ```rust
/// use infra_store::StoreConfig;
///
/// let config = StoreConfig::new("/var/lib/claims").extension("json");
/// assert!(config.slot_path("claims").ends_with("claims.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding one file per slot
    pub data_dir: PathBuf,
    /// File extension used for slot files
    pub extension: String,
}

impl StoreConfig {
    /// Creates a configuration rooted at `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            extension: "json".to_string(),
        }
    }

    /// Sets the slot file extension (default: `json`)
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Returns the file backing the named slot
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.data_dir.join(format!("{}.{}", slot, self.extension))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new("data")
    }
}

/// Creates the data directory if it does not exist yet
///
/// # Errors
///
/// Returns `StoreError::Io` if the directory cannot be created
pub async fn prepare_data_dir(config: &StoreConfig) -> Result<(), StoreError> {
    tokio::fs::create_dir_all(&config.data_dir)
        .await
        .map_err(|e| StoreError::io(config.data_dir.display().to_string(), e))?;

    info!(data_dir = %config.data_dir.display(), "Data directory ready");
    Ok(())
}
