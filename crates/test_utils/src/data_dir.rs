//! Temporary data directories
//!
//! Each [`TestDataDir`] owns a fresh directory that is removed when the value
//! is dropped, plus helpers to inspect or corrupt slot files directly.

use std::path::Path;
use tempfile::TempDir;

use infra_store::StoreConfig;

/// A throwaway data directory for file-backed stores
pub struct TestDataDir {
    dir: TempDir,
    config: StoreConfig,
}

impl TestDataDir {
    /// Creates an empty data directory
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temporary data directory");
        let config = StoreConfig::new(dir.path());
        Self { dir, config }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the raw text of a slot file, or `None` if it does not exist
    pub fn read_slot(&self, slot: &str) -> Option<String> {
        std::fs::read_to_string(self.config.slot_path(slot)).ok()
    }

    /// Overwrites a slot file with the given text
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written
    pub fn write_slot(&self, slot: &str, text: &str) {
        std::fs::write(self.config.slot_path(slot), text).expect("Failed to write slot file");
    }

    /// Parses a slot file as JSON
    ///
    /// # Panics
    ///
    /// Panics if the slot is missing or is not valid JSON
    pub fn slot_json(&self, slot: &str) -> serde_json::Value {
        let text = self
            .read_slot(slot)
            .unwrap_or_else(|| panic!("Slot '{}' does not exist", slot));
        serde_json::from_str(&text).expect("Slot file is not valid JSON")
    }
}

impl Default for TestDataDir {
    fn default() -> Self {
        Self::new()
    }
}
