//! File-backed collection slots
//!
//! One JSON file per slot. Saves go to a temporary file in the same
//! directory which is then renamed over the slot, so a reader never sees a
//! half-written collection.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

use core_kernel::{DomainPort, Record, RecordStore, StoreError};

use crate::codec::{decode_collection, encode_collection, EMPTY_COLLECTION};
use crate::config::StoreConfig;

/// A collection slot stored as a JSON file
///
/// The store holds no records between calls: every `load` reads the file.
#[derive(Debug)]
pub struct JsonFileStore<R> {
    slot: String,
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> JsonFileStore<R> {
    /// Creates a store for `slot` backed by the file at `path`
    pub fn new(slot: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            slot: slot.into(),
            path: path.into(),
            _record: PhantomData,
        }
    }

    /// Creates a store for `slot` inside the configured data directory
    pub fn open(config: &StoreConfig, slot: &str) -> Self {
        Self::new(slot, config.slot_path(slot))
    }

    /// Returns the file backing this slot
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_or_initialize(&self) -> Result<String, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(slot = %self.slot, path = %self.path.display(), "Initializing empty slot");
                self.write_atomically(EMPTY_COLLECTION).await?;
                Ok(EMPTY_COLLECTION.to_string())
            }
            Err(e) => Err(StoreError::io(&self.slot, e)),
        }
    }

    async fn write_atomically(&self, contents: &str) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| StoreError::io(&self.slot, e))?;

        let tmp = dir.join(format!(".{}.{}.tmp", self.slot, Uuid::new_v4()));
        tokio::fs::write(&tmp, contents)
            .await
            .map_err(|e| StoreError::io(&self.slot, e))?;

        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
                warn!(slot = %self.slot, error = %cleanup, "Failed to remove temporary slot file");
            }
            return Err(StoreError::io(&self.slot, e));
        }
        Ok(())
    }
}

impl<R: Record> DomainPort for JsonFileStore<R> {}

#[async_trait]
impl<R: Record> RecordStore<R> for JsonFileStore<R> {
    fn slot(&self) -> &str {
        &self.slot
    }

    async fn load(&self) -> Result<Vec<R>, StoreError> {
        let text = self.read_or_initialize().await?;
        let records = decode_collection(&self.slot, &text).inspect_err(|e| {
            warn!(slot = %self.slot, path = %self.path.display(), error = %e, "Slot holds malformed data");
        })?;

        debug!(slot = %self.slot, records = records.len(), "Loaded collection");
        Ok(records)
    }

    async fn save(&self, records: &[R]) -> Result<(), StoreError> {
        let text = encode_collection(&self.slot, records)?;
        self.write_atomically(&text).await?;

        debug!(slot = %self.slot, records = records.len(), "Saved collection");
        Ok(())
    }
}
