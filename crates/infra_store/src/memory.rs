//! In-memory collection slots
//!
//! Keeps the serialized text of the collection rather than the records
//! themselves, so loads go through the same codec as the file store and
//! corrupt contents can be seeded for tests.

use async_trait::async_trait;
use std::marker::PhantomData;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{DomainPort, Record, RecordStore, StoreError};

use crate::codec::{decode_collection, encode_collection, EMPTY_COLLECTION};

/// A collection slot held in process memory
#[derive(Debug)]
pub struct MemoryStore<R> {
    slot: String,
    contents: RwLock<Option<String>>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> MemoryStore<R> {
    /// Creates a slot that does not exist yet
    pub fn new(slot: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            contents: RwLock::new(None),
            _record: PhantomData,
        }
    }

    /// Creates a slot that already holds the given serialized text
    pub fn with_contents(slot: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            contents: RwLock::new(Some(text.into())),
            _record: PhantomData,
        }
    }

    /// Returns the serialized text, or `None` if the slot was never initialized
    pub async fn contents(&self) -> Option<String> {
        self.contents.read().await.clone()
    }
}

impl<R: Record> DomainPort for MemoryStore<R> {}

#[async_trait]
impl<R: Record> RecordStore<R> for MemoryStore<R> {
    fn slot(&self) -> &str {
        &self.slot
    }

    async fn load(&self) -> Result<Vec<R>, StoreError> {
        let text = {
            let mut contents = self.contents.write().await;
            contents
                .get_or_insert_with(|| EMPTY_COLLECTION.to_string())
                .clone()
        };
        let records = decode_collection(&self.slot, &text)?;

        debug!(slot = %self.slot, records = records.len(), "Loaded in-memory collection");
        Ok(records)
    }

    async fn save(&self, records: &[R]) -> Result<(), StoreError> {
        let text = encode_collection(&self.slot, records)?;
        *self.contents.write().await = Some(text);

        debug!(slot = %self.slot, records = records.len(), "Saved in-memory collection");
        Ok(())
    }
}
