//! Record store port
//!
//! Domain crates describe *what* a persisted record looks like by implementing
//! [`Record`]; infrastructure crates decide *where* a collection lives by
//! implementing [`RecordStore`]. Services only ever see the port.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │        Entity / Analytics services           │
//! └──────────────────────────────────────────────┘
//!                       │
//!                       ▼
//! ┌──────────────────────────────────────────────┐
//! │             RecordStore<R> port              │
//! │   load() -> full collection, save(full)      │
//! └──────────────────────────────────────────────┘
//!            ▲                        ▲
//!  ┌─────────┴────────┐     ┌─────────┴────────┐
//!  │  JSON file slot  │     │  In-memory slot  │
//!  └──────────────────┘     └──────────────────┘
//! ```
//!
//! A collection is always read and written as a whole. There is no partial
//! read, append, or patch.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Error type for record store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Persisted data does not decode into the expected record shape
    #[error("Malformed record in '{slot}'{}: {message}", fmt_index(.index))]
    MalformedRecord {
        slot: String,
        index: Option<usize>,
        message: String,
    },

    /// The collection could not be serialized
    #[error("Failed to encode '{slot}': {message}")]
    Encode { slot: String, message: String },

    /// Reading or writing the durable location failed
    #[error("I/O error on '{slot}': {source}")]
    Io {
        slot: String,
        #[source]
        source: std::io::Error,
    },
}

fn fmt_index(index: &Option<usize>) -> String {
    index.map(|i| format!(" at index {}", i)).unwrap_or_default()
}

impl StoreError {
    /// Creates a MalformedRecord error for a specific item
    pub fn malformed(slot: impl Into<String>, index: usize, message: impl Into<String>) -> Self {
        StoreError::MalformedRecord {
            slot: slot.into(),
            index: Some(index),
            message: message.into(),
        }
    }

    /// Creates a MalformedRecord error for the collection as a whole
    pub fn malformed_collection(slot: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError::MalformedRecord {
            slot: slot.into(),
            index: None,
            message: message.into(),
        }
    }

    /// Creates an Io error
    pub fn io(slot: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            slot: slot.into(),
            source,
        }
    }

    /// Returns true if the persisted data is corrupt or has the wrong shape
    pub fn is_malformed(&self) -> bool {
        matches!(self, StoreError::MalformedRecord { .. })
    }
}

/// Marker trait for all domain ports
///
/// Ports are shared between async request handlers, so implementations must
/// be thread-safe.
pub trait DomainPort: Send + Sync + 'static {}

/// A record that can live in a collection slot
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Entity name used in logs and error messages
    const KIND: &'static str;

    /// Checks the field constraints a stored record must satisfy
    ///
    /// Called on every decoded item. Point-in-time rules that only apply
    /// when a record is first created (such as "not filed in the future")
    /// do not belong here.
    fn check_shape(&self) -> Result<(), String>;
}

/// Durable home of one homogeneous collection of records
#[async_trait]
pub trait RecordStore<R: Record>: DomainPort {
    /// Name of the collection slot, e.g. `claims`
    fn slot(&self) -> &str;

    /// Reads the full collection in stored order
    ///
    /// A slot that does not exist yet is initialized as an empty collection.
    async fn load(&self) -> Result<Vec<R>, StoreError>;

    /// Replaces the full collection with `records`
    async fn save(&self, records: &[R]) -> Result<(), StoreError>;
}
