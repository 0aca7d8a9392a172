//! Record Store Infrastructure
//!
//! This crate provides the durable homes for record collections. Each
//! collection lives in one named slot and is always read and written whole:
//! `load` returns every record in stored order and `save` replaces the slot.
//!
//! # Layout
//!
//! A slot holds a JSON array of record objects, pretty-printed with a
//! two-space indent. Dates are `YYYY-MM-DD` strings, enums are their labels,
//! and amounts are plain JSON numbers.
//!
//! ```json
//! [
//!   {
//!     "id": 0,
//!     "policyholder_id": 0,
//!     "date_filed": "2024-03-15",
//!     "amount": 500.0,
//!     "status": "Pending"
//!   }
//! ]
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::{JsonFileStore, StoreConfig, prepare_data_dir};
//!
//! let config = StoreConfig::new("data");
//! prepare_data_dir(&config).await?;
//! let claims: JsonFileStore<Claim> = JsonFileStore::open(&config, "claims");
//! let all = claims.load().await?;
//! ```

pub mod config;
pub mod codec;
pub mod json_file;
pub mod memory;

pub use config::{prepare_data_dir, StoreConfig};
pub use codec::{decode_collection, encode_collection, EMPTY_COLLECTION};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
