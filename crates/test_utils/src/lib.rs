//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims ledger test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built drafts, records and dates
//! - `builders`: Builder patterns for drafts with sensible defaults
//! - `data_dir`: Temporary data directories for file-backed stores
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod data_dir;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use data_dir::*;
pub use assertions::*;
pub use generators::*;
