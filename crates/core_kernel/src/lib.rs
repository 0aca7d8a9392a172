//! Core Kernel - Foundational types for the claims ledger
//!
//! This crate provides the building blocks shared by every other crate:
//! - Sequential, strongly-typed record identifiers
//! - Bounds on monetary amounts
//! - Calendar helpers for "today", trailing windows, and month buckets
//! - The record store port that persistence adapters implement

pub mod amounts;
pub mod identifiers;
pub mod temporal;
pub mod ports;

pub use amounts::{check_amount, AmountViolation, MAX_AMOUNT};
pub use identifiers::{next_in_sequence, ClaimId, PolicyholderId, SequentialId};
pub use temporal::{today, trailing_window_start, YearMonth};
pub use ports::{DomainPort, Record, RecordStore, StoreError};
