//! Policyholder Domain
//!
//! A policyholder is a named person holding exactly one policy of a given
//! type, insured up to a fixed sum. Policyholders are created from a
//! [`PolicyholderDraft`] that carries every field except the id, which the
//! owning collection assigns.
//!
//! # Examples
//!
//! ```rust
//! use domain_policyholder::{PolicyholderDraft, PolicyType};
//! use core_kernel::PolicyholderId;
//! use rust_decimal_macros::dec;
//!
//! let draft = PolicyholderDraft::new("Alice Moreau", PolicyType::Health, dec!(1000));
//! draft.validate_fields().unwrap();
//!
//! let holder = draft.into_policyholder(PolicyholderId::new(0));
//! assert_eq!(holder.name, "Alice Moreau");
//! ```

pub mod policyholder;
pub mod error;

pub use policyholder::{Policyholder, PolicyholderDraft, PolicyType};
pub use error::PolicyholderError;
