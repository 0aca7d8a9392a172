//! Claims Domain
//!
//! A claim is filed by an existing policyholder on a given date for a given
//! amount. Claims are created from a [`ClaimDraft`]; the owning collection
//! assigns the id.
//!
//! # Claim Status
//!
//! ```text
//! Pending (default) | Approved | Rejected
//! ```
//!
//! The filing date is checked against "today" once, when the draft is
//! validated. Stored claims are never re-checked against that rule.

pub mod claim;
pub mod error;

pub use claim::{Claim, ClaimDraft, ClaimStatus};
pub use error::ClaimError;
