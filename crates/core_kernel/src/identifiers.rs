//! Strongly-typed sequential identifiers for domain entities
//!
//! Records are numbered by the store that owns their collection: the first
//! record gets `0` and every later record gets one more than the largest id
//! already present. Newtype wrappers keep a policyholder id from being passed
//! where a claim id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// An identifier assigned in sequence by a record collection
pub trait SequentialId: Copy + Ord {
    /// The identifier given to the first record of an empty collection
    fn first() -> Self;

    /// The identifier that follows this one, or `None` past the last value
    fn successor(self) -> Option<Self>;
}

/// Computes the identifier for a record appended to a collection
///
/// Returns `max(existing) + 1`, or `first()` when the collection is empty.
/// Gaps left by records removed outside the system are never refilled below
/// the maximum. Returns `None` once the maximum is the largest representable
/// id; ids are never reused.
pub fn next_in_sequence<I, It>(existing: It) -> Option<I>
where
    I: SequentialId,
    It: IntoIterator<Item = I>,
{
    match existing.into_iter().max() {
        Some(max) => max.successor(),
        None => Some(I::first()),
    }
}

macro_rules! define_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates an identifier from its numeric value
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the numeric value
            pub const fn value(&self) -> u64 {
                self.0
            }

            /// Returns the human readable entity label
            pub fn label() -> &'static str {
                $label
            }
        }

        impl SequentialId for $name {
            fn first() -> Self {
                Self(0)
            }

            fn successor(self) -> Option<Self> {
                self.0.checked_add(1).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }
    };
}

define_id!(PolicyholderId, "policyholder");
define_id!(ClaimId, "claim");
