//! Custom Test Assertions
//!
//! Assertion helpers that give more meaningful failure messages than plain
//! `assert_eq!` on whole collections.

use core_kernel::{SequentialId, StoreError};

/// Asserts that ids run 0, 1, 2, ... in collection order
pub fn assert_sequential_ids<I>(ids: impl IntoIterator<Item = I>)
where
    I: SequentialId + std::fmt::Debug,
{
    let mut expected = Some(I::first());
    for (position, id) in ids.into_iter().enumerate() {
        assert_eq!(Some(id), expected, "Unexpected id at position {}", position);
        expected = id.successor();
    }
}

/// Asserts that a load failed on a malformed record in `slot` at `index`
pub fn assert_malformed<T: std::fmt::Debug>(
    result: Result<T, StoreError>,
    slot: &str,
    index: Option<usize>,
) {
    match result {
        Err(StoreError::MalformedRecord {
            slot: actual_slot,
            index: actual_index,
            message,
        }) => {
            assert_eq!(actual_slot, slot, "Malformed record reported in the wrong slot");
            assert_eq!(actual_index, index, "Malformed record reported at the wrong index: {}", message);
        }
        other => panic!("Expected MalformedRecord in '{}', got {:?}", slot, other),
    }
}
