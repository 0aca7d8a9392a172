//! Transcoding between collection text and records
//!
//! Both store implementations share this codec so that a collection reads
//! back identically whichever medium holds it.

use serde_json::Value;

use core_kernel::{Record, StoreError};

/// Serialized form of a collection with no records
pub const EMPTY_COLLECTION: &str = "[]";

/// Decodes a full collection
///
/// Every item must decode into `R` and pass [`Record::check_shape`]. The first
/// item that does not fails the whole load; records are never dropped or
/// coerced.
///
/// # Errors
///
/// Returns `StoreError::MalformedRecord` if the text is not a JSON array or
/// any item has the wrong shape
pub fn decode_collection<R: Record>(slot: &str, text: &str) -> Result<Vec<R>, StoreError> {
    let items = match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items,
        Ok(other) => {
            return Err(StoreError::malformed_collection(
                slot,
                format!("expected an array of {} records, found {}", R::KIND, value_kind(&other)),
            ))
        }
        Err(e) => return Err(StoreError::malformed_collection(slot, e.to_string())),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let record: R = serde_json::from_value(item)
                .map_err(|e| StoreError::malformed(slot, index, e.to_string()))?;
            record
                .check_shape()
                .map_err(|message| StoreError::malformed(slot, index, message))?;
            Ok(record)
        })
        .collect()
}

/// Encodes a full collection as a pretty-printed JSON array
///
/// # Errors
///
/// Returns `StoreError::Encode` if a record cannot be serialized
pub fn encode_collection<R: Record>(slot: &str, records: &[R]) -> Result<String, StoreError> {
    serde_json::to_string_pretty(records).map_err(|e| StoreError::Encode {
        slot: slot.to_string(),
        message: e.to_string(),
    })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
