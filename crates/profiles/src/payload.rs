//! Shape-checked payload decoding.
//!
//! Derived struct deserializers also accept the positional (array) form, so
//! `[]` would bind as an all-default entry. Payloads are checked against the
//! JSON shape first: one object per entry, an array of objects per collection.

use serde::de::{DeserializeOwned, Error as _, Unexpected};
use serde_json::Value;

/// Decode a single entry. Anything but a JSON object is rejected.
pub fn decode_object<T: DeserializeOwned>(payload: &[u8]) -> serde_json::Result<T> {
    let value: Value = serde_json::from_slice(payload)?;
    expect_object(&value)?;
    serde_json::from_value(value)
}

/// Decode a collection: a JSON array whose every element is an object.
pub fn decode_object_list<T: DeserializeOwned>(payload: &[u8]) -> serde_json::Result<Vec<T>> {
    let value: Value = serde_json::from_slice(payload)?;
    match &value {
        Value::Array(items) => items.iter().try_for_each(expect_object)?,
        other => {
            return Err(serde_json::Error::invalid_type(
                unexpected(other),
                &"an array of JSON objects",
            ));
        }
    }
    serde_json::from_value(value)
}

fn expect_object(value: &Value) -> serde_json::Result<()> {
    if value.is_object() {
        Ok(())
    } else {
        Err(serde_json::Error::invalid_type(unexpected(value), &"a JSON object"))
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
