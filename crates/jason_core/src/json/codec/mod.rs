use serde::Serialize;
use serde_json::Value;

use crate::json::convert::mismatch;
use crate::json::{JsonError, JsonObject, Result};

/// Decode any JSON document.
pub fn decode(bytes: &[u8]) -> Result<Value> {
	serde_json::from_slice(bytes).map_err(JsonError::Parse)
}

/// Decode a document whose root must be an object.
pub fn decode_object(bytes: &[u8]) -> Result<JsonObject> {
	match decode(bytes)? {
		Value::Object(object) => Ok(object),
		other => Err(mismatch("object", &other)),
	}
}

/// Decode a document whose root must be an array of objects.
pub fn decode_object_array(bytes: &[u8]) -> Result<Vec<JsonObject>> {
	let items = match decode(bytes)? {
		Value::Array(items) => items,
		other => return Err(mismatch("array of objects", &other)),
	};

	let mut out = Vec::with_capacity(items.len());
	for (index, item) in items.into_iter().enumerate() {
		match item {
			Value::Object(object) => out.push(object),
			other => return Err(mismatch("object", &other).at_index(index)),
		}
	}
	Ok(out)
}

/// Encode a tree, an object, or a slice of objects as compact JSON bytes.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
	serde_json::to_vec(value).map_err(JsonError::Encode)
}

/// Encode with two-space indentation.
pub fn encode_pretty<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
	serde_json::to_vec_pretty(value).map_err(JsonError::Encode)
}

#[cfg(test)]
mod tests;
