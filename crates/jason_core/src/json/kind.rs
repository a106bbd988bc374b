use std::fmt;

use serde_json::Value;

/// Variant tag of a decoded JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	/// JSON `null`.
	Null,
	/// JSON `true` or `false`.
	Bool,
	/// Any JSON number.
	Number,
	/// JSON string.
	String,
	/// Ordered JSON array.
	Array,
	/// String-keyed JSON object.
	Object,
}

impl ValueKind {
	/// Classify one decoded value.
	pub fn of(value: &Value) -> Self {
		match value {
			Value::Null => Self::Null,
			Value::Bool(_) => Self::Bool,
			Value::Number(_) => Self::Number,
			Value::String(_) => Self::String,
			Value::Array(_) => Self::Array,
			Value::Object(_) => Self::Object,
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool => "bool",
			Self::Number => "number",
			Self::String => "string",
			Self::Array => "array",
			Self::Object => "object",
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use crate::json::ValueKind;

	#[test]
	fn classifies_every_variant() {
		assert_eq!(ValueKind::of(&json!(null)), ValueKind::Null);
		assert_eq!(ValueKind::of(&json!(false)), ValueKind::Bool);
		assert_eq!(ValueKind::of(&json!(1.5)), ValueKind::Number);
		assert_eq!(ValueKind::of(&json!("x")), ValueKind::String);
		assert_eq!(ValueKind::of(&json!([1])), ValueKind::Array);
		assert_eq!(ValueKind::of(&json!({"a": 1})), ValueKind::Object);
	}

	#[test]
	fn labels_are_lowercase() {
		assert_eq!(ValueKind::Object.to_string(), "object");
		assert_eq!(ValueKind::Number.as_str(), "number");
	}
}
