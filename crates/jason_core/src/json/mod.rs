mod access;
mod codec;
mod convert;
mod date;
mod error;
mod kind;
mod path;
mod uri;

/// Path resolution and required/optional typed accessors.
pub use access::{JsonAccess, optional_value_for, resolve, value_for};
/// Byte-level decode and encode entry points.
pub use codec::{decode, decode_object, decode_object_array, encode, encode_pretty};
/// Conversion capability and helpers for records and enums.
pub use convert::{FromJson, JsonEnum, enum_from_json, object_from_json};
/// Ordered date format lists and explicit-format date conversion.
pub use date::{DateFormats, date_from_json};
/// Error and result aliases.
pub use error::{JsonError, Result};
/// Variant tags for decoded values.
pub use kind::ValueKind;
/// Key path parser types.
pub use path::{JsonKey, KeyPath};
/// URL conversion helper.
pub use uri::url_from_json;

/// Decoded JSON value tree.
pub use serde_json::Value;

/// String-keyed mapping at the root of every accessor query.
pub type JsonObject = serde_json::Map<String, Value>;
