use std::any::type_name;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

use serde_json::Value;

use crate::json::{JsonError, JsonObject, Result, ValueKind};

/// Types that can be built from one decoded JSON value.
///
/// Scalars only accept their own variant: a numeric-looking string is not a
/// number. Record types implement this by calling [`object_from_json`] and
/// reading their fields through [`crate::json::JsonAccess`].
pub trait FromJson: Sized {
	/// Convert `value`, or report why it has the wrong shape.
	fn from_json(value: &Value) -> Result<Self>;
}

/// Enumerated types backed by a raw scalar.
pub trait JsonEnum: Sized {
	/// Backing scalar read from JSON before case lookup.
	type Raw: FromJson + fmt::Debug;

	/// Return the case for `raw`, if one exists.
	fn from_raw(raw: &Self::Raw) -> Option<Self>;
}

/// Borrow the object payload of `value`.
pub fn object_from_json(value: &Value) -> Result<&JsonObject> {
	value.as_object().ok_or_else(|| mismatch("object", value))
}

/// Convert the raw backing value, then look up the matching enum case.
pub fn enum_from_json<E: JsonEnum>(value: &Value) -> Result<E> {
	let raw = E::Raw::from_json(value)?;
	E::from_raw(&raw).ok_or_else(|| JsonError::type_mismatch(format!("{} (enum)", short_type_name::<E>()), format!("{raw:?}")))
}

pub(crate) fn mismatch(expected: &'static str, value: &Value) -> JsonError {
	JsonError::type_mismatch(expected, ValueKind::of(value).as_str())
}

fn short_type_name<T>() -> &'static str {
	let full = type_name::<T>();
	let base = full.split('<').next().unwrap_or(full);
	base.rsplit("::").next().unwrap_or(base)
}

impl FromJson for Value {
	fn from_json(value: &Value) -> Result<Self> {
		Ok(value.clone())
	}
}

impl FromJson for bool {
	fn from_json(value: &Value) -> Result<Self> {
		value.as_bool().ok_or_else(|| mismatch("bool", value))
	}
}

impl FromJson for String {
	fn from_json(value: &Value) -> Result<Self> {
		value.as_str().map(str::to_owned).ok_or_else(|| mismatch("string", value))
	}
}

impl FromJson for f64 {
	fn from_json(value: &Value) -> Result<Self> {
		value.as_f64().ok_or_else(|| mismatch("number", value))
	}
}

impl FromJson for f32 {
	fn from_json(value: &Value) -> Result<Self> {
		let Value::Number(number) = value else {
			return Err(mismatch("number", value));
		};
		number
			.as_f64()
			.map(|wide| wide as f32)
			.filter(|narrow| narrow.is_finite())
			.ok_or_else(|| JsonError::type_mismatch("number (f32)", number.to_string()))
	}
}

macro_rules! impl_from_json_int {
	($($ty:ty),* $(,)?) => {
		$(
			impl FromJson for $ty {
				fn from_json(value: &Value) -> Result<Self> {
					let Value::Number(number) = value else {
						return Err(mismatch("integer", value));
					};
					number
						.as_i64()
						.and_then(|signed| <$ty>::try_from(signed).ok())
						.or_else(|| number.as_u64().and_then(|unsigned| <$ty>::try_from(unsigned).ok()))
						.ok_or_else(|| JsonError::type_mismatch(concat!("integer (", stringify!($ty), ")"), number.to_string()))
				}
			}
		)*
	};
}

impl_from_json_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromJson for JsonObject {
	fn from_json(value: &Value) -> Result<Self> {
		object_from_json(value).cloned()
	}
}

impl<T: FromJson> FromJson for Vec<T> {
	fn from_json(value: &Value) -> Result<Self> {
		let items = value.as_array().ok_or_else(|| mismatch("array", value))?;
		items
			.iter()
			.enumerate()
			.map(|(index, item)| T::from_json(item).map_err(|err| err.at_index(index)))
			.collect()
	}
}

impl<T: FromJson> FromJson for BTreeMap<String, T> {
	fn from_json(value: &Value) -> Result<Self> {
		object_from_json(value)?
			.iter()
			.map(|(key, item)| T::from_json(item).map(|converted| (key.clone(), converted)))
			.collect()
	}
}

impl<T: FromJson, S: BuildHasher + Default> FromJson for HashMap<String, T, S> {
	fn from_json(value: &Value) -> Result<Self> {
		object_from_json(value)?
			.iter()
			.map(|(key, item)| T::from_json(item).map(|converted| (key.clone(), converted)))
			.collect()
	}
}
