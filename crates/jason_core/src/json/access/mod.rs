use serde_json::Value;

use crate::json::{FromJson, JsonError, JsonKey, JsonObject, KeyPath, Result};

/// Walk `path` from `tree` and return the value it names.
///
/// Every segment must land on an object holding that key. A value that is
/// present but `null` is reported exactly like a missing key.
pub fn resolve<'a>(tree: &'a JsonObject, path: &KeyPath) -> Result<&'a Value> {
	lookup(Some(tree), path)
}

/// Resolve `key` in `tree` and convert the value to `T`.
pub fn value_for<T: FromJson>(tree: &JsonObject, key: impl JsonKey) -> Result<T> {
	let path = key.key_path()?;
	convert_at(lookup(Some(tree), &path)?, &path)
}

/// Like [`value_for`], but an absent or null key yields `Ok(None)`.
///
/// Only the `KeyNotFound` raised while resolving `key` itself is absorbed. A
/// mismatch, or a missing field inside a nested record, is still an error.
pub fn optional_value_for<T: FromJson>(tree: &JsonObject, key: impl JsonKey) -> Result<Option<T>> {
	let path = key.key_path()?;
	optional_at(Some(tree), &path)
}

/// Typed lookups on anything that may hold a root object.
pub trait JsonAccess {
	/// Object the lookups start from, or `None` when the root is not an object.
	fn root_object(&self) -> Option<&JsonObject>;

	/// Resolve `key` without converting.
	fn resolve(&self, key: impl JsonKey) -> Result<&Value> {
		let path = key.key_path()?;
		lookup(self.root_object(), &path)
	}

	/// Required typed lookup.
	fn value_for<T: FromJson>(&self, key: impl JsonKey) -> Result<T> {
		let path = key.key_path()?;
		convert_at(lookup(self.root_object(), &path)?, &path)
	}

	/// Optional typed lookup.
	fn optional_value_for<T: FromJson>(&self, key: impl JsonKey) -> Result<Option<T>> {
		let path = key.key_path()?;
		optional_at(self.root_object(), &path)
	}
}

impl JsonAccess for JsonObject {
	fn root_object(&self) -> Option<&JsonObject> {
		Some(self)
	}
}

impl JsonAccess for Value {
	fn root_object(&self) -> Option<&JsonObject> {
		self.as_object()
	}
}

fn lookup<'a>(tree: Option<&'a JsonObject>, path: &KeyPath) -> Result<&'a Value> {
	let not_found = || JsonError::KeyNotFound { path: path.as_str().to_owned() };

	let mut current = tree;
	let mut found = None;
	for segment in path.segments() {
		let value = current.and_then(|object| object.get(segment)).ok_or_else(not_found)?;
		current = value.as_object();
		found = Some(value);
	}

	match found {
		Some(Value::Null) | None => Err(not_found()),
		Some(value) => Ok(value),
	}
}

fn convert_at<T: FromJson>(value: &Value, path: &KeyPath) -> Result<T> {
	T::from_json(value).map_err(|err| err.at_path(path.as_str()))
}

fn optional_at<T: FromJson>(tree: Option<&JsonObject>, path: &KeyPath) -> Result<Option<T>> {
	match lookup(tree, path) {
		Ok(value) => convert_at(value, path).map(Some),
		Err(JsonError::KeyNotFound { .. }) => Ok(None),
		Err(err) => Err(err),
	}
}
