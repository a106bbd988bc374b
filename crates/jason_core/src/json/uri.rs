use serde_json::Value;
use url::Url;

use crate::json::convert::mismatch;
use crate::json::{FromJson, JsonError, Result};

const EXPECTED_URL: &str = "URL string";

/// Convert an absolute URL string.
pub fn url_from_json(value: &Value) -> Result<Url> {
	let text = value.as_str().ok_or_else(|| mismatch(EXPECTED_URL, value))?;
	Url::parse(text).map_err(|err| JsonError::type_mismatch(EXPECTED_URL, format!("{text:?} ({err})")))
}

impl FromJson for Url {
	fn from_json(value: &Value) -> Result<Self> {
		url_from_json(value)
	}
}
