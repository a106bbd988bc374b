use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::json::{JsonError, Result};

/// Parsed key path: mapping keys applied from the root outward.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
	text: String,
	segments: Vec<String>,
}

impl KeyPath {
	/// Parse dot-separated key syntax.
	///
	/// Every segment must be non-empty, so `""`, `".a"`, `"a."` and `"a..b"` are
	/// rejected. There is no escape for a literal `.` inside a key; use
	/// [`KeyPath::from_segments`] for those.
	pub fn parse(input: &str) -> Result<Self> {
		if input.is_empty() {
			return Err(JsonError::InvalidKeyPath { path: input.to_owned() });
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut segments = Vec::new();

		while idx < bytes.len() {
			let start = idx;
			while idx < bytes.len() && bytes[idx] != b'.' {
				idx += 1;
			}

			if idx == start {
				return Err(JsonError::InvalidKeyPath { path: input.to_owned() });
			}

			segments.push(input[start..idx].to_owned());

			if idx < bytes.len() {
				idx += 1;
				if idx >= bytes.len() {
					return Err(JsonError::InvalidKeyPath { path: input.to_owned() });
				}
			}
		}

		Ok(Self {
			text: input.to_owned(),
			segments,
		})
	}

	/// Build a path from explicit keys, which may themselves contain `.`.
	pub fn from_segments<I, S>(segments: I) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
		let text = segments.join(".");
		if segments.is_empty() || segments.iter().any(String::is_empty) {
			return Err(JsonError::InvalidKeyPath { path: text });
		}

		Ok(Self { text, segments })
	}

	/// Path text used in error reports.
	pub fn as_str(&self) -> &str {
		&self.text
	}

	/// Ordered keys to look up.
	pub fn segments(&self) -> &[String] {
		&self.segments
	}
}

impl fmt::Display for KeyPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.text)
	}
}

impl FromStr for KeyPath {
	type Err = JsonError;

	fn from_str(input: &str) -> Result<Self> {
		Self::parse(input)
	}
}

/// Anything usable as a key path at the accessor boundary.
pub trait JsonKey {
	/// Produce the parsed path, borrowing when already parsed.
	fn key_path(&self) -> Result<Cow<'_, KeyPath>>;
}

impl JsonKey for str {
	fn key_path(&self) -> Result<Cow<'_, KeyPath>> {
		KeyPath::parse(self).map(Cow::Owned)
	}
}

impl JsonKey for String {
	fn key_path(&self) -> Result<Cow<'_, KeyPath>> {
		self.as_str().key_path()
	}
}

impl JsonKey for KeyPath {
	fn key_path(&self) -> Result<Cow<'_, KeyPath>> {
		Ok(Cow::Borrowed(self))
	}
}

impl<K: JsonKey + ?Sized> JsonKey for &K {
	fn key_path(&self) -> Result<Cow<'_, KeyPath>> {
		(**self).key_path()
	}
}
