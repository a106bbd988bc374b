use std::borrow::Cow;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, JsonError>;

/// Errors produced while decoding, navigating, and converting JSON trees.
#[derive(Debug, Error)]
pub enum JsonError {
	/// A path segment was absent, crossed a non-object, or ended on null.
	#[error("no value for key {path}")]
	KeyNotFound {
		/// Full key path as requested by the caller.
		path: String,
	},
	/// Resolved value did not have the shape of the requested type.
	#[error("type mismatch{}: expected {expected}, found {found}", location(.path))]
	TypeMismatch {
		/// Location of the failing value from the outermost lookup inward, e.g. `teams[1].id`.
		path: Option<String>,
		/// Position of the innermost failing sequence element.
		index: Option<usize>,
		/// Description of the requested type.
		expected: Cow<'static, str>,
		/// Description of the value that was found.
		found: String,
	},
	/// Key path text is empty or contains empty segments.
	#[error("invalid key path: {path:?}")]
	InvalidKeyPath {
		/// Original path text.
		path: String,
	},
	/// Input bytes were not valid JSON.
	#[error("parse: {0}")]
	Parse(#[source] serde_json::Error),
	/// Tree could not be serialized.
	#[error("encode: {0}")]
	Encode(#[source] serde_json::Error),
}

impl JsonError {
	/// Build a mismatch with no location attached yet.
	pub fn type_mismatch(expected: impl Into<Cow<'static, str>>, found: impl Into<String>) -> Self {
		Self::TypeMismatch {
			path: None,
			index: None,
			expected: expected.into(),
			found: found.into(),
		}
	}

	/// Whether this error reports an absent (or null) key.
	pub fn is_key_not_found(&self) -> bool {
		matches!(self, Self::KeyNotFound { .. })
	}

	/// Whether this error reports a shape or value mismatch.
	pub fn is_type_mismatch(&self) -> bool {
		matches!(self, Self::TypeMismatch { .. })
	}

	/// Key path carried by the error, if any.
	pub fn path(&self) -> Option<&str> {
		match self {
			Self::KeyNotFound { path } | Self::InvalidKeyPath { path } => Some(path),
			Self::TypeMismatch { path, .. } => path.as_deref(),
			Self::Parse(_) | Self::Encode(_) => None,
		}
	}

	/// Prefix the location of a mismatch with the key it was looked up under.
	pub(crate) fn at_path(mut self, at: &str) -> Self {
		if let Self::TypeMismatch { path, .. } = &mut self {
			*path = Some(match path.take() {
				None => at.to_owned(),
				Some(inner) if inner.starts_with('[') => format!("{at}{inner}"),
				Some(inner) => format!("{at}.{inner}"),
			});
		}
		self
	}

	/// Prefix the location of a mismatch with a sequence element position.
	pub(crate) fn at_index(mut self, at: usize) -> Self {
		if let Self::TypeMismatch { path, index, .. } = &mut self {
			index.get_or_insert(at);
			*path = Some(match path.take() {
				None => format!("[{at}]"),
				Some(inner) if inner.starts_with('[') => format!("[{at}]{inner}"),
				Some(inner) => format!("[{at}].{inner}"),
			});
		}
		self
	}
}

fn location(path: &Option<String>) -> String {
	match path {
		Some(path) => format!(" at {path}"),
		None => String::new(),
	}
}
