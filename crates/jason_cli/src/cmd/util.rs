use std::fs;
use std::io::Write;
use std::path::Path;

use jason::json::{Value, decode};
use serde::Serialize;

use crate::error::{CliError, Result};

/// Read and decode one JSON document from disk.
pub(crate) fn load_tree(path: &Path) -> Result<Value> {
	let bytes = fs::read(path).map_err(|source| CliError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded document");
	Ok(decode(&bytes)?)
}

/// Write raw bytes followed by a newline to stdout.
pub(crate) fn emit_bytes(bytes: &[u8]) -> Result<()> {
	let mut stdout = std::io::stdout().lock();
	stdout.write_all(bytes).map_err(CliError::Output)?;
	stdout.write_all(b"\n").map_err(CliError::Output)?;
	stdout.flush().map_err(CliError::Output)
}

/// Write one value to stdout as compact JSON.
pub(crate) fn emit_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
	emit_bytes(&jason::json::encode(value)?)
}
