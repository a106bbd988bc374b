use std::path::PathBuf;

use jason::json::{JsonAccess, JsonObject, object_from_json};
use serde::Serialize;

use crate::cmd::util::{emit_json, load_tree};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	pub key: Option<String>,
}

/// Key listing for one object.
#[derive(Debug, Serialize)]
pub struct KeysReport {
	/// Key path of the listed object, `null` for the root.
	pub key: Option<String>,
	/// Number of keys.
	pub count: usize,
	/// Sorted key names.
	pub keys: Vec<String>,
}

/// Print the sorted keys of the root object or of the object at `key`.
pub fn run(args: Args) -> Result<()> {
	let Args { file, key } = args;

	let tree = load_tree(&file)?;
	let object: JsonObject = match key.as_deref() {
		Some(path) => tree.value_for(path)?,
		None => object_from_json(&tree)?.clone(),
	};

	emit_json(&report(key, &object))
}

fn report(key: Option<String>, object: &JsonObject) -> KeysReport {
	let mut keys: Vec<String> = object.keys().cloned().collect();
	keys.sort();
	KeysReport { key, count: keys.len(), keys }
}
