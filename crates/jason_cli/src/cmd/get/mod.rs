use std::path::PathBuf;

use jason::json::{FromJson, JsonAccess, JsonObject, Value};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use url::Url;

use crate::cmd::util::{emit_json, load_tree};
use crate::error::Result;

/// Target type requested with `--as`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Target {
	/// Any value, unchanged.
	Value,
	/// JSON string.
	String,
	/// Integral number.
	Int,
	/// Any number.
	Float,
	/// JSON boolean.
	Bool,
	/// JSON object, passed through.
	Object,
	/// JSON array of any values.
	Array,
	/// ISO-8601 UTC date string, printed as RFC 3339.
	Date,
	/// Absolute URL string.
	Url,
}

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	pub key: String,
	#[arg(long = "as", value_enum, default_value_t = Target::Value)]
	pub target: Target,
	#[arg(long)]
	pub optional: bool,
}

/// Resolve one key path and print the converted value as JSON.
pub fn run(args: Args) -> Result<()> {
	let Args { file, key, target, optional } = args;

	let tree = load_tree(&file)?;
	tracing::debug!(key = %key, ?target, optional, "querying");

	let found = query(&tree, &key, target, optional)?;
	emit_json(&found)
}

/// Convert the value at `key` to `target` and render it back as JSON.
///
/// An absent key renders as `null` only when `optional` is set.
pub fn query(tree: &Value, key: &str, target: Target, optional: bool) -> Result<Value> {
	match target {
		Target::Value => extract(tree, key, optional, |value: Value| Ok(value)),
		Target::String => extract(tree, key, optional, |text: String| Ok(Value::String(text))),
		Target::Int => extract(tree, key, optional, |number: i64| Ok(Value::from(number))),
		Target::Float => extract(tree, key, optional, |number: f64| Ok(Value::from(number))),
		Target::Bool => extract(tree, key, optional, |flag: bool| Ok(Value::Bool(flag))),
		Target::Object => extract(tree, key, optional, |object: JsonObject| Ok(Value::Object(object))),
		Target::Array => extract(tree, key, optional, |items: Vec<Value>| Ok(Value::Array(items))),
		Target::Date => extract(tree, key, optional, |date: OffsetDateTime| Ok(Value::String(date.format(&Rfc3339)?))),
		Target::Url => extract(tree, key, optional, |url: Url| Ok(Value::String(url.into()))),
	}
}

fn extract<T, F>(tree: &Value, key: &str, optional: bool, render: F) -> Result<Value>
where
	T: FromJson,
	F: FnOnce(T) -> Result<Value>,
{
	let found = if optional { tree.optional_value_for::<T>(key)? } else { Some(tree.value_for::<T>(key)?) };
	match found {
		Some(item) => render(item),
		None => Ok(Value::Null),
	}
}
