use std::path::PathBuf;

use jason::json::JsonError;
use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Failures surfaced by `jason` subcommands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Input file could not be read.
	#[error("io: {}: {source}", .path.display())]
	Io {
		/// File that was being read.
		path: PathBuf,
		/// Underlying read failure.
		#[source]
		source: std::io::Error,
	},
	/// Decode, lookup, or conversion failure.
	#[error(transparent)]
	Json(#[from] JsonError),
	/// Date value could not be rendered as RFC 3339.
	#[error("format date: {0}")]
	FormatDate(#[from] time::error::Format),
	/// Stdout write failure.
	#[error("write output: {0}")]
	Output(#[source] std::io::Error),
}
