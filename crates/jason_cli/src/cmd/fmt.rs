use std::path::PathBuf;

use jason::json::{encode, encode_pretty};

use crate::cmd::util::{emit_bytes, load_tree};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub pretty: bool,
}

/// Decode a document and print it re-encoded.
pub fn run(args: Args) -> Result<()> {
	let tree = load_tree(&args.file)?;
	let bytes = if args.pretty { encode_pretty(&tree)? } else { encode(&tree)? };
	emit_bytes(&bytes)
}
