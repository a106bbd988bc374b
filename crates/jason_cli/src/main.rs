#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod error;

#[derive(Parser)]
#[command(name = "jason", about = "Typed key-path queries over JSON files")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Read one value at a dotted key path.
	Get(cmd::get::Args),
	/// List the keys of the root object or of a nested object.
	Keys(cmd::keys::Args),
	/// Decode and re-encode a document.
	Fmt(cmd::fmt::Args),
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		tracing::debug!(error = ?err, "command failed");
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> error::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Get(args) => cmd::get::run(args),
		Commands::Keys(args) => cmd::keys::run(args),
		Commands::Fmt(args) => cmd::fmt::run(args),
	}
}

fn init_tracing() {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}
