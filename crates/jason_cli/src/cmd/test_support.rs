use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;

static BINARY: OnceLock<PathBuf> = OnceLock::new();

/// Captured result of one `jason` invocation.
pub(crate) struct Run {
	output: Output,
}

impl Run {
	/// Stdout parsed as JSON; the run must have succeeded.
	pub(crate) fn json(&self) -> serde_json::Value {
		assert!(self.output.status.success(), "jason exited with {}: {}", self.output.status, self.stderr());
		serde_json::from_slice(&self.output.stdout).expect("stdout is json")
	}

	/// Stdout as text; the run must have succeeded.
	pub(crate) fn stdout(&self) -> String {
		assert!(self.output.status.success(), "jason exited with {}: {}", self.output.status, self.stderr());
		String::from_utf8_lossy(&self.output.stdout).into_owned()
	}

	/// Stderr of a run that must have failed with status 1.
	pub(crate) fn failure(&self) -> String {
		assert_eq!(self.output.status.code(), Some(1), "jason should fail, stdout: {}", String::from_utf8_lossy(&self.output.stdout));
		self.stderr()
	}

	fn stderr(&self) -> String {
		String::from_utf8_lossy(&self.output.stderr).into_owned()
	}
}

/// Fixture file name turned into a command-line argument.
pub(crate) fn fixture(name: &str) -> String {
	jason_testkit::fixture_path(name).to_string_lossy().into_owned()
}

/// Run the `jason` binary with a clean log filter.
pub(crate) fn jason(args: &[&str]) -> Run {
	let output = Command::new(BINARY.get_or_init(build_binary))
		.args(args)
		.env_remove("RUST_LOG")
		.output()
		.expect("jason binary starts");
	Run { output }
}

// Bin-crate unit tests have no CARGO_BIN_EXE_jason; the binary is built next to
// this test executable's `<target>/<profile>/deps` directory.
fn build_binary() -> PathBuf {
	let test_exe = std::env::current_exe().expect("test executable path");
	let profile_dir = test_exe.parent().and_then(Path::parent).expect("test executable lives under <target>/<profile>/deps");

	let mut cargo = Command::new(env!("CARGO"));
	cargo.current_dir(env!("CARGO_MANIFEST_DIR")).args(["build", "--quiet", "--bin", "jason"]);
	if profile_dir.ends_with("release") {
		cargo.arg("--release");
	}
	let status = cargo.status().expect("cargo starts");
	assert!(status.success(), "cargo build --bin jason failed");

	profile_dir.join(format!("jason{}", std::env::consts::EXE_SUFFIX))
}
