use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::sync::OnceLock;

use dynconv_testkit::{fixture_path as shared_fixture_path, target_dir as workspace_target_dir};

static DYNCONV_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> PathBuf {
	shared_fixture_path(name)
}

pub(crate) fn run_dynconv(args: &[&str]) -> Output {
	run_dynconv_stdin(args, "")
}

pub(crate) fn run_dynconv_stdin(args: &[&str], stdin: &str) -> Output {
	let mut child = Command::new(dynconv_bin())
		.args(args)
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("dynconv command spawns");
	child
		.stdin
		.take()
		.expect("stdin is piped")
		.write_all(stdin.as_bytes())
		.expect("stdin accepts input");
	child.wait_with_output().expect("dynconv command executes")
}

pub(crate) fn run_dynconv_stdout(args: &[&str]) -> String {
	let output = run_dynconv(args);
	assert!(
		output.status.success(),
		"dynconv command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	String::from_utf8(output.stdout).expect("stdout should be utf-8")
}

pub(crate) fn run_dynconv_json(args: &[&str]) -> serde_json::Value {
	let stdout = run_dynconv_stdout(args);
	serde_json::from_str(&stdout).expect("stdout should be valid json")
}

pub(crate) fn run_dynconv_err(args: &[&str]) -> String {
	let output = run_dynconv(args);
	assert!(!output.status.success(), "dynconv command should fail: {:?}", args);
	String::from_utf8(output.stderr).expect("stderr should be utf-8")
}

fn dynconv_bin() -> &'static PathBuf {
	DYNCONV_BIN.get_or_init(resolve_dynconv_bin)
}

fn resolve_dynconv_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_dynconv") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "dynconv.exe" } else { "dynconv" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "dynconv"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build dynconv binary at {}", bin.display());

	bin
}
