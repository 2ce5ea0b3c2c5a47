use serde_json::json;

use crate::cmd::test_support::{fixture_path, run_dynconv_err, run_dynconv_json, run_dynconv_stdin, run_dynconv_stdout};

#[test]
fn int_parses_numeric_text_from_fixture() {
	let path = fixture_path("service_config.json");
	let path = path.to_str().expect("fixture path is utf-8");
	assert_eq!(run_dynconv_stdout(&["int", "--file", path, "--pointer", "/port"]), "8080\n");
	assert_eq!(run_dynconv_json(&["int", "--file", path, "--pointer", "/workers", "--json"]), json!(4));
}

#[test]
fn int_rejects_fractional_values() {
	let stderr = run_dynconv_err(&["int", "--value", "1.5"]);
	assert!(stderr.starts_with("error: cannot truncate float 1.5"), "stderr: {stderr}");

	let stderr = run_dynconv_err(&["int", "--text", "1.23"]);
	assert!(stderr.contains("cannot parse \"1.23\" as integer"), "stderr: {stderr}");
}

#[test]
fn float_and_text_render_general_form() {
	assert_eq!(run_dynconv_stdout(&["float", "--text", "1.23"]), "1.23\n");
	assert_eq!(run_dynconv_stdout(&["float", "--value", "123"]), "123\n");
	assert_eq!(run_dynconv_stdout(&["text", "--value", "0.00001"]), "1e-05\n");
	assert_eq!(run_dynconv_stdout(&["text", "--value", "null"]), "\n");
}

#[test]
fn bool_accepts_keywords_and_numbers() {
	assert_eq!(run_dynconv_stdout(&["bool", "--text", "YES"]), "true\n");
	assert_eq!(run_dynconv_json(&["bool", "--value", "0", "--json"]), json!(false));

	let stderr = run_dynconv_err(&["bool", "--text", "maybe"]);
	assert!(stderr.contains("unrecognized boolean text"), "stderr: {stderr}");
}

#[test]
fn reads_document_from_stdin() {
	let output = run_dynconv_stdin(&["int", "--pointer", "/a/1"], r#"{"a": [0, "42"]}"#);
	assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
	assert_eq!(String::from_utf8_lossy(&output.stdout), "42\n");
}

#[test]
fn missing_pointer_is_reported() {
	let stderr = run_dynconv_err(&["text", "--value", "{}", "--pointer", "/nope"]);
	assert!(stderr.contains("json pointer \"/nope\" not found"), "stderr: {stderr}");
}

#[test]
fn null_is_unsupported_for_scalars() {
	let stderr = run_dynconv_err(&["float", "--value", "null"]);
	assert!(stderr.contains("type = `null`"), "stderr: {stderr}");
}
