use serde_json::json;

use crate::cmd::test_support::{fixture_path, run_dynconv_err, run_dynconv_json, run_dynconv_stdout};

#[test]
fn int_list_converts_mixed_fixture_array() {
	let path = fixture_path("service_config.json");
	let path = path.to_str().expect("fixture path is utf-8");
	assert_eq!(run_dynconv_json(&["int-list", "--file", path, "--pointer", "/replicas", "--json"]), json!([1, 2, 3]));
	assert_eq!(run_dynconv_stdout(&["int-list", "--file", path, "--pointer", "/replicas"]), "1\n2\n3\n");
}

#[test]
fn int_list_fails_without_partial_output() {
	let path = fixture_path("bad_replicas.json");
	let path = path.to_str().expect("fixture path is utf-8");
	let stderr = run_dynconv_err(&["int-list", "--file", path, "--pointer", "/replicas"]);
	assert!(stderr.contains("cannot parse \"two\" as integer"), "stderr: {stderr}");
}

#[test]
fn text_list_wraps_scalars() {
	assert_eq!(run_dynconv_json(&["text-list", "--value", "2.5", "--json"]), json!(["2.5"]));
	assert_eq!(run_dynconv_stdout(&["text-list", "--value", r#"[1, true, "x"]"#]), "1\ntrue\nx\n");
}

#[test]
fn list_of_null_is_empty() {
	assert_eq!(run_dynconv_json(&["list", "--value", "null", "--json"]), json!([]));
	assert_eq!(run_dynconv_stdout(&["list", "--value", "null"]), "");
}

#[test]
fn list_rejects_objects() {
	let stderr = run_dynconv_err(&["list", "--value", r#"{"a": 1}"#]);
	assert!(stderr.contains("unsupported value type in to_list conversion"), "stderr: {stderr}");
}
