use std::io::Read;
use std::path::PathBuf;

use dynconv::coerce::Value;

use crate::cmd::{CliError, Result};

/// Input selection shared by every command.
#[derive(clap::Args)]
pub struct InputArgs {
	/// Inline JSON document.
	#[arg(long, conflicts_with_all = ["text", "file"])]
	pub value: Option<String>,
	/// Inline plain text, taken as a JSON string without parsing.
	#[arg(long, conflicts_with_all = ["file", "pointer"])]
	pub text: Option<String>,
	/// JSON document file; stdin is read when no input flag is given.
	#[arg(long)]
	pub file: Option<PathBuf>,
	/// JSON pointer (`/a/0/b`) selecting the value to coerce.
	#[arg(long)]
	pub pointer: Option<String>,
	/// Print the result as JSON.
	#[arg(long)]
	pub json: bool,
}

/// Read the selected input as a JSON document, applying `--pointer`.
pub(crate) fn read_document(args: &InputArgs) -> Result<serde_json::Value> {
	if let Some(text) = &args.text {
		return Ok(serde_json::Value::String(text.clone()));
	}

	let raw = match (&args.value, &args.file) {
		(Some(value), _) => value.clone(),
		(None, Some(path)) => std::fs::read_to_string(path)?,
		(None, None) => {
			let mut buf = String::new();
			std::io::stdin().read_to_string(&mut buf)?;
			buf
		}
	};
	let mut doc: serde_json::Value = serde_json::from_str(&raw)?;

	match &args.pointer {
		Some(pointer) => doc
			.pointer_mut(pointer)
			.map(serde_json::Value::take)
			.ok_or_else(|| CliError::PointerNotFound { pointer: pointer.clone() }),
		None => Ok(doc),
	}
}

/// Read the selected input as a dynamic value.
pub(crate) fn read_value(args: &InputArgs) -> Result<Value> {
	read_document(args).map(Value::from)
}

/// Print a serializable payload as pretty JSON.
pub(crate) fn emit_json<T: serde::Serialize + ?Sized>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// Short label for a JSON value's kind.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
	match value {
		serde_json::Value::Null => "null",
		serde_json::Value::Bool(_) => "bool",
		serde_json::Value::Number(_) => "number",
		serde_json::Value::String(_) => "string",
		serde_json::Value::Array(_) => "array",
		serde_json::Value::Object(_) => "object",
	}
}
