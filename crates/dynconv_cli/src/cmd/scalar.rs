use dynconv::coerce::{Value, to_bool, to_f64, to_i64, to_text};

use crate::cmd::Result;
use crate::cmd::util::{InputArgs, emit_json, read_value};

/// Scalar coercion selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
	/// Text rendering.
	Text,
	/// Signed 64-bit integer.
	Int,
	/// 64-bit float.
	Float,
	/// Boolean.
	Bool,
}

/// Coerce the selected input to one scalar and print it.
pub fn run(args: InputArgs, target: Target) -> Result<()> {
	let value = read_value(&args)?;

	match target {
		Target::Text => {
			let text = to_text(&value);
			if args.json { emit_json(&text) } else { print_line(&text) }
		}
		Target::Int => {
			let int = to_i64(&value)?;
			if args.json { emit_json(&int) } else { print_line(&int.to_string()) }
		}
		Target::Float => {
			let float = to_f64(&value)?;
			if args.json { emit_json(&float) } else { print_line(&to_text(&Value::F64(float))) }
		}
		Target::Bool => {
			let flag = to_bool(&value)?;
			if args.json { emit_json(&flag) } else { print_line(&flag.to_string()) }
		}
	}
}

fn print_line(line: &str) -> Result<()> {
	println!("{line}");
	Ok(())
}

#[cfg(test)]
mod tests;
