use dynconv::coerce::{to_i64_list, to_list, to_text_list};

use crate::cmd::Result;
use crate::cmd::util::{InputArgs, emit_json, read_value};

/// List coercion selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
	/// Opaque values.
	Values,
	/// Text elements.
	Text,
	/// Integer elements.
	Int,
}

/// Coerce the selected input to a list and print one element per line.
pub fn run(args: InputArgs, target: Target) -> Result<()> {
	let value = read_value(&args)?;

	let lines: Vec<String> = match target {
		Target::Values => {
			let items = to_list(&value)?;
			if args.json {
				return emit_json(&items);
			}
			items.iter().map(ToString::to_string).collect()
		}
		Target::Text => {
			let items = to_text_list(&value)?;
			if args.json {
				return emit_json(&items);
			}
			items
		}
		Target::Int => {
			let items = to_i64_list(&value)?;
			if args.json {
				return emit_json(&items);
			}
			items.iter().map(ToString::to_string).collect()
		}
	};

	for line in lines {
		println!("{line}");
	}
	Ok(())
}

#[cfg(test)]
mod tests;
