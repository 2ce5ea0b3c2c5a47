use dynconv::coerce::{CoerceOptions, Value, to_string_map_with};

use crate::cmd::util::{InputArgs, emit_json, json_kind, read_document};
use crate::cmd::{CliError, Result};

/// Arguments of the `map` subcommand.
#[derive(clap::Args)]
pub struct Args {
	/// Where the value to normalize comes from.
	#[command(flatten)]
	pub input: InputArgs,
	/// Treat the input as an array of `[key, value]` pairs with arbitrary keys.
	#[arg(long)]
	pub pairs: bool,
	/// Maximum nesting of lists and maps accepted in one call.
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	/// Fail when two keys render to the same text instead of keeping the last.
	#[arg(long = "reject-collisions")]
	pub reject_collisions: bool,
}

/// Normalize the selected input into a string-keyed map and print it.
pub fn run(args: Args) -> Result<()> {
	let Args {
		input,
		pairs,
		max_depth,
		reject_collisions,
	} = args;

	let mut options = if reject_collisions { CoerceOptions::strict() } else { CoerceOptions::default() };
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}

	let doc = read_document(&input)?;
	let value = if pairs { pairs_to_map(doc)? } else { Value::from(doc) };
	let map = to_string_map_with(&value, &options)?;

	if input.json {
		return emit_json(&map);
	}
	for (key, value) in &map {
		println!("{key} = {value}");
	}
	Ok(())
}

/// Build an arbitrarily-keyed map from `[[key, value], ...]`, keeping order.
pub(crate) fn pairs_to_map(doc: serde_json::Value) -> Result<Value> {
	let items = match doc {
		serde_json::Value::Array(items) => items,
		serde_json::Value::Null => return Ok(Value::Null),
		other => {
			return Err(CliError::InvalidPairs {
				got: json_kind(&other).to_owned(),
			});
		}
	};

	let mut entries = Vec::with_capacity(items.len());
	for item in items {
		let pair = match item {
			serde_json::Value::Array(pair) => pair,
			other => {
				return Err(CliError::InvalidPairs {
					got: format!("{} element", json_kind(&other)),
				});
			}
		};
		let [key, value]: [serde_json::Value; 2] = pair.try_into().map_err(|pair: Vec<serde_json::Value>| CliError::InvalidPairs {
			got: format!("pair of {} elements", pair.len()),
		})?;
		entries.push((Value::from(key), Value::from(value)));
	}
	Ok(Value::map(entries))
}
