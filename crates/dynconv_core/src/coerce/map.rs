use std::collections::BTreeMap;

use crate::coerce::value::nesting_exceeds;
use crate::coerce::{CoerceError, MapEntry, Result, Value, to_text};

/// Options controlling string-keyed map normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoerceOptions {
	/// Maximum nesting of lists and maps accepted in one call; the input map itself is level one.
	pub max_depth: u32,
	/// Fail with [`CoerceError::KeyCollision`] when two keys render to the same text.
	pub reject_key_collisions: bool,
}

impl Default for CoerceOptions {
	fn default() -> Self {
		Self {
			max_depth: 64,
			reject_key_collisions: false,
		}
	}
}

impl CoerceOptions {
	/// Preset that refuses to drop entries on key collisions.
	pub fn strict() -> Self {
		Self {
			reject_key_collisions: true,
			..Self::default()
		}
	}
}

/// Normalize a mapping into one keyed by text, using default options.
pub fn to_string_map(value: &Value) -> Result<BTreeMap<String, Value>> {
	to_string_map_with(value, &CoerceOptions::default())
}

/// Normalize a mapping into one keyed by text.
///
/// Null is the empty map and a string-keyed map is returned unchanged. For an
/// arbitrarily-keyed map every key is rendered with [`to_text`]; nested maps,
/// and maps directly inside list values, are normalized the same way. By
/// default a later key whose text matches an earlier one replaces it.
///
/// Input whose lists or maps nest deeper than `options.max_depth` fails with
/// [`CoerceError::DepthExceeded`].
pub fn to_string_map_with(value: &Value, options: &CoerceOptions) -> Result<BTreeMap<String, Value>> {
	match value {
		Value::Null => Ok(BTreeMap::new()),
		Value::StrMap(map) => {
			if nesting_exceeds(value, options.max_depth) {
				return Err(depth_exceeded(options));
			}
			Ok(map.clone())
		}
		Value::Map(entries) => normalize_entries(entries, options, 1),
		Value::Bool(_)
		| Value::I64(_)
		| Value::U64(_)
		| Value::F32(_)
		| Value::F64(_)
		| Value::String(_)
		| Value::Bytes(_)
		| Value::List(_)
		| Value::Typed(_) => Err(CoerceError::unsupported("to_string_map", value)),
	}
}

fn normalize_entries(entries: &[MapEntry], options: &CoerceOptions, depth: u32) -> Result<BTreeMap<String, Value>> {
	if depth > options.max_depth {
		return Err(depth_exceeded(options));
	}

	let mut out = BTreeMap::new();
	for entry in entries {
		let key = to_text(&entry.key);
		if options.reject_key_collisions && out.contains_key(&key) {
			return Err(CoerceError::KeyCollision { key });
		}
		let value = normalize_value(&entry.value, options, depth)?;
		out.insert(key, value);
	}
	Ok(out)
}

/// Normalize a value held by a container at `depth`.
fn normalize_value(value: &Value, options: &CoerceOptions, depth: u32) -> Result<Value> {
	match value {
		Value::Map(entries) => Ok(Value::StrMap(normalize_entries(entries, options, depth + 1)?)),
		Value::List(items) => {
			let depth = depth + 1;
			if depth > options.max_depth {
				return Err(depth_exceeded(options));
			}
			let mut out = Vec::with_capacity(items.len());
			for item in items {
				match item {
					Value::Map(entries) => out.push(Value::StrMap(normalize_entries(entries, options, depth + 1)?)),
					other => out.push(bounded_clone(other, options, depth)?),
				}
			}
			Ok(Value::List(out))
		}
		other => bounded_clone(other, options, depth),
	}
}

/// Copy a value held at `depth`, refusing nesting that would pass the limit.
fn bounded_clone(value: &Value, options: &CoerceOptions, depth: u32) -> Result<Value> {
	if nesting_exceeds(value, options.max_depth.saturating_sub(depth)) {
		return Err(depth_exceeded(options));
	}
	Ok(value.clone())
}

fn depth_exceeded(options: &CoerceOptions) -> CoerceError {
	CoerceError::DepthExceeded { max_depth: options.max_depth }
}
