use crate::coerce::value::nesting_exceeds;
use crate::coerce::{CoerceError, CoerceOptions, Result, TypedList, Value, to_i64, to_text};

/// Coerce a value to a list of opaque values.
///
/// Null is the empty list, an opaque list is returned unchanged, a scalar is
/// wrapped in a one-element list, and other sequences are copied element by
/// element. Maps are rejected, and so is a list nesting deeper than the
/// default [`CoerceOptions::max_depth`].
pub fn to_list(value: &Value) -> Result<Vec<Value>> {
	match value {
		Value::Null => Ok(Vec::new()),
		Value::List(items) => {
			let max_depth = CoerceOptions::default().max_depth;
			if nesting_exceeds(value, max_depth) {
				return Err(CoerceError::DepthExceeded { max_depth });
			}
			Ok(items.clone())
		}
		Value::Typed(list) => Ok(list.to_values()),
		Value::Bytes(bytes) => Ok(byte_values(bytes)),
		Value::Bool(_) | Value::I64(_) | Value::U64(_) | Value::F32(_) | Value::F64(_) | Value::String(_) => Ok(vec![value.clone()]),
		Value::Map(_) | Value::StrMap(_) => Err(CoerceError::unsupported("to_list", value)),
	}
}

/// Coerce a value to a list of text, rendering every element with [`to_text`].
///
/// Elements nested too deeply to render in full are elided the same way
/// [`to_text`] elides them.
pub fn to_text_list(value: &Value) -> Result<Vec<String>> {
	match value {
		Value::Null => Ok(Vec::new()),
		Value::Typed(TypedList::String(items)) => Ok(items.clone()),
		Value::Bool(_) | Value::I64(_) | Value::U64(_) | Value::F32(_) | Value::F64(_) | Value::String(_) => Ok(vec![to_text(value)]),
		Value::List(items) => Ok(items.iter().map(to_text).collect()),
		Value::Typed(list) => Ok(list.to_values().iter().map(to_text).collect()),
		Value::Bytes(bytes) => Ok(bytes.iter().map(u8::to_string).collect()),
		Value::Map(_) | Value::StrMap(_) => Err(CoerceError::unsupported("to_text_list", value)),
	}
}

/// Coerce a value to a list of integers, converting every element with [`to_i64`].
///
/// The first element that fails aborts the whole conversion with that
/// element's error; no partial list is returned.
pub fn to_i64_list(value: &Value) -> Result<Vec<i64>> {
	match value {
		Value::Null => Ok(Vec::new()),
		Value::Typed(TypedList::I64(items)) => Ok(items.clone()),
		Value::Bool(_) | Value::I64(_) | Value::U64(_) | Value::F32(_) | Value::F64(_) | Value::String(_) => Ok(vec![to_i64(value)?]),
		Value::List(items) => items.iter().map(to_i64).collect(),
		Value::Typed(list) => list.to_values().iter().map(to_i64).collect(),
		Value::Bytes(bytes) => Ok(bytes.iter().copied().map(i64::from).collect()),
		Value::Map(_) | Value::StrMap(_) => Err(CoerceError::unsupported("to_i64_list", value)),
	}
}

fn byte_values(bytes: &[u8]) -> Vec<Value> {
	bytes.iter().copied().map(Value::from).collect()
}
