use crate::coerce::{CoerceError, Result, Value};

/// `2^63`, the first float above the `i64` range.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Coerce a value to a signed 64-bit integer.
///
/// Integers widen, floats convert only when integral, and text is parsed as a
/// base-10 integer. Float text such as `"1.23"` is a parse failure, never a
/// silent truncation.
pub fn to_i64(value: &Value) -> Result<i64> {
	match value {
		Value::I64(v) => Ok(*v),
		Value::U64(v) => i64::try_from(*v).map_err(|_| CoerceError::IntOutOfRange { value: v.to_string() }),
		Value::F32(v) => float_to_i64(f64::from(*v)),
		Value::F64(v) => float_to_i64(*v),
		Value::String(v) => v.parse::<i64>().map_err(|source| CoerceError::ParseInt {
			input: v.to_string(),
			source,
		}),
		Value::Null | Value::Bool(_) | Value::Bytes(_) | Value::List(_) | Value::Typed(_) | Value::Map(_) | Value::StrMap(_) => {
			Err(CoerceError::unsupported("to_i64", value))
		}
	}
}

/// Coerce a value to a 64-bit float.
pub fn to_f64(value: &Value) -> Result<f64> {
	match value {
		Value::I64(v) => Ok(*v as f64),
		Value::U64(v) => Ok(*v as f64),
		Value::F32(v) => Ok(f64::from(*v)),
		Value::F64(v) => Ok(*v),
		Value::String(v) => v.parse::<f64>().map_err(|source| CoerceError::ParseFloat {
			input: v.to_string(),
			source,
		}),
		Value::Null | Value::Bool(_) | Value::Bytes(_) | Value::List(_) | Value::Typed(_) | Value::Map(_) | Value::StrMap(_) => {
			Err(CoerceError::unsupported("to_f64", value))
		}
	}
}

/// Convert a float to `i64` only when the round trip back to `f64` is exact.
pub(crate) fn float_to_i64(value: f64) -> Result<i64> {
	if !value.is_finite() || value.fract() != 0.0 {
		return Err(CoerceError::Truncation { value });
	}
	if !(-I64_LIMIT..I64_LIMIT).contains(&value) {
		return Err(CoerceError::IntOutOfRange { value: value.to_string() });
	}
	Ok(value as i64)
}
