use crate::coerce::{CoerceError, Result, Value};

/// Coerce a value to a boolean.
///
/// Numbers are true when nonzero. Text accepts `true`/`yes` and `false`/`no`
/// in any letter case.
pub fn to_bool(value: &Value) -> Result<bool> {
	match value {
		Value::Bool(v) => Ok(*v),
		Value::I64(v) => Ok(*v != 0),
		Value::U64(v) => Ok(*v != 0),
		Value::F32(v) => Ok(*v != 0.0),
		Value::F64(v) => Ok(*v != 0.0),
		Value::String(v) => parse_keyword(v).ok_or_else(|| CoerceError::UnrecognizedBool { input: v.to_string() }),
		Value::Null | Value::Bytes(_) | Value::List(_) | Value::Typed(_) | Value::Map(_) | Value::StrMap(_) => Err(CoerceError::unsupported("to_bool", value)),
	}
}

fn parse_keyword(text: &str) -> Option<bool> {
	if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("yes") {
		Some(true)
	} else if text.eq_ignore_ascii_case("false") || text.eq_ignore_ascii_case("no") {
		Some(false)
	} else {
		None
	}
}
