#![allow(missing_docs)]

use dynconv::coerce::{CoerceError, ErrorKind, Value, to_bool, to_f64, to_i64, to_list, to_text};

#[test]
fn integers_of_every_width_round_trip_through_i64() {
	let cases: Vec<(Value, i64)> = vec![
		(Value::from(i8::MAX), i64::from(i8::MAX)),
		(Value::from(i16::MIN), i64::from(i16::MIN)),
		(Value::from(i32::MAX), i64::from(i32::MAX)),
		(Value::from(i64::MAX), i64::MAX),
		(Value::from(u8::MAX), i64::from(u8::MAX)),
		(Value::from(u16::MAX), i64::from(u16::MAX)),
		(Value::from(u32::MAX), i64::from(u32::MAX)),
		(Value::from(i64::MAX as u64), i64::MAX),
	];
	for (value, want) in cases {
		assert_eq!(to_i64(&value).expect("in range"), want, "value {value:?}");
	}
}

#[test]
fn integral_floats_never_truncate_silently() {
	for whole in [-1e15_f64, -3.0, 0.0, 1.0, 2e9, 4_503_599_627_370_496.0] {
		assert_eq!(to_i64(&Value::from(whole)).expect("integral") as f64, whole);
	}
	for fractional in [0.1_f64, -2.5, 1.23, 1e-9] {
		let err = to_i64(&Value::from(fractional)).expect_err("fractional");
		assert_eq!(err.kind(), ErrorKind::TruncationDataLoss, "value {fractional}");
	}
}

#[test]
fn text_of_integer_and_float() {
	assert_eq!(to_text(&Value::from(42_i64)), "42");
	assert_eq!(to_text(&Value::from(1.23_f64)), "1.23");
}

#[test]
fn float_text_is_a_parse_failure_for_integers() {
	let err = to_i64(&Value::from("1.23")).expect_err("no silent truncation");
	assert_eq!(err.kind(), ErrorKind::ParseFailure);
	assert_eq!(to_f64(&Value::from("1.23")).expect("float text"), 1.23);
	assert_eq!(to_f64(&Value::from(123_i32)).expect("int widens"), 123.0);
}

#[test]
fn boolean_keywords() {
	assert!(to_bool(&Value::from("YES")).expect("yes"));
	assert!(!to_bool(&Value::from("No")).expect("no"));
	assert!(to_bool(&Value::from("maybe")).is_err());
}

#[test]
fn null_is_empty_collection_but_no_scalar() {
	assert!(to_list(&Value::Null).expect("empty list").is_empty());
	assert_eq!(to_text(&Value::Null), "");
	for err in [
		to_i64(&Value::Null).expect_err("int"),
		to_f64(&Value::Null).expect_err("float"),
		to_bool(&Value::Null).expect_err("bool"),
	] {
		assert!(matches!(err, CoerceError::UnsupportedType { type_name: "null", .. }));
	}
}

#[test]
fn errors_render_operation_and_type() {
	let err = to_f64(&Value::from(vec![1_i64])).expect_err("list is not a float");
	assert_eq!(err.to_string(), "unsupported value type in to_f64 conversion: type = `list<i64>`");

	let err = to_i64(&Value::from(2.5_f64)).expect_err("fractional");
	assert_eq!(err.to_string(), "cannot truncate float 2.5 to integer: data loss");
}
