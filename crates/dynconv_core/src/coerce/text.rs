use crate::coerce::Value;
use crate::coerce::number::float_to_i64;

/// Render any value as text. Never fails.
///
/// Null becomes the empty string, bytes are decoded as (lossy) UTF-8, and
/// integral floats render without a fractional part. Everything else uses the
/// value's [`Display`](std::fmt::Display) form.
pub fn to_text(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(v) => v.to_string(),
		Value::Bytes(v) => String::from_utf8_lossy(v).into_owned(),
		Value::F32(v) => render_f32(*v),
		Value::F64(v) => render_f64(*v),
		Value::Bool(_) | Value::I64(_) | Value::U64(_) | Value::List(_) | Value::Typed(_) | Value::Map(_) | Value::StrMap(_) => value.to_string(),
	}
}

/// Render a 64-bit float, preferring the exact integer form.
pub(crate) fn render_f64(value: f64) -> String {
	if let Ok(int) = float_to_i64(value) {
		return int.to_string();
	}
	if let Some(special) = render_non_finite(value) {
		return special.to_owned();
	}
	format_general(&format!("{value:e}"))
}

/// Render a 32-bit float using its own shortest digits.
pub(crate) fn render_f32(value: f32) -> String {
	if let Ok(int) = float_to_i64(f64::from(value)) {
		return int.to_string();
	}
	if let Some(special) = render_non_finite(f64::from(value)) {
		return special.to_owned();
	}
	format_general(&format!("{value:e}"))
}

fn render_non_finite(value: f64) -> Option<&'static str> {
	if value.is_nan() {
		Some("NaN")
	} else if value == f64::INFINITY {
		Some("+Inf")
	} else if value == f64::NEG_INFINITY {
		Some("-Inf")
	} else {
		None
	}
}

/// Exponent at or above which the scientific form is used.
const SCI_EXP_HIGH: i32 = 6;
/// Exponent below which the scientific form is used.
const SCI_EXP_LOW: i32 = -4;

/// Reformat Rust's shortest `{:e}` output (`-1.25e-7`) into `%g` style.
fn format_general(sci: &str) -> String {
	let Some((mantissa, exp)) = sci.split_once('e') else {
		return sci.to_owned();
	};
	let Ok(exp) = exp.parse::<i32>() else {
		return sci.to_owned();
	};

	if !(SCI_EXP_LOW..SCI_EXP_HIGH).contains(&exp) {
		let sign = if exp < 0 { '-' } else { '+' };
		return format!("{mantissa}e{sign}{:02}", exp.unsigned_abs());
	}

	let (neg, mantissa) = match mantissa.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, mantissa),
	};
	let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

	let mut out = String::with_capacity(digits.len() + 8);
	if neg {
		out.push('-');
	}
	if exp < 0 {
		out.push_str("0.");
		for _ in 0..(exp.unsigned_abs() - 1) {
			out.push('0');
		}
		out.push_str(&digits);
		return out;
	}

	let int_len = exp as usize + 1;
	if digits.len() <= int_len {
		out.push_str(&digits);
		for _ in digits.len()..int_len {
			out.push('0');
		}
	} else {
		out.push_str(&digits[..int_len]);
		out.push('.');
		out.push_str(&digits[int_len..]);
	}
	out
}
