use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CoerceError>;

/// Errors produced while coercing dynamic values.
#[derive(Debug, Error)]
pub enum CoerceError {
	/// The input's runtime shape has no conversion rule for the target.
	#[error("unsupported value type in {op} conversion: type = `{type_name}`")]
	UnsupportedType {
		/// Coercion that rejected the value.
		op: &'static str,
		/// Runtime type name of the rejected value.
		type_name: &'static str,
	},
	/// Text could not be parsed as a base-10 integer.
	#[error("cannot parse {input:?} as integer: {source}")]
	ParseInt {
		/// Offending text.
		input: String,
		/// Underlying parser failure.
		#[source]
		source: ParseIntError,
	},
	/// Text could not be parsed as a floating-point literal.
	#[error("cannot parse {input:?} as float: {source}")]
	ParseFloat {
		/// Offending text.
		input: String,
		/// Underlying parser failure.
		#[source]
		source: ParseFloatError,
	},
	/// Float has a fractional part (or is not finite) and would lose data as an integer.
	#[error("cannot truncate float {value} to integer: data loss")]
	Truncation {
		/// Rejected float value.
		value: f64,
	},
	/// Value is integral but outside the signed 64-bit range.
	#[error("integer value {value} out of i64 range")]
	IntOutOfRange {
		/// Decimal rendering of the rejected value.
		value: String,
	},
	/// Text is not one of the accepted boolean keywords.
	#[error("unrecognized boolean text {input:?} (expected true/false/yes/no)")]
	UnrecognizedBool {
		/// Offending text.
		input: String,
	},
	/// Lists or maps nested deeper than the configured limit.
	#[error("value nesting depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Two distinct keys rendered to the same text while collisions are rejected.
	#[error("map key collision on rendered key {key:?}")]
	KeyCollision {
		/// Rendered key shared by more than one entry.
		key: String,
	},
}

/// Coarse failure taxonomy for [`CoerceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// No conversion rule for the input shape.
	UnsupportedType,
	/// Text failed numeric parsing.
	ParseFailure,
	/// Float would be truncated.
	TruncationDataLoss,
	/// Text matched no accepted keyword.
	UnrecognizedValue,
	/// Integral value outside the target range.
	OutOfRange,
	/// Nesting guard tripped.
	DepthExceeded,
	/// Rendered map keys collided.
	KeyCollision,
}

impl CoerceError {
	/// Classify this error into the coarse taxonomy.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::UnsupportedType { .. } => ErrorKind::UnsupportedType,
			Self::ParseInt { .. } | Self::ParseFloat { .. } => ErrorKind::ParseFailure,
			Self::Truncation { .. } => ErrorKind::TruncationDataLoss,
			Self::IntOutOfRange { .. } => ErrorKind::OutOfRange,
			Self::UnrecognizedBool { .. } => ErrorKind::UnrecognizedValue,
			Self::DepthExceeded { .. } => ErrorKind::DepthExceeded,
			Self::KeyCollision { .. } => ErrorKind::KeyCollision,
		}
	}

	pub(crate) fn unsupported(op: &'static str, value: &super::Value) -> Self {
		Self::UnsupportedType {
			op,
			type_name: value.type_name(),
		}
	}
}
