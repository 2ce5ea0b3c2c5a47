/// List coercion commands.
pub mod list;
/// String-keyed map normalization command.
pub mod map;
/// Scalar coercion commands.
pub mod scalar;
/// Shared input/output helpers.
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by `dynconv` commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Coercion of the selected input failed.
	#[error(transparent)]
	Coerce(#[from] dynconv::coerce::CoerceError),
	/// Reading the input failed.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input was not valid JSON, or output could not be encoded.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// `--pointer` did not match anything in the input document.
	#[error("json pointer {pointer:?} not found in input")]
	PointerNotFound {
		/// Pointer as given on the command line.
		pointer: String,
	},
	/// `--pairs` input was not an array of two-element arrays.
	#[error("expected an array of [key, value] pairs, got {got}")]
	InvalidPairs {
		/// Description of the offending input.
		got: String,
	},
}
