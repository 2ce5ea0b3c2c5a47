mod boolean;
mod error;
mod json;
mod list;
mod map;
mod number;
mod text;
mod value;

/// Boolean coercion.
pub use boolean::to_bool;
/// Error, error taxonomy, and result aliases.
pub use error::{CoerceError, ErrorKind, Result};
/// List coercions.
pub use list::{to_i64_list, to_list, to_text_list};
/// String-keyed map normalization and its options.
pub use map::{CoerceOptions, to_string_map, to_string_map_with};
/// Numeric coercions.
pub use number::{to_f64, to_i64};
/// Text coercion.
pub use text::to_text;
/// Dynamic runtime value types.
pub use value::{MapEntry, TypedList, Value};
