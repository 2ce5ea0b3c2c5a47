use std::collections::BTreeMap;
use std::fmt;

use crate::coerce::text::{render_f32, render_f64};
use crate::coerce::{CoerceOptions, Result};

/// Runtime value of unknown static type, as produced by untyped sources.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Null or absent value.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar of any width, widened on construction.
	I64(i64),
	/// Unsigned integer scalar of any width, widened on construction.
	U64(u64),
	/// 32-bit float scalar.
	F32(f32),
	/// 64-bit float scalar.
	F64(f64),
	/// Text scalar.
	String(Box<str>),
	/// Raw byte payload.
	Bytes(Vec<u8>),
	/// Opaquely mixed sequence.
	List(Vec<Value>),
	/// Sequence typed at the collection level.
	Typed(TypedList),
	/// Mapping with arbitrary keys, in encounter order.
	Map(Vec<MapEntry>),
	/// Mapping already keyed by text.
	StrMap(BTreeMap<String, Value>),
}

/// Homogeneous sequence whose element type is fixed by the container.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedList {
	/// Boolean elements.
	Bool(Vec<bool>),
	/// Signed integer elements.
	I64(Vec<i64>),
	/// Unsigned integer elements.
	U64(Vec<u64>),
	/// Float elements.
	F64(Vec<f64>),
	/// Text elements.
	String(Vec<String>),
}

/// One key/value pair of an arbitrarily-keyed mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct MapEntry {
	/// Entry key.
	pub key: Value,
	/// Entry payload.
	pub value: Value,
}

impl Value {
	/// Build an arbitrarily-keyed mapping from `(key, value)` pairs, keeping their order.
	pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<Value>,
		V: Into<Value>,
	{
		Self::Map(
			entries
				.into_iter()
				.map(|(key, value)| MapEntry {
					key: key.into(),
					value: value.into(),
				})
				.collect(),
		)
	}

	/// Stable runtime type label used in diagnostics.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::I64(_) => "i64",
			Self::U64(_) => "u64",
			Self::F32(_) => "f32",
			Self::F64(_) => "f64",
			Self::String(_) => "string",
			Self::Bytes(_) => "bytes",
			Self::List(_) => "list",
			Self::Typed(list) => list.type_name(),
			Self::Map(_) => "map",
			Self::StrMap(_) => "map<string>",
		}
	}

	/// See [`to_text`](crate::coerce::to_text).
	pub fn to_text(&self) -> String {
		crate::coerce::to_text(self)
	}

	/// See [`to_i64`](crate::coerce::to_i64).
	pub fn to_i64(&self) -> Result<i64> {
		crate::coerce::to_i64(self)
	}

	/// See [`to_f64`](crate::coerce::to_f64).
	pub fn to_f64(&self) -> Result<f64> {
		crate::coerce::to_f64(self)
	}

	/// See [`to_bool`](crate::coerce::to_bool).
	pub fn to_bool(&self) -> Result<bool> {
		crate::coerce::to_bool(self)
	}

	/// See [`to_list`](crate::coerce::to_list).
	pub fn to_list(&self) -> Result<Vec<Value>> {
		crate::coerce::to_list(self)
	}

	/// See [`to_text_list`](crate::coerce::to_text_list).
	pub fn to_text_list(&self) -> Result<Vec<String>> {
		crate::coerce::to_text_list(self)
	}

	/// See [`to_i64_list`](crate::coerce::to_i64_list).
	pub fn to_i64_list(&self) -> Result<Vec<i64>> {
		crate::coerce::to_i64_list(self)
	}

	/// See [`to_string_map`](crate::coerce::to_string_map).
	pub fn to_string_map(&self) -> Result<BTreeMap<String, Value>> {
		crate::coerce::to_string_map(self)
	}

	/// See [`to_string_map_with`](crate::coerce::to_string_map_with).
	pub fn to_string_map_with(&self, options: &CoerceOptions) -> Result<BTreeMap<String, Value>> {
		crate::coerce::to_string_map_with(self, options)
	}
}

impl TypedList {
	/// Runtime type label, e.g. `list<i64>`.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Bool(_) => "list<bool>",
			Self::I64(_) => "list<i64>",
			Self::U64(_) => "list<u64>",
			Self::F64(_) => "list<f64>",
			Self::String(_) => "list<string>",
		}
	}

	/// Copy elements out as opaque values, preserving order.
	pub fn to_values(&self) -> Vec<Value> {
		match self {
			Self::Bool(items) => items.iter().copied().map(Value::Bool).collect(),
			Self::I64(items) => items.iter().copied().map(Value::I64).collect(),
			Self::U64(items) => items.iter().copied().map(Value::U64).collect(),
			Self::F64(items) => items.iter().copied().map(Value::F64).collect(),
			Self::String(items) => items.iter().map(|item| Value::from(item.as_str())).collect(),
		}
	}
}

/// Container levels rendered by `Display` before the rest is elided.
pub(crate) const RENDER_DEPTH: u32 = 64;

/// Written in place of containers nested past [`RENDER_DEPTH`].
pub(crate) const ELIDED: &str = "...";

/// Whether `value` nests more than `limit` lists or maps inside each other.
///
/// Walks with an explicit stack so adversarial nesting cannot overflow the
/// call stack, and stops at the first container past the limit.
pub(crate) fn nesting_exceeds(value: &Value, limit: u32) -> bool {
	let mut pending = vec![(value, 0_u32)];
	while let Some((value, depth)) = pending.pop() {
		let is_container = matches!(value, Value::List(_) | Value::Map(_) | Value::StrMap(_));
		if is_container && depth >= limit {
			return true;
		}
		match value {
			Value::List(items) => pending.extend(items.iter().map(|item| (item, depth + 1))),
			Value::Map(entries) => {
				for entry in entries {
					pending.push((&entry.key, depth + 1));
					pending.push((&entry.value, depth + 1));
				}
			}
			Value::StrMap(map) => pending.extend(map.values().map(|item| (item, depth + 1))),
			_ => {}
		}
	}
	false
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write_value(f, self, 0)
	}
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value, depth: u32) -> fmt::Result {
	let is_container = matches!(value, Value::List(_) | Value::Typed(_) | Value::Map(_) | Value::StrMap(_));
	if is_container && depth >= RENDER_DEPTH {
		return f.write_str(ELIDED);
	}
	match value {
		Value::Null => f.write_str("null"),
		Value::Bool(v) => write!(f, "{v}"),
		Value::I64(v) => write!(f, "{v}"),
		Value::U64(v) => write!(f, "{v}"),
		Value::F32(v) => f.write_str(&render_f32(*v)),
		Value::F64(v) => f.write_str(&render_f64(*v)),
		Value::String(v) => f.write_str(v),
		Value::Bytes(v) => f.write_str(&String::from_utf8_lossy(v)),
		Value::List(items) => write_seq(f, items, depth),
		Value::Typed(list) => write_seq(f, &list.to_values(), depth),
		Value::Map(entries) => {
			f.write_str("{")?;
			for (idx, entry) in entries.iter().enumerate() {
				if idx > 0 {
					f.write_str(", ")?;
				}
				write_value(f, &entry.key, depth + 1)?;
				f.write_str(": ")?;
				write_value(f, &entry.value, depth + 1)?;
			}
			f.write_str("}")
		}
		Value::StrMap(map) => {
			f.write_str("{")?;
			for (idx, (key, item)) in map.iter().enumerate() {
				if idx > 0 {
					f.write_str(", ")?;
				}
				write!(f, "{key}: ")?;
				write_value(f, item, depth + 1)?;
			}
			f.write_str("}")
		}
	}
}

fn write_seq(f: &mut fmt::Formatter<'_>, items: &[Value], depth: u32) -> fmt::Result {
	f.write_str("[")?;
	for (idx, item) in items.iter().enumerate() {
		if idx > 0 {
			f.write_str(", ")?;
		}
		write_value(f, item, depth + 1)?;
	}
	f.write_str("]")
}

macro_rules! impl_from_int {
	($variant:ident => $wide:ty: $($ty:ty),+) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Self::$variant(value as $wide)
				}
			}
		)+
	};
}

impl_from_int!(I64 => i64: i8, i16, i32, i64, isize);
impl_from_int!(U64 => u64: u8, u16, u32, u64, usize);

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Self::F32(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::F64(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value.into_boxed_str())
	}
}

impl From<Vec<u8>> for Value {
	fn from(value: Vec<u8>) -> Self {
		Self::Bytes(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Self::List(value)
	}
}

impl From<TypedList> for Value {
	fn from(value: TypedList) -> Self {
		Self::Typed(value)
	}
}

impl From<Vec<bool>> for Value {
	fn from(value: Vec<bool>) -> Self {
		Self::Typed(TypedList::Bool(value))
	}
}

impl From<Vec<i64>> for Value {
	fn from(value: Vec<i64>) -> Self {
		Self::Typed(TypedList::I64(value))
	}
}

impl From<Vec<u64>> for Value {
	fn from(value: Vec<u64>) -> Self {
		Self::Typed(TypedList::U64(value))
	}
}

impl From<Vec<f64>> for Value {
	fn from(value: Vec<f64>) -> Self {
		Self::Typed(TypedList::F64(value))
	}
}

impl From<Vec<String>> for Value {
	fn from(value: Vec<String>) -> Self {
		Self::Typed(TypedList::String(value))
	}
}

impl From<BTreeMap<String, Value>> for Value {
	fn from(value: BTreeMap<String, Value>) -> Self {
		Self::StrMap(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}
