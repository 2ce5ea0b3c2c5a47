//! Interop with `serde_json` documents.

use std::collections::BTreeMap;

use serde::ser::{Error as _, Serialize, Serializer};

use crate::coerce::{CoerceError, CoerceOptions, TypedList, Value, to_text};

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(v) => Self::Bool(v),
			serde_json::Value::Number(n) => {
				if let Some(v) = n.as_i64() {
					Self::I64(v)
				} else if let Some(v) = n.as_u64() {
					Self::U64(v)
				} else {
					n.as_f64().map_or(Self::Null, Self::F64)
				}
			}
			serde_json::Value::String(v) => Self::String(v.into_boxed_str()),
			serde_json::Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
			serde_json::Value::Object(map) => Self::StrMap(map.into_iter().map(|(key, value)| (key, Self::from(value))).collect()),
		}
	}
}

/// Maps serialize with text-rendered keys and bytes as number arrays.
///
/// Keys of an arbitrarily-keyed map that render to the same text collapse onto
/// one JSON key, the later entry winning as in
/// [`to_string_map`](crate::coerce::to_string_map). Lists and maps nested past
/// the default [`CoerceOptions::max_depth`] fail to serialize.
impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		Nested { value: self, depth: 0 }.serialize(serializer)
	}
}

/// A value together with the number of containers enclosing it.
struct Nested<'a> {
	value: &'a Value,
	depth: u32,
}

impl<'a> Nested<'a> {
	fn child(&self, value: &'a Value) -> Self {
		Self { value, depth: self.depth + 1 }
	}
}

impl Serialize for Nested<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let max_depth = CoerceOptions::default().max_depth;
		match self.value {
			Value::List(_) | Value::Map(_) | Value::StrMap(_) if self.depth >= max_depth => {
				Err(S::Error::custom(CoerceError::DepthExceeded { max_depth }))
			}
			Value::Null => serializer.serialize_unit(),
			Value::Bool(v) => serializer.serialize_bool(*v),
			Value::I64(v) => serializer.serialize_i64(*v),
			Value::U64(v) => serializer.serialize_u64(*v),
			Value::F32(v) => serializer.serialize_f32(*v),
			Value::F64(v) => serializer.serialize_f64(*v),
			Value::String(v) => serializer.serialize_str(v),
			Value::Bytes(v) => serializer.collect_seq(v),
			Value::List(items) => serializer.collect_seq(items.iter().map(|item| self.child(item))),
			Value::Typed(list) => list.serialize(serializer),
			Value::Map(entries) => {
				let mut map = BTreeMap::new();
				for entry in entries {
					map.insert(to_text(&entry.key), self.child(&entry.value));
				}
				serializer.collect_map(map)
			}
			Value::StrMap(map) => serializer.collect_map(map.iter().map(|(key, item)| (key, self.child(item)))),
		}
	}
}

impl Serialize for TypedList {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Self::Bool(items) => serializer.collect_seq(items),
			Self::I64(items) => serializer.collect_seq(items),
			Self::U64(items) => serializer.collect_seq(items),
			Self::F64(items) => serializer.collect_seq(items),
			Self::String(items) => serializer.collect_seq(items),
		}
	}
}
