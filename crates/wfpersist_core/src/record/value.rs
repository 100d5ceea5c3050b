use std::collections::BTreeMap;
use std::time::Duration;

use crate::record::Timestamp;

/// Dynamically typed accessor output, used for catalog-wide inspection.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Boolean scalar.
	Bool(bool),
	/// 16-bit signed integer.
	I16(i16),
	/// 32-bit signed integer.
	I32(i32),
	/// 64-bit signed integer.
	I64(i64),
	/// 64-bit float.
	F64(f64),
	/// Elapsed time.
	Duration(Duration),
	/// Instant.
	Timestamp(Timestamp),
	/// UTF-8 text.
	String(String),
	/// Opaque byte payload, returned as stored.
	Bytes(Vec<u8>),
	/// Ordered sequence.
	Array(Vec<Value>),
	/// String-keyed mapping.
	Map(BTreeMap<String, Value>),
	/// Nested record value.
	Struct(StructValue),
}

/// Record-shaped value with field names preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
	/// Record type name.
	pub type_name: Box<str>,
	/// Field values in declaration order.
	pub fields: Vec<FieldValue>,
}

impl StructValue {
	/// Look up a field value by name.
	pub fn field(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|item| &*item.name == name).map(|item| &item.value)
	}
}

/// Named field value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field identifier.
	pub name: Box<str>,
	/// Field payload.
	pub value: Value,
}

impl Value {
	/// Whether this is an empty string, byte payload, or container.
	pub fn is_empty_container(&self) -> bool {
		match self {
			Self::String(item) => item.is_empty(),
			Self::Bytes(item) => item.is_empty(),
			Self::Array(item) => item.is_empty(),
			Self::Map(item) => item.is_empty(),
			_ => false,
		}
	}
}
