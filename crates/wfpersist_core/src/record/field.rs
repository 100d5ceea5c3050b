use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::record::{FieldValue, HistoryBranchRange, StructValue, Timestamp, Value};

/// Scalar semantic types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
	/// UTF-8 text.
	String,
	/// Opaque byte sequence.
	Bytes,
	/// 16-bit signed integer.
	Int16,
	/// 32-bit signed integer.
	Int32,
	/// 64-bit signed integer.
	Int64,
	/// Boolean.
	Bool,
	/// 64-bit float.
	Float64,
	/// Elapsed time.
	Duration,
	/// Instant.
	Timestamp,
}

/// Declared semantic type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
	/// Single scalar value.
	Scalar(Scalar),
	/// Ordered sequence of scalars.
	Sequence(Scalar),
	/// Mapping from scalar keys to scalar values.
	Mapping(Scalar, Scalar),
	/// Ordered sequence of nested records, by type name.
	RecordSequence(&'static str),
}

/// How a field is held by the persisted schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
	/// Plain value; an unset field holds the storage zero value.
	Stored,
	/// Nullable reference; an unset field holds nothing.
	Nullable,
}

/// Default-value strategy applied when data is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fallback {
	/// Zero value of the type: `0`, `false`, empty text, empty container,
	/// zero duration, or the intrinsic zero instant for timestamps.
	Zero,
	/// Unix epoch for timestamps; zero value for everything else.
	UnixEpoch,
}

/// One catalog entry: field name, semantic type, and storage slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
	/// Field name, unique within its record kind.
	pub name: &'static str,
	/// Declared semantic type.
	pub ty: FieldType,
	/// Storage slot kind.
	pub slot: Slot,
}

impl FieldSpec {
	/// Value returned when the whole record is absent.
	pub fn absent_value(&self) -> Value {
		self.ty.fallback_value(self.ty.absent_fallback())
	}

	/// Value returned when the record is present but the field is unset.
	pub fn unset_value(&self) -> Value {
		self.ty.fallback_value(self.ty.unset_fallback(self.slot))
	}
}

impl FieldType {
	/// Strategy used when the record itself is absent.
	pub fn absent_fallback(self) -> Fallback {
		match self {
			Self::Scalar(Scalar::Timestamp) => Fallback::UnixEpoch,
			_ => Fallback::Zero,
		}
	}

	/// Strategy used when the record is present but the field is unset.
	pub fn unset_fallback(self, slot: Slot) -> Fallback {
		match (self, slot) {
			(Self::Scalar(Scalar::Timestamp), Slot::Nullable) => Fallback::UnixEpoch,
			_ => Fallback::Zero,
		}
	}

	/// Materialize a strategy as a dynamic value of this type.
	pub fn fallback_value(self, fallback: Fallback) -> Value {
		match self {
			Self::Scalar(scalar) => scalar.fallback_value(fallback),
			Self::Sequence(_) | Self::RecordSequence(_) => Value::Array(Vec::new()),
			Self::Mapping(_, _) => Value::Map(BTreeMap::new()),
		}
	}
}

impl Scalar {
	/// Materialize a strategy as a dynamic value of this scalar type.
	pub fn fallback_value(self, fallback: Fallback) -> Value {
		match self {
			Self::String => Value::String(String::new()),
			Self::Bytes => Value::Bytes(Vec::new()),
			Self::Int16 => Value::I16(0),
			Self::Int32 => Value::I32(0),
			Self::Int64 => Value::I64(0),
			Self::Bool => Value::Bool(false),
			Self::Float64 => Value::F64(0.0),
			Self::Duration => Value::Duration(Duration::ZERO),
			Self::Timestamp => Value::Timestamp(Timestamp::fallback(fallback)),
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::String => "string",
			Self::Bytes => "bytes",
			Self::Int16 => "int16",
			Self::Int32 => "int32",
			Self::Int64 => "int64",
			Self::Bool => "bool",
			Self::Float64 => "float64",
			Self::Duration => "duration",
			Self::Timestamp => "timestamp",
		}
	}
}

impl Slot {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Stored => "stored",
			Self::Nullable => "nullable",
		}
	}
}

impl fmt::Display for FieldType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Scalar(scalar) => f.write_str(scalar.as_str()),
			Self::Sequence(item) => write!(f, "list<{}>", item.as_str()),
			Self::Mapping(key, value) => write!(f, "map<{}, {}>", key.as_str(), value.as_str()),
			Self::RecordSequence(name) => write!(f, "list<{name}>"),
		}
	}
}

/// Rust representation of one semantic field type.
///
/// Implemented for the closed set of types record fields may carry.
pub trait Semantic: Clone {
	/// Declared semantic type.
	const FIELD_TYPE: FieldType;

	/// Produce the default for a missing value.
	fn fallback(fallback: Fallback) -> Self;

	/// Render into a dynamic value.
	fn to_value(&self) -> Value;
}

macro_rules! zero_semantic {
	($ty:ty, $field_type:expr, |$item:ident| $render:expr) => {
		impl Semantic for $ty {
			const FIELD_TYPE: FieldType = $field_type;

			fn fallback(_: Fallback) -> Self {
				<$ty>::default()
			}

			fn to_value(&self) -> Value {
				let $item = self;
				$render
			}
		}
	};
}

zero_semantic!(String, FieldType::Scalar(Scalar::String), |item| Value::String(item.clone()));
zero_semantic!(Vec<u8>, FieldType::Scalar(Scalar::Bytes), |item| Value::Bytes(item.clone()));
zero_semantic!(i16, FieldType::Scalar(Scalar::Int16), |item| Value::I16(*item));
zero_semantic!(i32, FieldType::Scalar(Scalar::Int32), |item| Value::I32(*item));
zero_semantic!(i64, FieldType::Scalar(Scalar::Int64), |item| Value::I64(*item));
zero_semantic!(bool, FieldType::Scalar(Scalar::Bool), |item| Value::Bool(*item));
zero_semantic!(f64, FieldType::Scalar(Scalar::Float64), |item| Value::F64(*item));
zero_semantic!(Duration, FieldType::Scalar(Scalar::Duration), |item| Value::Duration(*item));
zero_semantic!(Vec<String>, FieldType::Sequence(Scalar::String), |items| Value::Array(
	items.iter().cloned().map(Value::String).collect()
));
zero_semantic!(Vec<Vec<u8>>, FieldType::Sequence(Scalar::Bytes), |items| Value::Array(
	items.iter().cloned().map(Value::Bytes).collect()
));
zero_semantic!(BTreeMap<String, String>, FieldType::Mapping(Scalar::String, Scalar::String), |items| Value::Map(
	items.iter().map(|(key, item)| (key.clone(), Value::String(item.clone()))).collect()
));
zero_semantic!(BTreeMap<String, Vec<u8>>, FieldType::Mapping(Scalar::String, Scalar::Bytes), |items| Value::Map(
	items.iter().map(|(key, item)| (key.clone(), Value::Bytes(item.clone()))).collect()
));
zero_semantic!(BTreeMap<String, i64>, FieldType::Mapping(Scalar::String, Scalar::Int64), |items| Value::Map(
	items.iter().map(|(key, item)| (key.clone(), Value::I64(*item))).collect()
));
zero_semantic!(BTreeMap<String, Timestamp>, FieldType::Mapping(Scalar::String, Scalar::Timestamp), |items| Value::Map(
	items.iter().map(|(key, item)| (key.clone(), Value::Timestamp(*item))).collect()
));
zero_semantic!(Vec<HistoryBranchRange>, FieldType::RecordSequence("HistoryBranchRange"), |items| Value::Array(
	items.iter().map(|item| Value::Struct(item.to_struct_value())).collect()
));

impl Semantic for Timestamp {
	const FIELD_TYPE: FieldType = FieldType::Scalar(Scalar::Timestamp);

	fn fallback(fallback: Fallback) -> Self {
		match fallback {
			Fallback::Zero => Self::zero(),
			Fallback::UnixEpoch => Self::unix_epoch(),
		}
	}

	fn to_value(&self) -> Value {
		Value::Timestamp(*self)
	}
}

impl HistoryBranchRange {
	fn to_struct_value(&self) -> StructValue {
		StructValue {
			type_name: "HistoryBranchRange".into(),
			fields: vec![
				FieldValue {
					name: "branch_id".into(),
					value: Value::String(self.branch_id.clone()),
				},
				FieldValue {
					name: "begin_node_id".into(),
					value: Value::I64(self.begin_node_id),
				},
				FieldValue {
					name: "end_node_id".into(),
					value: Value::I64(self.end_node_id),
				},
			],
		}
	}
}
