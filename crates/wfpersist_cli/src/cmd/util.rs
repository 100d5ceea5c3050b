use serde::Serialize;
use wfpersist::record::{Result, Value};

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// Render an accessor output value as JSON.
///
/// Bytes become lowercase hex, durations `{"secs", "nanos"}`, timestamps
/// RFC 3339 text, nested records objects in field order.
pub(crate) fn value_json(value: &Value) -> serde_json::Value {
	match value {
		Value::Bool(item) => serde_json::Value::Bool(*item),
		Value::I16(item) => (*item).into(),
		Value::I32(item) => (*item).into(),
		Value::I64(item) => (*item).into(),
		Value::F64(item) => (*item).into(),
		Value::Duration(item) => serde_json::json!({
			"secs": item.as_secs(),
			"nanos": item.subsec_nanos(),
		}),
		Value::Timestamp(item) => serde_json::Value::String(item.to_string()),
		Value::String(item) => serde_json::Value::String(item.clone()),
		Value::Bytes(item) => serde_json::Value::String(hex::encode(item)),
		Value::Array(items) => serde_json::Value::Array(items.iter().map(value_json).collect()),
		Value::Map(items) => serde_json::Value::Object(items.iter().map(|(key, item)| (key.clone(), value_json(item))).collect()),
		Value::Struct(item) => serde_json::Value::Object(
			item.fields
				.iter()
				.map(|field| (field.name.to_string(), value_json(&field.value)))
				.collect(),
		),
	}
}
