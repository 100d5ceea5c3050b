use std::fs;
use std::path::Path;

use serde_json::Value as Json;

use crate::record::compression::decode_bytes;
use crate::record::{AnyRecord, Compression, RecordError, RecordKind, Result};

/// Limits and behavior switches for snapshot loading.
#[derive(Debug, Clone)]
pub struct LoadOptions {
	/// Maximum decompressed size of a zstd snapshot.
	pub max_decompressed_bytes: usize,
	/// Reject record keys that are not catalog fields, and envelope keys
	/// other than `kind` and `record`.
	pub strict_fields: bool,
}

impl Default for LoadOptions {
	fn default() -> Self {
		Self {
			max_decompressed_bytes: 64 * 1024 * 1024,
			strict_fields: false,
		}
	}
}

impl LoadOptions {
	/// Preset for schema validation: unknown record fields and envelope
	/// keys are errors.
	pub fn strict() -> Self {
		Self {
			strict_fields: true,
			..Self::default()
		}
	}
}

/// One record read from a JSON snapshot envelope.
///
/// The envelope is `{"kind": "<RecordKind>", "record": {...}}`; a missing
/// or `null` record is the absent record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSnapshot {
	/// Compression mode of the source bytes.
	pub compression: Compression,
	/// Decoded record.
	pub record: AnyRecord,
}

impl RecordSnapshot {
	/// Read, decode, and parse a snapshot file.
	pub fn open(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
		let path = path.as_ref();
		let raw = fs::read(path)?;
		let snapshot = Self::parse(raw, options)?;
		tracing::debug!(
			path = %path.display(),
			kind = %snapshot.record.kind(),
			compression = snapshot.compression.as_str(),
			absent = snapshot.record.is_absent(),
			"loaded record snapshot"
		);
		Ok(snapshot)
	}

	/// Decode and parse snapshot bytes, plain or zstd-compressed.
	pub fn parse(raw: Vec<u8>, options: &LoadOptions) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw, options.max_decompressed_bytes)?;
		let envelope: Json = serde_json::from_slice(&bytes)?;
		let record = parse_envelope(envelope, options)?;
		Ok(Self { compression, record })
	}

	/// Kind of the contained record.
	pub fn kind(&self) -> RecordKind {
		self.record.kind()
	}
}

fn parse_envelope(envelope: Json, options: &LoadOptions) -> Result<AnyRecord> {
	let Json::Object(mut envelope) = envelope else {
		return Err(RecordError::InvalidEnvelope {
			reason: "snapshot is not an object",
		});
	};

	let kind = match envelope.remove("kind") {
		Some(Json::String(name)) => name.parse::<RecordKind>()?,
		Some(_) => {
			return Err(RecordError::InvalidEnvelope {
				reason: "kind is not a string",
			});
		}
		None => return Err(RecordError::InvalidEnvelope { reason: "missing kind" }),
	};

	let record = envelope.remove("record").unwrap_or(Json::Null);
	if options.strict_fields
		&& let Some(key) = envelope.keys().next()
	{
		tracing::warn!(kind = %kind, key = %key, "snapshot envelope key is not kind or record");
		return Err(RecordError::InvalidEnvelope {
			reason: "unexpected envelope key",
		});
	}

	match &record {
		Json::Null => return Ok(AnyRecord::absent(kind)),
		Json::Object(fields) if options.strict_fields => check_fields(kind, fields.keys())?,
		Json::Object(_) => {}
		_ => {
			return Err(RecordError::InvalidEnvelope {
				reason: "record is not an object or null",
			});
		}
	}

	AnyRecord::from_json(kind, record)
}

/// Reject keys that are not catalog fields of `kind`.
pub fn check_fields<'a>(kind: RecordKind, keys: impl IntoIterator<Item = &'a String>) -> Result<()> {
	let known = kind.fields();
	for key in keys {
		if !known.iter().any(|field| field.name == key.as_str()) {
			tracing::warn!(kind = %kind, field = %key, "snapshot field is not in the catalog");
			return Err(RecordError::UnknownField {
				kind: kind.name(),
				field: key.clone(),
			});
		}
	}
	Ok(())
}
