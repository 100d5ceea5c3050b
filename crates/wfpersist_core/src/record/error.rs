use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, RecordError>;

/// Errors produced at the record boundary: loading snapshots and resolving
/// record kinds. Accessors themselves never fail.
#[derive(Debug, Error)]
pub enum RecordError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Malformed JSON or a value that does not fit the record schema.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Input is neither JSON nor a zstd frame.
	#[error("unsupported compression or not a record snapshot (magic={magic:?})")]
	UnknownMagic {
		/// First up-to-4 bytes of the stream.
		magic: [u8; 4],
	},
	/// Decompressed stream is not a JSON object.
	#[error("decompressed data is not a JSON snapshot")]
	NotJsonAfterDecompress,
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Record kind name is not part of the catalog.
	#[error("unknown record kind: {name}")]
	UnknownRecordKind {
		/// Requested kind name.
		name: String,
	},
	/// Strict loading found a key that is not a catalog field.
	#[error("unknown field {field} on {kind}")]
	UnknownField {
		/// Record type name.
		kind: &'static str,
		/// Offending key.
		field: String,
	},
	/// Snapshot envelope does not have the expected shape.
	#[error("invalid snapshot envelope: {reason}")]
	InvalidEnvelope {
		/// What was wrong with it.
		reason: &'static str,
	},
}
