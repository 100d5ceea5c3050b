use std::io::Read;

use crate::record::{RecordError, Result};

/// zstd frame magic used by compressed snapshots.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Raw JSON.
	None,
	/// zstd-compressed JSON.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Detect and decode compression, returning `(mode, decoded_bytes)`.
pub fn decode_bytes(raw: Vec<u8>, limit: usize) -> Result<(Compression, Vec<u8>)> {
	if looks_like_json(&raw) {
		return Ok((Compression::None, raw));
	}

	if raw.starts_with(&ZSTD_MAGIC) {
		let out = decode_zstd(&raw, limit)?;
		return Ok((Compression::Zstd, out));
	}

	Err(RecordError::UnknownMagic { magic: first4(&raw) })
}

fn decode_zstd(raw: &[u8], limit: usize) -> Result<Vec<u8>> {
	let mut decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > limit {
			return Err(RecordError::DecompressedTooLarge { limit });
		}

		out.extend_from_slice(&buf[..read]);
	}

	if !looks_like_json(&out) {
		return Err(RecordError::NotJsonAfterDecompress);
	}

	Ok(out)
}

/// First non-whitespace byte can open a JSON document of any shape. The
/// envelope shape is checked after parsing.
fn looks_like_json(bytes: &[u8]) -> bool {
	match bytes.iter().find(|byte| !byte.is_ascii_whitespace()) {
		Some(b'{' | b'[' | b'"' | b'-' | b't' | b'f' | b'n') => true,
		Some(byte) => byte.is_ascii_digit(),
		None => false,
	}
}

fn first4(bytes: &[u8]) -> [u8; 4] {
	let mut magic = [0_u8; 4];
	let take = bytes.len().min(4);
	magic[..take].copy_from_slice(&bytes[..take]);
	magic
}
