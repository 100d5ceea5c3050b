//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a record snapshot fixture under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Populated snapshot fixture for a record kind label, e.g. `shard_info`.
pub fn populated_fixture(label: &str) -> PathBuf {
	fixture_path(&format!("{label}.json"))
}

/// Read a fixture and return its `record` object.
///
/// Panics when the fixture is missing or malformed; only for tests.
pub fn fixture_record(name: &str) -> serde_json::Value {
	let path = fixture_path(name);
	let raw = std::fs::read(&path).unwrap_or_else(|err| panic!("read {}: {err}", path.display()));
	let mut envelope: serde_json::Value =
		serde_json::from_slice(&raw).unwrap_or_else(|err| panic!("parse {}: {err}", path.display()));
	envelope
		.get_mut("record")
		.map(serde_json::Value::take)
		.unwrap_or(serde_json::Value::Null)
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}
