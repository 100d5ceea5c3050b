use std::path::PathBuf;

use wfpersist::record::{LoadOptions, RecordSnapshot, Result, Value};

use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::util::{emit_json, value_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Reject record keys that are not catalog fields.
	#[arg(long)]
	pub strict: bool,
	#[arg(long)]
	pub json: bool,
	/// Print strings, bytes, and containers without truncation.
	#[arg(long)]
	pub full: bool,
	#[arg(long = "max-bytes")]
	pub max_decompressed_bytes: Option<usize>,
}

/// Load a record snapshot and print the output of every accessor.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		strict,
		json,
		full,
		max_decompressed_bytes,
	} = args;

	let mut load = if strict { LoadOptions::strict() } else { LoadOptions::default() };
	if let Some(limit) = max_decompressed_bytes {
		load.max_decompressed_bytes = limit;
	}

	let snapshot = RecordSnapshot::open(&path, &load)?;
	let values = snapshot.record.values();
	tracing::debug!(fields = values.fields.len(), "rendering accessor output");

	if json {
		let payload = ShowJson {
			path: path.display().to_string(),
			kind: snapshot.kind().name(),
			compression: snapshot.compression.as_str(),
			absent: snapshot.record.is_absent(),
			fields: values
				.fields
				.iter()
				.map(|field| FieldJson {
					name: field.name.to_string(),
					value: value_json(&field.value),
				})
				.collect(),
		};
		return emit_json(&payload);
	}

	let print = if full { PrintOptions::unbounded() } else { PrintOptions::default() };
	println!("path: {}", path.display());
	println!("kind: {}", snapshot.kind());
	println!("compression: {}", snapshot.compression.as_str());
	println!("absent: {}", snapshot.record.is_absent());
	println!("value:");
	print_value(&Value::Struct(values), 2, 0, print);

	Ok(())
}

#[derive(serde::Serialize)]
struct ShowJson {
	path: String,
	kind: &'static str,
	compression: &'static str,
	absent: bool,
	fields: Vec<FieldJson>,
}

#[derive(serde::Serialize)]
struct FieldJson {
	name: String,
	value: serde_json::Value,
}
