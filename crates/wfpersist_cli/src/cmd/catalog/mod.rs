use wfpersist::record::{FieldSpec, RecordKind, Result};

use crate::cmd::print::{PrintOptions, format_scalar};
use crate::cmd::util::{emit_json, value_json};

#[derive(clap::Args)]
pub struct Args {
	/// Record kind name or label, e.g. `ShardInfo` or `shard_info`.
	#[arg(long)]
	pub kind: Option<String>,
	#[arg(long)]
	pub json: bool,
}

/// List record kinds, or the ordered fields of one kind with their defaults.
pub fn run(args: Args) -> Result<()> {
	let Args { kind, json } = args;

	match kind {
		Some(name) => print_kind(name.parse()?, json),
		None => print_kinds(json),
	}
}

fn print_kinds(json: bool) -> Result<()> {
	if json {
		let payload = KindsJson {
			kinds: RecordKind::ALL
				.iter()
				.map(|kind| KindSummaryJson {
					name: kind.name(),
					label: kind.label(),
					fields: kind.fields().len(),
				})
				.collect(),
		};
		return emit_json(&payload);
	}

	println!("kinds: {}", RecordKind::ALL.len());
	println!("name\tlabel\tfields");
	for kind in RecordKind::ALL {
		println!("{}\t{}\t{}", kind.name(), kind.label(), kind.fields().len());
	}
	Ok(())
}

fn print_kind(kind: RecordKind, json: bool) -> Result<()> {
	if json {
		let payload = KindJson {
			name: kind.name(),
			label: kind.label(),
			fields: kind.fields().iter().map(field_json).collect(),
		};
		return emit_json(&payload);
	}

	let options = PrintOptions::default();
	println!("kind: {}", kind.name());
	println!("label: {}", kind.label());
	println!("fields: {}", kind.fields().len());
	println!("name\ttype\tslot\tabsent\tunset");
	for field in kind.fields() {
		println!(
			"{}\t{}\t{}\t{}\t{}",
			field.name,
			field.ty,
			field.slot.as_str(),
			format_scalar(&field.absent_value(), options),
			format_scalar(&field.unset_value(), options)
		);
	}
	Ok(())
}

fn field_json(field: &FieldSpec) -> FieldJson {
	FieldJson {
		name: field.name,
		ty: field.ty.to_string(),
		slot: field.slot.as_str(),
		absent: value_json(&field.absent_value()),
		unset: value_json(&field.unset_value()),
	}
}

#[derive(serde::Serialize)]
struct KindsJson {
	kinds: Vec<KindSummaryJson>,
}

#[derive(serde::Serialize)]
struct KindSummaryJson {
	name: &'static str,
	label: &'static str,
	fields: usize,
}

#[derive(serde::Serialize)]
struct KindJson {
	name: &'static str,
	label: &'static str,
	fields: Vec<FieldJson>,
}

#[derive(serde::Serialize)]
struct FieldJson {
	name: &'static str,
	#[serde(rename = "type")]
	ty: String,
	slot: &'static str,
	absent: serde_json::Value,
	unset: serde_json::Value,
}
