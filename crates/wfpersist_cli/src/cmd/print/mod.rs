use wfpersist::record::Value;

/// Output truncation and formatting limits for accessor output trees.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of bytes rendered as hex before eliding the rest.
	pub max_bytes_preview: usize,
	/// Maximum number of elements printed for arrays and maps.
	pub max_array_items: usize,
	/// Maximum recursive print depth for nested values.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_string_len: 200,
			max_bytes_preview: 32,
			max_array_items: 16,
			max_print_depth: 6,
		}
	}
}

impl PrintOptions {
	/// Preset that prints every value in full.
	pub fn unbounded() -> Self {
		Self {
			max_string_len: usize::MAX,
			max_bytes_preview: usize::MAX,
			max_array_items: usize::MAX,
			max_print_depth: u32::MAX,
		}
	}
}

/// Print one accessor output value tree.
pub fn print_value(value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Array(items) => {
			if items.is_empty() {
				println!("{pad}[]");
				return;
			}
			if depth >= options.max_print_depth {
				println!("{pad}[... {} items]", items.len());
				return;
			}
			println!("{pad}[");
			for item in items.iter().take(options.max_array_items) {
				print_value(item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_array_items {
				println!("{pad}  ... {} more", items.len() - options.max_array_items);
			}
			println!("{pad}]");
		}
		Value::Map(items) => {
			if items.is_empty() {
				println!("{pad}{{}}");
				return;
			}
			if depth >= options.max_print_depth {
				println!("{pad}{{... {} entries}}", items.len());
				return;
			}
			println!("{pad}{{");
			for (key, item) in items.iter().take(options.max_array_items) {
				print!("{pad}  \"{}\" => ", truncate(key, options.max_string_len));
				print_nested(item, indent + 4, depth + 1, options);
			}
			if items.len() > options.max_array_items {
				println!("{pad}  ... {} more", items.len() - options.max_array_items);
			}
			println!("{pad}}}");
		}
		Value::Struct(item) => {
			if depth >= options.max_print_depth {
				println!("{pad}{} {{ ... }}", item.type_name);
				return;
			}
			println!("{pad}{} {{", item.type_name);
			for field in &item.fields {
				print!("{pad}  {} = ", field.name);
				print_nested(&field.value, indent + 4, depth + 1, options);
			}
			println!("{pad}}}");
		}
		scalar => println!("{pad}{}", format_scalar(scalar, options)),
	}
}

fn print_nested(value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let nested = match value {
		Value::Array(items) => !items.is_empty(),
		Value::Map(items) => !items.is_empty(),
		Value::Struct(_) => true,
		_ => false,
	};
	if nested {
		println!();
		print_value(value, indent, depth, options);
	} else {
		print_value(value, 0, depth, options);
	}
}

/// Render a scalar value on one line. Containers render as a summary.
pub fn format_scalar(value: &Value, options: PrintOptions) -> String {
	match value {
		Value::Bool(item) => item.to_string(),
		Value::I16(item) => item.to_string(),
		Value::I32(item) => item.to_string(),
		Value::I64(item) => item.to_string(),
		Value::F64(item) => item.to_string(),
		Value::Duration(item) => format!("{item:?}"),
		Value::Timestamp(item) => item.to_string(),
		Value::String(item) => format!("\"{}\"", truncate(item, options.max_string_len)),
		Value::Bytes(item) => format_bytes(item, options.max_bytes_preview),
		Value::Array(items) => format!("[{} items]", items.len()),
		Value::Map(items) => format!("{{{} entries}}", items.len()),
		Value::Struct(item) => format!("{} {{ ... }}", item.type_name),
	}
}

fn format_bytes(bytes: &[u8], max_preview: usize) -> String {
	if bytes.is_empty() {
		return "bytes[0]".to_owned();
	}
	if bytes.len() <= max_preview {
		return format!("bytes[{}] {}", bytes.len(), hex::encode(bytes));
	}
	format!("bytes[{}] {}...", bytes.len(), hex::encode(&bytes[..max_preview]))
}

fn truncate(input: &str, max_chars: usize) -> String {
	let mut out = String::new();
	for (idx, ch) in input.chars().enumerate() {
		if idx >= max_chars {
			out.push_str("...");
			break;
		}
		out.push(ch);
	}
	out
}
