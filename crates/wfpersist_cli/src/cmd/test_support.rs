use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use wfpersist_testkit::{fixture_path, target_dir};

static WFPERSIST_BIN: OnceLock<PathBuf> = OnceLock::new();

/// `catalog --json` payload.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogListing {
	pub kinds: Vec<KindSummary>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct KindSummary {
	pub name: String,
	pub label: String,
	pub fields: usize,
}

/// `catalog --kind K --json` payload.
#[derive(Debug, Deserialize)]
pub(crate) struct KindListing {
	pub name: String,
	pub fields: Vec<FieldListing>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FieldListing {
	pub name: String,
	#[serde(rename = "type")]
	pub ty: String,
	pub slot: String,
	pub absent: serde_json::Value,
	pub unset: serde_json::Value,
}

impl KindListing {
	pub fn field(&self, name: &str) -> &FieldListing {
		self.fields
			.iter()
			.find(|item| item.name == name)
			.unwrap_or_else(|| panic!("{} lists no field {name}", self.name))
	}
}

/// `show --json` payload.
#[derive(Debug, Deserialize)]
pub(crate) struct ShowOutput {
	pub kind: String,
	pub compression: String,
	pub absent: bool,
	pub fields: Vec<ShownField>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ShownField {
	pub name: String,
	pub value: serde_json::Value,
}

impl ShowOutput {
	pub fn value(&self, name: &str) -> &serde_json::Value {
		self.fields
			.iter()
			.find(|item| item.name == name)
			.map(|item| &item.value)
			.unwrap_or_else(|| panic!("{} shows no field {name}", self.kind))
	}
}

pub(crate) fn catalog() -> CatalogListing {
	run_json(&["catalog", "--json"])
}

pub(crate) fn catalog_kind(kind: &str) -> KindListing {
	run_json(&["catalog", "--kind", kind, "--json"])
}

/// Run `show --json` on a checked-in fixture, with extra flags.
pub(crate) fn show_fixture(name: &str, flags: &[&str]) -> ShowOutput {
	let path = fixture_arg(name);
	let mut args = vec!["show", path.as_str(), "--json"];
	args.extend_from_slice(flags);
	run_json(&args)
}

pub(crate) fn fixture_arg(name: &str) -> String {
	fixture_path(name).to_string_lossy().into_owned()
}

pub(crate) fn run_wfpersist(args: &[&str]) -> Output {
	Command::new(wfpersist_bin()).args(args).output().expect("wfpersist command executes")
}

/// Stderr of a run that is expected to fail.
pub(crate) fn run_failure(args: &[&str]) -> String {
	let output = run_wfpersist(args);
	assert!(!output.status.success(), "wfpersist {args:?} unexpectedly succeeded");
	String::from_utf8_lossy(&output.stderr).into_owned()
}

fn run_json<T: DeserializeOwned>(args: &[&str]) -> T {
	let output = run_wfpersist(args);
	assert!(
		output.status.success(),
		"wfpersist {args:?} failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).unwrap_or_else(|err| panic!("wfpersist {args:?} printed unexpected json: {err}"))
}

fn wfpersist_bin() -> &'static Path {
	WFPERSIST_BIN.get_or_init(|| {
		let name = if cfg!(windows) { "wfpersist.exe" } else { "wfpersist" };
		let profile = profile_dir();
		let bin = profile.join(name);
		if !bin.is_file() {
			build_bin(profile.file_name().is_some_and(|dir| dir == "release"));
		}
		bin
	})
}

/// `target/<profile>`, derived from the running test executable in
/// `target/<profile>/deps`.
fn profile_dir() -> PathBuf {
	std::env::current_exe()
		.ok()
		.and_then(|exe| exe.parent()?.parent().map(Path::to_path_buf))
		.unwrap_or_else(|| target_dir().join("debug"))
}

fn build_bin(release: bool) {
	let mut command = Command::new(std::env::var_os("CARGO").unwrap_or_else(|| "cargo".into()));
	command.current_dir(env!("CARGO_MANIFEST_DIR")).args(["build", "--quiet", "--bin", "wfpersist"]);
	if release {
		command.arg("--release");
	}
	let status = command.status()
		.expect("cargo build executes");
	assert!(status.success(), "building the wfpersist binary failed");
}
