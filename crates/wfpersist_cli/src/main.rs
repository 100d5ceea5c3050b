#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "wfpersist", about = "Workflow persistence record inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// List record kinds, or one kind's fields and defaults.
	Catalog(cmd::catalog::Args),
	/// Load a record snapshot and print its accessor output.
	Show(cmd::show::Args),
}

fn main() {
	init_tracing();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run() -> wfpersist::record::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Catalog(args) => cmd::catalog::run(args),
		Commands::Show(args) => cmd::show::run(args),
	}
}
