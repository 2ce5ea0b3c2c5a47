#![allow(missing_docs)]

use clap::{Parser, Subcommand};

use crate::cmd::util::InputArgs;

mod cmd;

#[derive(Parser)]
#[command(name = "dynconv", about = "Coerce loosely-typed JSON values into concrete types")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Render the input as text.
	Text(InputArgs),
	/// Convert the input to a signed 64-bit integer.
	Int(InputArgs),
	/// Convert the input to a 64-bit float.
	Float(InputArgs),
	/// Convert the input to a boolean.
	Bool(InputArgs),
	/// Convert the input to a list of values.
	List(InputArgs),
	/// Convert the input to a list of text.
	TextList(InputArgs),
	/// Convert the input to a list of integers.
	IntList(InputArgs),
	/// Normalize the input into a string-keyed map.
	Map(cmd::map::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cmd::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Text(args) => cmd::scalar::run(args, cmd::scalar::Target::Text),
		Commands::Int(args) => cmd::scalar::run(args, cmd::scalar::Target::Int),
		Commands::Float(args) => cmd::scalar::run(args, cmd::scalar::Target::Float),
		Commands::Bool(args) => cmd::scalar::run(args, cmd::scalar::Target::Bool),
		Commands::List(args) => cmd::list::run(args, cmd::list::Target::Values),
		Commands::TextList(args) => cmd::list::run(args, cmd::list::Target::Text),
		Commands::IntList(args) => cmd::list::run(args, cmd::list::Target::Int),
		Commands::Map(args) => cmd::map::run(args),
	}
}
