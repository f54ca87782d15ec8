//! Runs the language playground examples and checks what they print.
//!
//! Each example is a small demonstration (optionals, closures, enums,
//! initialization, error propagation, ...) registered with the lines it is
//! expected to print. With no subcommand every example runs and the process
//! exits non-zero if any of them failed.

mod catalog;
mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use harness::exit_codes;

#[derive(Parser)]
#[command(
    name = "playground",
    version,
    about = "Run the language playground examples and check their output"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run examples (all of them unless names or a filter are given).
    Run(RunArgs),
    /// Print every registered example with its topic.
    List {
        /// Only list examples whose name or topic matches this regex.
        #[arg(long)]
        filter: Option<String>,
    },
    /// Run one example and print its captured output verbatim.
    Show { name: String },
}

#[derive(Args, Default)]
struct RunArgs {
    /// Example names to run, in the order given.
    names: Vec<String>,
    /// Only run examples whose name or topic matches this regex.
    #[arg(long, conflicts_with = "names")]
    filter: Option<String>,
    /// Show expected and actual line under each failure.
    #[arg(short, long)]
    verbose: bool,
    /// Also write a JSON report to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() {
    harness::logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::FAILED);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let registry = catalog::registry()?;
    match cli.command.unwrap_or(Command::Run(RunArgs::default())) {
        Command::Run(args) => cli::run_examples(
            &registry,
            &cli::RunOptions {
                names: args.names,
                filter: args.filter,
                verbose: args.verbose,
                report: args.report,
            },
        ),
        Command::List { filter } => cli::list_examples(&registry, filter.as_deref()),
        Command::Show { name } => cli::show_example(&registry, &name),
    }
}
