//! `dotted`: read or edit a JSON document through dotted paths.
//!
//! Usage:
//!   dotted [--pretty] get '<path>'
//!   dotted [--pretty] set '<path>' '<json-value>'
//!   dotted [--pretty] del '<path>'
//!   dotted has '<path>'
//!
//! The document is read from stdin. Results are written to stdout as JSON.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dotted::cli::{delete_path, has_path, lookup_path, set_path, CliError, OutputOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dotted")]
#[command(about = "Read or edit a JSON document from stdin using dotted paths")]
#[command(version)]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true, env = "DOTTED_PRETTY")]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the value at a path
    Get { path: String },
    /// Store a JSON value at a path and print the updated document
    Set { path: String, value: String },
    /// Remove the value at a path and print the updated document
    Del { path: String },
    /// Print whether a path exists
    Has { path: String },
}

fn run(cli: &Cli, doc: &str) -> Result<String, CliError> {
    let options = OutputOptions { pretty: cli.pretty };
    match &cli.command {
        Command::Get { path } => lookup_path(doc, path, options),
        Command::Set { path, value } => set_path(doc, path, value, options),
        Command::Del { path } => delete_path(doc, path, options),
        Command::Has { path } => has_path(doc, path).map(|found| found.to_string()),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dotted=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(&cli, buf.trim()) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{result}") {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
