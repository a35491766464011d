//! # postfill CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use postfill_cli::countries::{run_countries, CountriesArgs};
use postfill_cli::field_order::{run_field_order, FieldOrderArgs};
use postfill_cli::lookup::{run_lookup, LookupArgs};
use postfill_cli::validate::{run_validate, ValidateArgs};

/// Postcode autofill toolchain.
///
/// Resolves postcodes against per-country datasets, validates dataset
/// files, lists servable countries, and previews checkout field ordering.
#[derive(Parser, Debug)]
#[command(name = "postfill", version, about)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a postcode to locality and state.
    Lookup(LookupArgs),

    /// Parse and invariant-check dataset files.
    Validate(ValidateArgs),

    /// List servable datasets in a data directory.
    Countries(CountriesArgs),

    /// Print the effective address-field priorities.
    #[command(name = "field-order")]
    FieldOrder(FieldOrderArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Lookup(args) => run_lookup(&args),
        Commands::Validate(args) => run_validate(&args),
        Commands::Countries(args) => run_countries(&args),
        Commands::FieldOrder(args) => run_field_order(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(error) => {
            tracing::error!("{error:#}");
            ExitCode::from(1)
        }
    }
}
