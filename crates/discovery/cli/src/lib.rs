//! Discovery CLI - Command-line interface for the hybrid discovery engine
//!
//! This CLI gives catalog authors and developers a terminal interface to:
//! - Score an answer submission end to end (genes, archetypes, activations)
//! - Compare a computed profile with a single archetype
//! - Inspect a catalog snapshot before it goes live
//! - Look up the trigger rule table

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod loader;
mod output;

use commands::{catalog, compare, compute, rules};
pub use error::{CliError, CliResult};
pub use output::{print_error, OutputFormat};

/// Discovery CLI application
#[derive(Parser, Debug)]
#[command(name = "discovery")]
#[command(about = "Discovery - hybrid gene scoring and archetype matching CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format (table, json, yaml)
    #[arg(short, long, global = true, default_value = "table")]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Score answers, match archetypes and select activation items
    Compute(compute::ComputeArgs),

    /// Compare the computed profile with one archetype
    Compare(compare::CompareArgs),

    /// Summarize a catalog snapshot
    Catalog(catalog::CatalogArgs),

    /// Show the trigger rule table
    Rules,
}

/// Run using the current process arguments.
pub fn run() -> CliResult<()> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Logs go to stderr so structured output stays parseable.
    let filter = if cli.verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();

    match cli.command {
        Commands::Compute(args) => compute::execute(args, cli.output),
        Commands::Compare(args) => compare::execute(args, cli.output),
        Commands::Catalog(args) => catalog::execute(args, cli.output),
        Commands::Rules => rules::execute(cli.output),
    }
}
