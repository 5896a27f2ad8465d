//! Output formatting for CLI

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::CliResult;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Print a serializable value as JSON or YAML.
///
/// Table output is rendered by each command, so `Table` falls back to JSON.
pub fn print_structured<T: Serialize + ?Sized>(data: &T, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table | OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(data)?);
        }
    }
    Ok(())
}

/// Print a titled table, or a dimmed placeholder when there are no rows.
pub fn print_table<T: Tabled>(title: &str, rows: Vec<T>) {
    println!("{}", title.bold().cyan());
    if rows.is_empty() {
        println!("  {}", "No results".dimmed());
    } else {
        println!("{}", Table::new(rows));
    }
    println!();
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Fixed-precision rendering for table cells.
pub fn score(value: f64) -> String {
    format!("{value:.2}")
}
