//! Catalog inspection

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use tabled::Tabled;

use crate::error::CliResult;
use crate::loader::load_catalog;
use crate::output::{print_structured, print_table, print_warning, OutputFormat};

/// Arguments of `discovery catalog`
#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Catalog snapshot file (JSON, or YAML for .yaml/.yml)
    #[arg(short, long, env = "DISCOVERY_CATALOG")]
    pub catalog: PathBuf,
}

#[derive(Tabled)]
struct CountRow {
    #[tabled(rename = "Entity")]
    entity: String,
    #[tabled(rename = "Count")]
    count: usize,
}

fn row(entity: impl Into<String>, count: usize) -> CountRow {
    CountRow {
        entity: entity.into(),
        count,
    }
}

/// Execute catalog command
pub fn execute(args: CatalogArgs, format: OutputFormat) -> CliResult<()> {
    let catalog = load_catalog(&args.catalog)?;
    let summary = catalog.summary();

    if format != OutputFormat::Table {
        return print_structured(&summary, format);
    }

    println!(
        "{} {}",
        "Catalog".bold().cyan(),
        summary.version_id.bold()
    );
    println!("{}", "=".repeat(40));
    println!();

    print_table(
        "Entities",
        vec![
            row("genes", summary.gene_count),
            row("answer options", summary.option_count),
            row("weight rows", summary.weight_row_count),
            row("archetype models", summary.model_count),
            row("advice items", summary.advice_count),
            row("triggers", summary.trigger_count),
        ],
    );

    print_table(
        "Advice items per channel",
        summary
            .advice_per_channel
            .iter()
            .map(|(channel, count)| row(channel.as_str(), *count))
            .collect(),
    );

    print_table(
        "Triggers per type",
        summary
            .triggers_per_type
            .iter()
            .map(|(kind, count)| row(kind.as_str(), *count))
            .collect(),
    );

    for channel in summary.empty_channels() {
        print_warning(&format!(
            "channel `{channel}` has no advice items; every computation will fail"
        ));
    }
    if summary.unrecognized_triggers > 0 {
        print_warning(&format!(
            "{} trigger(s) have an unrecognized type and never fire",
            summary.unrecognized_triggers
        ));
    }
    Ok(())
}
