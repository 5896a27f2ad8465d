//! Trigger rule reference

use colored::Colorize;
use discovery_engine::rule_table;
use tabled::Tabled;

use crate::error::CliResult;
use crate::output::{print_structured, print_table, OutputFormat};

#[derive(Tabled)]
struct RuleRow {
    #[tabled(rename = "Trigger type")]
    trigger_type: &'static str,
    #[tabled(rename = "Aliases")]
    aliases: String,
    #[tabled(rename = "Condition")]
    condition: &'static str,
}

/// Execute rules command
pub fn execute(format: OutputFormat) -> CliResult<()> {
    let table = rule_table();

    if format != OutputFormat::Table {
        return print_structured(&table, format);
    }

    let rows = table
        .into_iter()
        .map(|rule| RuleRow {
            trigger_type: rule.trigger_type,
            aliases: rule.aliases.join(", "),
            condition: rule.condition,
        })
        .collect();
    print_table("Trigger rules", rows);
    println!(
        "{}: a trigger also needs its gene and model scores inside [min_score, max_score]",
        "Note".bold()
    );
    println!(
        "{}: channels without a qualifying trigger fall back to their highest-priority item",
        "Note".bold()
    );
    Ok(())
}
