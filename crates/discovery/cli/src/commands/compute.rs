//! Run the full hybrid pipeline for one submission

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use discovery_engine::HybridPipeline;
use discovery_types::{Catalog, HybridOutcome};
use tabled::Tabled;

use super::SubmissionArgs;
use crate::error::CliResult;
use crate::loader::{load_answers, load_catalog, load_config};
use crate::output::{print_structured, print_table, score, OutputFormat};

/// Arguments of `discovery compute`
#[derive(Args, Debug, Clone)]
pub struct ComputeArgs {
    #[command(flatten)]
    pub submission: SubmissionArgs,

    /// Engine configuration file (JSON or YAML)
    #[arg(long, env = "DISCOVERY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of archetype matches to return (overrides the config file)
    #[arg(short = 'n', long, env = "DISCOVERY_TOP_N")]
    pub top_n: Option<usize>,
}

#[derive(Tabled)]
struct GeneRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Gene")]
    gene: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Raw")]
    raw: String,
    #[tabled(rename = "Score")]
    normalized: String,
    #[tabled(rename = "Role")]
    role: String,
}

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Similarity")]
    similarity: String,
}

#[derive(Tabled)]
struct ActivationRow {
    #[tabled(rename = "Channel")]
    channel: String,
    #[tabled(rename = "Advice")]
    advice: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Priority")]
    priority: i32,
    #[tabled(rename = "Source")]
    source: String,
}

/// Execute compute command
pub fn execute(args: ComputeArgs, format: OutputFormat) -> CliResult<()> {
    let config = load_config(args.config.as_deref())?;
    let catalog = load_catalog(&args.submission.catalog)?;
    let answers = load_answers(&args.submission.answers)?;

    let config = match args.top_n {
        Some(top_n) => config.with_top_n_matches(top_n),
        None => config,
    };
    let outcome = HybridPipeline::new(config).run(&catalog, &answers)?;

    match format {
        OutputFormat::Table => render(&catalog, &outcome),
        _ => print_structured(&outcome, format)?,
    }
    Ok(())
}

fn render(catalog: &Catalog, outcome: &HybridOutcome) {
    println!(
        "{} {}",
        "Discovery profile".bold().cyan(),
        format!("(catalog {})", catalog.version_id).dimmed()
    );
    println!("{}", "=".repeat(60));
    println!();

    let genes = outcome
        .gene_scores
        .iter()
        .map(|g| GeneRow {
            rank: g.rank,
            gene: g.gene_code.clone(),
            name: catalog
                .genes
                .get(&g.gene_code)
                .map(|gene| gene.name.clone())
                .unwrap_or_default(),
            raw: format!("{:.4}", g.raw_score),
            normalized: score(g.normalized_score),
            role: g.role.to_string(),
        })
        .collect();
    print_table("Gene scores", genes);

    let matches = outcome
        .model_matches
        .iter()
        .map(|m| MatchRow {
            rank: m.rank,
            model: m.model_code.clone(),
            name: catalog
                .models
                .get(&m.model_code)
                .map(|model| model.name.clone())
                .unwrap_or_default(),
            similarity: format!("{}%", score(m.percentage())),
        })
        .collect();
    print_table("Archetype matches", matches);

    let activations = outcome
        .activation_items
        .iter()
        .map(|a| ActivationRow {
            channel: a.channel.to_string(),
            advice: a.advice_id.clone(),
            title: a.title.clone(),
            priority: a.priority,
            source: a
                .trigger_id
                .clone()
                .unwrap_or_else(|| "fallback".to_string()),
        })
        .collect();
    print_table("Activation items", activations);
}
