//! Compare a computed profile with one archetype

use clap::Args;
use colored::Colorize;
use discovery_engine::{compare_with_model, compute_gene_scores, compute_model_matches};
use discovery_types::GeneComparison;
use serde::Serialize;
use tabled::Tabled;

use super::SubmissionArgs;
use crate::error::{CliError, CliResult};
use crate::loader::{load_answers, load_catalog};
use crate::output::{print_structured, print_table, score, OutputFormat};

/// Arguments of `discovery compare`
#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub submission: SubmissionArgs,

    /// Archetype model code (defaults to the best match)
    #[arg(short, long)]
    pub model: Option<String>,
}

/// Comparison of the profile against one archetype.
#[derive(Debug, Serialize)]
struct ComparisonReport {
    model_code: String,
    name: String,
    similarity: f64,
    rank: usize,
    genes: Vec<GeneComparison>,
}

#[derive(Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Gene")]
    gene: String,
    #[tabled(rename = "You")]
    user: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Difference")]
    difference: String,
}

/// Execute compare command
pub fn execute(args: CompareArgs, format: OutputFormat) -> CliResult<()> {
    let catalog = load_catalog(&args.submission.catalog)?;
    let answers = load_answers(&args.submission.answers)?;

    let gene_scores = compute_gene_scores(&catalog.genes, &catalog.weights, &answers)?;
    // Rank every model so any requested code has a similarity and rank.
    let matches = compute_model_matches(&gene_scores, &catalog.models, catalog.models.len());

    let model_code = match args.model {
        Some(code) => code,
        None => matches
            .first()
            .map(|m| m.model_code.clone())
            .ok_or_else(|| CliError::NotFound("catalog has no archetype models".to_string()))?,
    };
    let model = catalog
        .models
        .get(&model_code)
        .ok_or_else(|| CliError::NotFound(format!("archetype model `{model_code}`")))?;
    let matched = matches
        .iter()
        .find(|m| m.model_code == model_code)
        .ok_or_else(|| CliError::NotFound(format!("archetype model `{model_code}`")))?;

    let report = ComparisonReport {
        model_code: model.model_code.clone(),
        name: model.name.clone(),
        similarity: matched.similarity,
        rank: matched.rank,
        genes: compare_with_model(&gene_scores, model),
    };

    match format {
        OutputFormat::Table => render(&report),
        _ => print_structured(&report, format)?,
    }
    Ok(())
}

fn render(report: &ComparisonReport) {
    println!(
        "{} {} {}",
        "Comparison with".bold().cyan(),
        report.model_code.bold(),
        report.name.dimmed()
    );
    println!(
        "  Rank {} of all archetypes, similarity {}%",
        report.rank.to_string().yellow(),
        score(report.similarity * 100.0).yellow()
    );
    println!();

    let rows = report
        .genes
        .iter()
        .map(|row| ComparisonRow {
            gene: row.gene_code.clone(),
            user: format!("{:.4}", row.user_score),
            model: format!("{:.4}", row.model_score),
            difference: format!("{:.4}", row.difference),
        })
        .collect();
    print_table("Closest genes first", rows);
}
