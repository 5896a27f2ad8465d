//! Reading catalogs, answers and engine configuration from disk.
//!
//! Files ending in `.yaml` or `.yml` are parsed as YAML, everything else as
//! JSON.

use std::fs;
use std::path::Path;

use clap::Args;
use discovery_engine::EngineConfig;
use discovery_types::{Answer, Catalog, CatalogSnapshot};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Answer sources shared by the scoring commands.
#[derive(Args, Debug, Clone, Default)]
pub struct AnswerArgs {
    /// File with a list of `{scenario_code, option_code}` answers
    #[arg(long = "answers", value_name = "FILE")]
    pub answers_file: Option<std::path::PathBuf>,

    /// Inline answer as SCENARIO=OPTION (repeatable)
    #[arg(short = 'a', long = "answer", value_name = "SCENARIO=OPTION")]
    pub answer: Vec<String>,
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn read_document<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let text = fs::read_to_string(path)?;
    if is_yaml(path) {
        Ok(serde_yaml::from_str(&text)?)
    } else {
        Ok(serde_json::from_str(&text)?)
    }
}

/// Load and index a catalog snapshot. A catalog without genes is rejected.
pub fn load_catalog(path: &Path) -> CliResult<Catalog> {
    let snapshot: CatalogSnapshot = read_document(path)?;
    if snapshot.genes.is_empty() {
        return Err(CliError::InvalidCatalog(format!(
            "catalog `{}` declares no genes",
            path.display()
        )));
    }

    let catalog = Catalog::from_snapshot(snapshot);
    debug!(
        path = %path.display(),
        version = %catalog.version_id,
        genes = catalog.genes.len(),
        models = catalog.models.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// Parse one `SCENARIO=OPTION` pair.
pub fn parse_answer(raw: &str) -> CliResult<Answer> {
    match raw.split_once('=') {
        Some((scenario, option)) if !scenario.trim().is_empty() && !option.trim().is_empty() => {
            Ok(Answer::new(scenario.trim(), option.trim()))
        }
        _ => Err(CliError::InvalidArgument(format!(
            "answer `{raw}` must look like SCENARIO=OPTION"
        ))),
    }
}

/// Answers from the file first, then the inline pairs in order.
pub fn load_answers(args: &AnswerArgs) -> CliResult<Vec<Answer>> {
    let mut answers: Vec<Answer> = match &args.answers_file {
        Some(path) => read_document(path)?,
        None => Vec::new(),
    };
    for raw in &args.answer {
        answers.push(parse_answer(raw)?);
    }
    debug!(answers = answers.len(), "collected answers");
    Ok(answers)
}

/// Engine settings from an optional config file, defaults otherwise.
pub fn load_config(path: Option<&Path>) -> CliResult<EngineConfig> {
    match path {
        Some(path) => {
            let config: EngineConfig = read_document(path)?;
            debug!(path = %path.display(), top_n = config.top_n_matches, "loaded engine config");
            Ok(config)
        }
        None => Ok(EngineConfig::default()),
    }
}
