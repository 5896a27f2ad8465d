//! Subcommand implementations

pub mod catalog;
pub mod compare;
pub mod compute;
pub mod rules;

use std::path::PathBuf;

use clap::Args;

use crate::loader::AnswerArgs;

/// A catalog plus one answer submission.
#[derive(Args, Debug, Clone)]
pub struct SubmissionArgs {
    /// Catalog snapshot file (JSON, or YAML for .yaml/.yml)
    #[arg(short, long, env = "DISCOVERY_CATALOG")]
    pub catalog: PathBuf,

    #[command(flatten)]
    pub answers: AnswerArgs,
}
