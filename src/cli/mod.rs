//! CLI module for cotejar
//!
//! Argument definitions, command handlers, and output utilities.

mod commands;
mod logging;

pub use commands::run_command;
pub use logging::{log, LogLevel};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cotejar: text-similarity metric aggregation and human-judgment correlation
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "cotejar")]
#[command(version)]
#[command(about = "Score MT evaluation corpora with a battery of similarity metrics \
and correlate the results against human judgments")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the full experiment over a WMT corpus
    Run(RunArgs),

    /// Score inline reference/prediction pairs and print JSON
    Score(ScoreArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Directory holding (or receiving) the corpus
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Root directory for timestamped run output
    #[arg(long, default_value = "results")]
    pub results_dir: PathBuf,

    /// Load only the fast surface metrics
    #[arg(long)]
    pub fast: bool,

    /// Include every language pair, not just into-English
    #[arg(long)]
    pub all_languages: bool,

    /// Encoder model directory for the embedding-family metrics
    #[arg(long)]
    pub model_dir: Option<PathBuf>,

    /// Download the corpus first if it is not present locally
    #[arg(long)]
    pub download: bool,

    /// Path to a JSON metric configuration
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the score command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ScoreArgs {
    /// Newline-delimited reference file (omit both for the built-in demo pair)
    #[arg(long, requires = "predictions")]
    pub references: Option<PathBuf>,

    /// Newline-delimited prediction file
    #[arg(long, requires = "references")]
    pub predictions: Option<PathBuf>,

    /// Path to a JSON metric configuration
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
