//! Cotejar CLI
//!
//! Experiment entry point for the cotejar library.
//!
//! # Usage
//!
//! ```bash
//! # Score the WMT16 dev corpus with every metric, downloading if needed
//! cotejar run --download
//!
//! # Surface metrics only (no encoder model required)
//! cotejar run --fast
//!
//! # Point the embedding-family metrics at a local encoder
//! cotejar run --model-dir models/bert-base-uncased
//!
//! # Score the built-in demo pair and print JSON
//! cotejar score
//! ```

use clap::Parser;
use cotejar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
