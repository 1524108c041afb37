//! CLI command implementations

mod run;
mod score;

#[cfg(test)]
mod tests;

use crate::cli::{Cli, Command, LogLevel};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    // Configure output based on verbose/quiet flags
    let log_level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    match cli.command {
        Command::Run(args) => run::run_experiment_cmd(args, log_level),
        Command::Score(args) => score::run_score(args, log_level),
    }
}
