//! The score command: ad-hoc scoring of inline pairs, JSON output.

use std::fs;
use std::path::Path;

use crate::cli::{LogLevel, ScoreArgs};
use crate::metrics::{load_all, MetricConfig, MetricScores};

/// Demo pair used when no files are given.
const DEMO_REFERENCES: [&str; 2] = ["I like my cakes very much", "I hate these cakes!"];
const DEMO_PREDICTIONS: [&str; 2] = ["I adore my cakes", "These cakes are bad!"];

pub fn run_score(args: ScoreArgs, _log_level: LogLevel) -> Result<(), String> {
    let (references, predictions) = match (&args.references, &args.predictions) {
        (Some(ref_path), Some(pred_path)) => (read_lines(ref_path)?, read_lines(pred_path)?),
        _ => (
            DEMO_REFERENCES.iter().map(|s| s.to_string()).collect(),
            DEMO_PREDICTIONS.iter().map(|s| s.to_string()).collect(),
        ),
    };

    let config = match &args.config {
        Some(path) => MetricConfig::from_json_file(path).map_err(|e| e.to_string())?,
        None => MetricConfig::default(),
    };

    let metrics = load_all(true, &config).map_err(|e| e.to_string())?;

    let mut all_columns = MetricScores::new();
    for (_, metric) in &metrics {
        let columns = metric
            .score(&references, &predictions)
            .map_err(|e| e.to_string())?;
        all_columns.extend(columns);
    }

    let json = serde_json::to_string_pretty(&all_columns).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn read_lines(path: &Path) -> Result<Vec<String>, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(text.lines().map(|line| line.trim().to_string()).collect())
}
