//! The run command: score a WMT corpus end to end.

use crate::cli::{log, LogLevel, RunArgs};
use crate::dataset::{fetch_wmt16, WmtCorpus};
use crate::experiment::{run_experiment, RunPaths};
use crate::metrics::{load_all, MetricConfig};

pub fn run_experiment_cmd(args: RunArgs, log_level: LogLevel) -> Result<(), String> {
    if args.download {
        let root = fetch_wmt16(&args.data_dir).map_err(|e| e.to_string())?;
        log(
            log_level,
            LogLevel::Verbose,
            &format!("Corpus available at {}", root.display()),
        );
    }

    let mut config = match &args.config {
        Some(path) => MetricConfig::from_json_file(path).map_err(|e| e.to_string())?,
        None => MetricConfig::default(),
    };
    if args.model_dir.is_some() {
        config.model_dir = args.model_dir.clone();
    }

    let corpus = WmtCorpus::wmt16_dev(&args.data_dir);
    let dataset = corpus.load(!args.all_languages).map_err(|e| e.to_string())?;
    log(
        log_level,
        LogLevel::Normal,
        &format!("Loaded {} aligned examples", dataset.len()),
    );

    let metrics = load_all(args.fast, &config).map_err(|e| e.to_string())?;
    log(
        log_level,
        LogLevel::Normal,
        &format!("Loaded {} metrics", metrics.len()),
    );

    let paths = RunPaths::timestamped(&args.results_dir);
    let report = run_experiment(&dataset, &metrics, &paths).map_err(|e| e.to_string())?;

    log(
        log_level,
        LogLevel::Normal,
        &format!(
            "Wrote {} columns x {} rows to {}",
            report.columns.len(),
            report.examples,
            report.final_table.display()
        ),
    );
    for (method, path) in &report.correlations {
        log(
            log_level,
            LogLevel::Normal,
            &format!("{method} correlations: {}", path.display()),
        );
    }

    Ok(())
}
