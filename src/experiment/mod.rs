//! Experiment driver
//!
//! Orchestrates scoring over one dataset and one registry: a sequential
//! loop that appends each metric's columns to the result table,
//! checkpoints after every metric, then finalizes, correlates, and
//! deletes the checkpoint. A crash after metric *k* loses no work for
//! metrics 1..k; the last checkpoint stays on disk for inspection.

mod correlation;
mod error;
mod table;


pub use correlation::{kendall, pearson, spearman, CorrMethod, CorrelationMatrix};
pub use error::ExperimentError;
pub use table::{ResultTable, HUMAN_SCORES};

use std::fs;
use std::path::{Path, PathBuf};

use crate::dataset::EvaluationDataset;
use crate::metrics::TextMetric;

/// On-disk layout of one experiment run.
#[derive(Clone, Debug)]
pub struct RunPaths {
    pub run_dir: PathBuf,
    pub checkpoint: PathBuf,
    pub final_table: PathBuf,
    pub correlations_dir: PathBuf,
}

impl RunPaths {
    pub fn new(run_dir: PathBuf) -> Self {
        Self {
            checkpoint: run_dir.join("checkpoint.csv"),
            final_table: run_dir.join("final.csv"),
            correlations_dir: run_dir.join("correlations"),
            run_dir,
        }
    }

    /// A fresh `run_{timestamp}` directory under the results root.
    pub fn timestamped(results_root: &Path) -> Self {
        let stamp = chrono::Local::now().format("%Y-%m-%dT%H-%M-%S");
        Self::new(results_root.join(format!("run_{stamp}")))
    }
}

/// Summary of a completed run.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub examples: usize,
    pub columns: Vec<String>,
    pub final_table: PathBuf,
    pub correlations: Vec<(String, PathBuf)>,
}

/// Score the dataset with every registry metric, in order.
///
/// Persistence per iteration keeps the checkpoint current; on success
/// the canonical table and the three correlation matrices are written
/// and the checkpoint is removed. Any metric error aborts the run
/// without touching the final file.
pub fn run_experiment(
    dataset: &EvaluationDataset,
    metrics: &[(String, Box<dyn TextMetric>)],
    paths: &RunPaths,
) -> Result<RunReport, ExperimentError> {
    fs::create_dir_all(&paths.run_dir).map_err(|source| ExperimentError::Io {
        path: paths.run_dir.clone(),
        source,
    })?;

    let mut table = ResultTable::new(&dataset.human_scores);
    for (name, metric) in metrics {
        eprintln!("Scoring {name}");
        let scores = metric.score(&dataset.references, &dataset.candidates)?;
        for (column, values) in scores {
            table.insert(&column, values)?;
        }
        table.write_csv(&paths.checkpoint)?;
    }

    table.finalize();
    table.write_csv(&paths.final_table)?;
    remove_if_exists(&paths.checkpoint)?;

    fs::create_dir_all(&paths.correlations_dir).map_err(|source| ExperimentError::Io {
        path: paths.correlations_dir.clone(),
        source,
    })?;
    let mut correlations = Vec::new();
    for method in CorrMethod::ALL {
        let matrix = CorrelationMatrix::compute(&table, method);
        let path = paths.correlations_dir.join(format!("{}.csv", method.name()));
        matrix.write_csv(&path)?;
        correlations.push((method.name().to_string(), path));
    }

    Ok(RunReport {
        examples: dataset.len(),
        columns: table.column_names().iter().map(|s| s.to_string()).collect(),
        final_table: paths.final_table.clone(),
        correlations,
    })
}

fn remove_if_exists(path: &Path) -> Result<(), ExperimentError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(ExperimentError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
