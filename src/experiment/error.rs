//! Experiment driver error types.

use crate::metrics::MetricError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from the scoring loop and result persistence.
#[derive(Debug, Error)]
pub enum ExperimentError {
    /// A metric invocation failed; the run aborts, the last checkpoint
    /// stays on disk
    #[error(transparent)]
    Metric(#[from] MetricError),

    /// A score column does not match the table's row count
    #[error("Column {name:?} has {actual} rows, table has {expected}")]
    ColumnLength {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// Filesystem failure around checkpoint or report files
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding or decoding failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
