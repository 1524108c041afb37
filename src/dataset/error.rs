//! Dataset loading error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from corpus loading and the one-time download.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Aligned files disagree on line counts; fatal at load time
    #[error(
        "Misaligned corpus files for {pair}: {human} human scores, \
         {candidates} candidates, {references} references"
    )]
    Misaligned {
        pair: String,
        human: usize,
        candidates: usize,
        references: usize,
    },

    /// A human-score line failed to parse as a float
    #[error("Invalid human score {value:?} at {path}:{line}")]
    BadScore {
        value: String,
        path: PathBuf,
        line: usize,
    },

    /// Filesystem failure while reading the corpus
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Corpus archive download or extraction failure
    #[error("Corpus download failed: {0}")]
    Download(String),
}
