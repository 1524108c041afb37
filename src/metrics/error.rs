//! Metric adapter error types.

use crate::embedding::EmbeddingError;
use thiserror::Error;

/// Errors from adapter construction and scoring.
#[derive(Debug, Error)]
pub enum MetricError {
    /// Unknown metric name at construction time
    #[error(
        "Unknown metric {0:?}, expected one of bleu, chrf, meteor, sacrebleu, ter, \
         rouge, bertscore, bary, depth, infolm"
    )]
    UnknownMetric(String),

    /// Invalid or unreadable metric configuration
    #[error("Invalid metric configuration: {0}")]
    Config(String),

    /// References and predictions differ in length at call time
    #[error("The number of references ({references}) and predictions ({predictions}) should be the same")]
    LengthMismatch { references: usize, predictions: usize },

    /// Failure in the embedding backend, propagated unmodified
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
}
