//! Metric adapter layer
//!
//! Normalizes heterogeneous scorers behind one calling contract:
//! `(references, predictions) -> named score columns`. Three adapter
//! families cover every metric:
//!
//! - [`SurfaceMetric`]: per-example n-gram scorers, iterated with a
//!   progress bar; multi-field scorers (ROUGE) emit every sibling column
//! - [`EmbeddingMetric`]: BERTScore over a shared encoder
//! - [`SimilarityMetric`]: corpus-level IDF preparation followed by
//!   batched scoring (BaryScore, DepthScore, InfoLM)
//!
//! Unknown metric names fail at construction, not at call time.

mod error;
mod registry;
mod semantic;
mod surface;


pub use error::MetricError;
pub use registry::{load_all, metric_by_name, MetricConfig, FAST_METRICS, FULL_METRICS};
pub use semantic::{EmbeddingMetric, SimilarityMetric, SimilarityScorer};
pub use surface::{SurfaceMetric, SurfaceScorer};

use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;

/// Sub-metric name to one score per example, every column as long as
/// the input.
pub type MetricScores = BTreeMap<String, Vec<f64>>;

/// The uniform scoring contract every adapter implements.
pub trait TextMetric: Send + std::fmt::Debug {
    /// Score each prediction against its reference.
    ///
    /// Fails with [`MetricError::LengthMismatch`] before any scoring
    /// work when the inputs differ in length.
    fn score(
        &self,
        references: &[String],
        predictions: &[String],
    ) -> Result<MetricScores, MetricError>;
}

pub(crate) fn check_lengths(references: &[String], predictions: &[String]) -> Result<(), MetricError> {
    if references.len() != predictions.len() {
        return Err(MetricError::LengthMismatch {
            references: references.len(),
            predictions: predictions.len(),
        });
    }
    Ok(())
}

pub(crate) fn progress_bar(len: usize, message: String) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")
            .expect("static progress template"),
    );
    pb.set_message(message);
    pb
}
