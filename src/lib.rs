//! Cotejar: text-similarity metric aggregation for MT evaluation
//!
//! Runs a battery of automatic similarity metrics over WMT segment-level
//! human-judgment corpora behind one uniform calling contract, and
//! correlates every metric column against the human scores.
//!
//! ## Architecture
//!
//! - `scorers`: pure metric math (surface n-gram and embedding families)
//! - `embedding`: BERT-family token encoder behind the `Embedder` seam
//! - `dataset`: aligned corpus loading and the one-time WMT16 download
//! - `metrics`: adapter layer normalizing scorers to `(references,
//!   predictions) -> named columns`, plus the fast/full registry
//! - `experiment`: sequential driver with checkpointed CSV persistence
//!   and Pearson/Spearman/Kendall correlation reports
//! - `cli`: the `run` and `score` commands
//!
//! ## Example
//!
//! ```ignore
//! use cotejar::dataset::WmtCorpus;
//! use cotejar::experiment::{run_experiment, RunPaths};
//! use cotejar::metrics::{load_all, MetricConfig};
//!
//! let dataset = WmtCorpus::wmt16_dev("data".as_ref()).load(true)?;
//! let metrics = load_all(true, &MetricConfig::default())?;
//! let paths = RunPaths::timestamped("results".as_ref());
//! let report = run_experiment(&dataset, &metrics, &paths)?;
//! println!("final table: {}", report.final_table.display());
//! ```

pub mod cli;
pub mod dataset;
pub mod embedding;
pub mod experiment;
pub mod metrics;
pub mod scorers;

// Re-export main types
pub use dataset::{EvaluationDataset, WmtCorpus};
pub use experiment::{run_experiment, CorrMethod, ResultTable, RunPaths, RunReport};
pub use metrics::{load_all, MetricConfig, MetricError, MetricScores, TextMetric};
