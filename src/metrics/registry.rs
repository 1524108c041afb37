//! Metric registry: deterministic-order construction of named adapters.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::semantic::{EmbeddingMetric, SimilarityMetric, SimilarityScorer};
use super::surface::{SurfaceMetric, SurfaceScorer};
use super::{MetricError, TextMetric};
use crate::embedding::{default_model_dir, BertEncoder, Embedder};
use crate::scorers::InfoMeasure;

/// Metrics with negligible per-call cost; always loaded, in this order.
pub const FAST_METRICS: &[&str] = &["bleu", "chrf", "meteor", "sacrebleu", "ter"];

/// Expensive metrics appended by the full registry, in this order.
pub const FULL_METRICS: &[&str] = &["rouge", "bertscore", "bary", "depth", "infolm"];

/// Adapter construction options. Every field has a documented default;
/// each adapter family reads only the fields it owns.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricConfig {
    /// Encoder model directory for the embedding-family metrics.
    /// `None` selects `models/{DEFAULT_MODEL_ID}`.
    pub model_dir: Option<PathBuf>,
    /// Variant measure returned under the `infolm` column.
    pub infolm_measure: InfoMeasure,
    /// Additive smoothing for InfoLM token distributions.
    pub infolm_gamma: f64,
    /// Maximum n-gram order for BLEU and sacreBLEU.
    pub bleu_max_order: usize,
    /// Maximum character n-gram order for chrF.
    pub chrf_max_order: usize,
    /// Entropic regularization for the BaryScore Sinkhorn solver.
    pub bary_epsilon: f64,
    /// Sinkhorn iteration count.
    pub bary_iterations: usize,
    /// Random projections for the DepthScore approximation.
    pub depth_directions: usize,
    /// Projection sampling seed.
    pub depth_seed: u64,
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self {
            model_dir: None,
            infolm_measure: InfoMeasure::default(),
            infolm_gamma: 0.1,
            bleu_max_order: 4,
            chrf_max_order: 6,
            bary_epsilon: 0.1,
            bary_iterations: 50,
            depth_directions: 64,
            depth_seed: 42,
        }
    }
}

impl MetricConfig {
    /// Read a configuration from a JSON file. Missing fields take their
    /// defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, MetricError> {
        let text = fs::read_to_string(path)
            .map_err(|e| MetricError::Config(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&text)
            .map_err(|e| MetricError::Config(format!("{}: {e}", path.display())))
    }

    fn resolved_model_dir(&self) -> PathBuf {
        self.model_dir.clone().unwrap_or_else(default_model_dir)
    }
}

/// Construct every registry metric, fast subset or full set.
///
/// Iteration order is insertion order and deterministic. The embedding-
/// family metrics share one encoder, loaded once; a construction failure
/// (unreadable model directory, unknown name) propagates immediately.
pub fn load_all(
    fast_only: bool,
    config: &MetricConfig,
) -> Result<Vec<(String, Box<dyn TextMetric>)>, MetricError> {
    let mut metrics: Vec<(String, Box<dyn TextMetric>)> = Vec::new();

    for name in FAST_METRICS {
        metrics.push((name.to_string(), metric_by_name(name, config, None)?));
    }

    if !fast_only {
        let embedder: Arc<dyn Embedder> =
            Arc::new(BertEncoder::from_dir(&config.resolved_model_dir())?);
        for name in FULL_METRICS {
            metrics.push((
                name.to_string(),
                metric_by_name(name, config, Some(embedder.clone()))?,
            ));
        }
    }

    Ok(metrics)
}

/// Construct a single adapter by name.
///
/// Embedding-family names load the configured encoder unless one is
/// supplied. Unknown names fail here, before any scoring begins.
pub fn metric_by_name(
    name: &str,
    config: &MetricConfig,
    embedder: Option<Arc<dyn Embedder>>,
) -> Result<Box<dyn TextMetric>, MetricError> {
    let scorer = match name {
        "bleu" => {
            return Ok(Box::new(SurfaceMetric::new(SurfaceScorer::Bleu {
                max_order: config.bleu_max_order,
            })))
        }
        "sacrebleu" => {
            return Ok(Box::new(SurfaceMetric::new(SurfaceScorer::SacreBleu {
                max_order: config.bleu_max_order,
            })))
        }
        "chrf" => {
            return Ok(Box::new(SurfaceMetric::new(SurfaceScorer::Chrf {
                max_order: config.chrf_max_order,
            })))
        }
        "meteor" => return Ok(Box::new(SurfaceMetric::new(SurfaceScorer::Meteor))),
        "ter" => return Ok(Box::new(SurfaceMetric::new(SurfaceScorer::Ter))),
        "rouge" => return Ok(Box::new(SurfaceMetric::new(SurfaceScorer::Rouge))),
        "bertscore" => {
            let embedder = resolve_embedder(embedder, config)?;
            return Ok(Box::new(EmbeddingMetric::new(embedder)));
        }
        "bary" => SimilarityScorer::Bary {
            epsilon: config.bary_epsilon,
            iterations: config.bary_iterations,
        },
        "depth" => SimilarityScorer::Depth {
            directions: config.depth_directions,
            seed: config.depth_seed,
        },
        "infolm" => SimilarityScorer::InfoLm {
            measure: config.infolm_measure,
            gamma: config.infolm_gamma,
        },
        other => return Err(MetricError::UnknownMetric(other.to_string())),
    };

    let embedder = resolve_embedder(embedder, config)?;
    Ok(Box::new(SimilarityMetric::new(scorer, embedder)))
}

fn resolve_embedder(
    embedder: Option<Arc<dyn Embedder>>,
    config: &MetricConfig,
) -> Result<Arc<dyn Embedder>, MetricError> {
    match embedder {
        Some(embedder) => Ok(embedder),
        None => Ok(Arc::new(BertEncoder::from_dir(&config.resolved_model_dir())?)),
    }
}
