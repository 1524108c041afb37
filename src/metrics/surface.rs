//! Per-example adapters over the surface n-gram scorers.

use super::{check_lengths, progress_bar, MetricError, MetricScores, TextMetric};
use crate::scorers;

/// The closed set of surface scorers, each carrying its own options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceScorer {
    Bleu { max_order: usize },
    SacreBleu { max_order: usize },
    Chrf { max_order: usize },
    Meteor,
    Ter,
    Rouge,
}

impl SurfaceScorer {
    /// Metric name, also the column name for single-field scorers.
    pub fn name(&self) -> &'static str {
        match self {
            SurfaceScorer::Bleu { .. } => "bleu",
            SurfaceScorer::SacreBleu { .. } => "sacrebleu",
            SurfaceScorer::Chrf { .. } => "chrf",
            SurfaceScorer::Meteor => "meteor",
            SurfaceScorer::Ter => "ter",
            SurfaceScorer::Rouge => "rouge",
        }
    }

    /// Score one reference/prediction pair. Multi-field scorers return
    /// every sibling column; none may be discarded.
    fn score_pair(&self, reference: &str, prediction: &str) -> Vec<(&'static str, f64)> {
        match *self {
            SurfaceScorer::Bleu { max_order } => {
                vec![("bleu", scorers::bleu_score(reference, prediction, max_order))]
            }
            SurfaceScorer::SacreBleu { max_order } => vec![(
                "sacrebleu",
                scorers::sacrebleu_score(reference, prediction, max_order),
            )],
            SurfaceScorer::Chrf { max_order } => {
                vec![("chrf", scorers::chrf_score(reference, prediction, max_order))]
            }
            SurfaceScorer::Meteor => vec![("meteor", scorers::meteor_score(reference, prediction))],
            SurfaceScorer::Ter => vec![("ter", scorers::ter_score(reference, prediction))],
            SurfaceScorer::Rouge => {
                let scores = scorers::rouge_scores(reference, prediction);
                vec![
                    ("rouge1", scores.rouge1),
                    ("rouge2", scores.rouge2),
                    ("rougeL", scores.rouge_l),
                    ("rougeLsum", scores.rouge_lsum),
                ]
            }
        }
    }
}

/// Corpus-metric adapter: invokes its scorer one example at a time,
/// reporting progress along the way.
#[derive(Debug)]
pub struct SurfaceMetric {
    scorer: SurfaceScorer,
}

impl SurfaceMetric {
    pub fn new(scorer: SurfaceScorer) -> Self {
        Self { scorer }
    }

    pub fn name(&self) -> &'static str {
        self.scorer.name()
    }
}

impl TextMetric for SurfaceMetric {
    fn score(
        &self,
        references: &[String],
        predictions: &[String],
    ) -> Result<MetricScores, MetricError> {
        check_lengths(references, predictions)?;

        let pb = progress_bar(
            references.len(),
            format!("Computing metric {}", self.name()),
        );

        let mut columns = MetricScores::new();
        for (reference, prediction) in references.iter().zip(predictions) {
            for (column, value) in self.scorer.score_pair(reference, prediction) {
                columns
                    .entry(column.to_string())
                    .or_insert_with(|| Vec::with_capacity(references.len()))
                    .push(value);
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        Ok(columns)
    }
}
