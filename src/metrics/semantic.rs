//! Adapters over the embedding-family scorers.

use std::sync::Arc;

use super::{check_lengths, progress_bar, MetricError, MetricScores, TextMetric};
use crate::embedding::Embedder;
use crate::scorers::{self, Idf, InfoMeasure};
use std::collections::HashMap;

/// BERTScore adapter: batched over the full input, one shared encoder.
///
/// The encoder is chosen at registry construction; when the caller
/// configures nothing, the documented default model applies there.
pub struct EmbeddingMetric {
    embedder: Arc<dyn Embedder>,
}

impl EmbeddingMetric {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }
}

impl std::fmt::Debug for EmbeddingMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingMetric").finish_non_exhaustive()
    }
}

impl TextMetric for EmbeddingMetric {
    fn score(
        &self,
        references: &[String],
        predictions: &[String],
    ) -> Result<MetricScores, MetricError> {
        check_lengths(references, predictions)?;

        let pb = progress_bar(references.len(), "Computing metric bertscore".to_string());
        let mut values = Vec::with_capacity(references.len());
        for (reference, prediction) in references.iter().zip(predictions) {
            let ref_embeddings = self.embedder.encode(reference)?;
            let cand_embeddings = self.embedder.encode(prediction)?;
            values.push(scorers::bert_score(&ref_embeddings, &cand_embeddings).f1);
            pb.inc(1);
        }
        pb.finish_and_clear();

        let mut columns = MetricScores::new();
        columns.insert("bertscore".to_string(), values);
        Ok(columns)
    }
}

/// The similarity-measure scorers, each carrying its own options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SimilarityScorer {
    Bary {
        epsilon: f64,
        iterations: usize,
    },
    Depth {
        directions: usize,
        seed: u64,
    },
    /// Returns the configured variant measure under the `infolm` column.
    InfoLm {
        measure: InfoMeasure,
        gamma: f64,
    },
}

impl SimilarityScorer {
    pub fn name(&self) -> &'static str {
        match self {
            SimilarityScorer::Bary { .. } => "bary",
            SimilarityScorer::Depth { .. } => "depth",
            SimilarityScorer::InfoLm { .. } => "infolm",
        }
    }
}

/// Similarity-measure adapter: prepares IDF statistics over the joint
/// reference+candidate set, then scores the batch with the same inputs.
pub struct SimilarityMetric {
    scorer: SimilarityScorer,
    embedder: Arc<dyn Embedder>,
}

impl std::fmt::Debug for SimilarityMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityMetric")
            .field("scorer", &self.scorer)
            .finish_non_exhaustive()
    }
}

impl SimilarityMetric {
    pub fn new(scorer: SimilarityScorer, embedder: Arc<dyn Embedder>) -> Self {
        Self { scorer, embedder }
    }

    pub fn name(&self) -> &'static str {
        self.scorer.name()
    }

    fn score_pair(
        &self,
        ref_ids: &[u32],
        cand_ids: &[u32],
        idf: &Idf,
    ) -> Result<f64, MetricError> {
        match self.scorer {
            SimilarityScorer::Bary { epsilon, iterations } => {
                let ref_embeddings = self.embedder.embed_tokens(ref_ids)?;
                let cand_embeddings = self.embedder.embed_tokens(cand_ids)?;
                let ref_weights: Vec<f64> = ref_ids.iter().map(|id| idf.weight(*id)).collect();
                let cand_weights: Vec<f64> = cand_ids.iter().map(|id| idf.weight(*id)).collect();
                Ok(scorers::bary_score(
                    &ref_embeddings,
                    &cand_embeddings,
                    &ref_weights,
                    &cand_weights,
                    epsilon,
                    iterations,
                ))
            }
            SimilarityScorer::Depth { directions, seed } => {
                let ref_embeddings = self.embedder.embed_tokens(ref_ids)?;
                let cand_embeddings = self.embedder.embed_tokens(cand_ids)?;
                Ok(scorers::depth_score(
                    &ref_embeddings,
                    &cand_embeddings,
                    directions,
                    seed,
                ))
            }
            SimilarityScorer::InfoLm { measure, gamma } => {
                let mut vocab = HashMap::new();
                for id in ref_ids.iter().chain(cand_ids) {
                    let next = vocab.len();
                    vocab.entry(*id).or_insert(next);
                }
                let p = scorers::token_distribution(ref_ids, &vocab, idf, gamma);
                let q = scorers::token_distribution(cand_ids, &vocab, idf, gamma);
                Ok(scorers::info_measure(measure, &p, &q))
            }
        }
    }
}

impl TextMetric for SimilarityMetric {
    fn score(
        &self,
        references: &[String],
        predictions: &[String],
    ) -> Result<MetricScores, MetricError> {
        check_lengths(references, predictions)?;

        let ref_ids: Vec<Vec<u32>> = references
            .iter()
            .map(|text| self.embedder.tokenize(text))
            .collect::<Result<_, _>>()?;
        let cand_ids: Vec<Vec<u32>> = predictions
            .iter()
            .map(|text| self.embedder.tokenize(text))
            .collect::<Result<_, _>>()?;

        // IDF statistics over the same references and candidates the
        // batched call scores.
        let mut documents = ref_ids.clone();
        documents.extend(cand_ids.iter().cloned());
        let idf = Idf::prepare(&documents);

        let pb = progress_bar(
            references.len(),
            format!("Computing metric {}", self.name()),
        );
        let mut values = Vec::with_capacity(references.len());
        for (r, c) in ref_ids.iter().zip(&cand_ids) {
            values.push(self.score_pair(r, c, &idf)?);
            pb.inc(1);
        }
        pb.finish_and_clear();

        let mut columns = MetricScores::new();
        columns.insert(self.name().to_string(), values);
        Ok(columns)
    }
}
