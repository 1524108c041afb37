//! Text-similarity scoring functions
//!
//! Pure scoring math behind the metric adapter layer:
//! - **Surface**: BLEU, sacreBLEU, chrF, METEOR, TER, ROUGE (1/2/L/Lsum)
//! - **Embedding**: BERTScore, BaryScore, DepthScore over per-token
//!   encoder states
//! - **Distributional**: InfoLM measures over smoothed unigram token
//!   distributions, with IDF statistics prepared over the joint corpus

pub mod bary;
pub mod bertscore;
pub mod bleu;
pub mod chrf;
pub mod depth;
pub mod idf;
pub mod infolm;
pub mod meteor;
pub mod rouge;
pub mod sacrebleu;
pub mod ter;

#[cfg(test)]
mod tests;

pub use bary::bary_score;
pub use bertscore::{bert_score, BertScore};
pub use bleu::bleu_score;
pub use chrf::chrf_score;
pub use depth::depth_score;
pub use idf::Idf;
pub use infolm::{info_measure, token_distribution, InfoMeasure};
pub use meteor::meteor_score;
pub use rouge::{rouge_scores, RougeScores};
pub use sacrebleu::sacrebleu_score;
pub use ter::ter_score;

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 when either vector is zero or the lengths differ.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x * y) as f64).sum();
    let norm_a: f64 = a.iter().map(|x| (x * x) as f64).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| (x * x) as f64).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
