//! BERTScore: greedy cosine matching between token embeddings.

use super::cosine_similarity;

/// Precision, recall, and F1 from greedy token matching.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BertScore {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Compute BERTScore between two token-embedding sequences
/// (Zhang et al., 2020).
///
/// Recall is the mean over reference tokens of the best cosine match in
/// the candidate; precision is the symmetric quantity; F1 their
/// harmonic mean. Identical embedding sequences score 1.0 on all three.
pub fn bert_score(ref_embeddings: &[Vec<f32>], cand_embeddings: &[Vec<f32>]) -> BertScore {
    if ref_embeddings.is_empty() || cand_embeddings.is_empty() {
        return BertScore {
            precision: 0.0,
            recall: 0.0,
            f1: 0.0,
        };
    }

    let recall = mean_best_match(ref_embeddings, cand_embeddings);
    let precision = mean_best_match(cand_embeddings, ref_embeddings);

    let f1 = if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    };

    BertScore {
        precision,
        recall,
        f1,
    }
}

fn mean_best_match(from: &[Vec<f32>], to: &[Vec<f32>]) -> f64 {
    let total: f64 = from
        .iter()
        .map(|a| {
            to.iter()
                .map(|b| cosine_similarity(a, b))
                .fold(f64::NEG_INFINITY, f64::max)
        })
        .sum();
    total / from.len() as f64
}
