//! ROUGE-N and ROUGE-L F1 scores.
//!
//! One call computes all four sibling scores (1, 2, L, Lsum) since they
//! share tokenization; callers must not discard siblings.

use super::bleu::extract_ngrams;

/// The four ROUGE variants computed together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RougeScores {
    pub rouge1: f64,
    pub rouge2: f64,
    pub rouge_l: f64,
    pub rouge_lsum: f64,
}

/// Compute ROUGE-1, ROUGE-2, ROUGE-L, and ROUGE-Lsum F1 in one pass.
///
/// All scores are in [0, 1]. ROUGE-Lsum applies LCS per sentence
/// (split on `.`, `!`, `?`) and pools the hits; for single-sentence
/// segments it equals ROUGE-L.
pub fn rouge_scores(reference: &str, hypothesis: &str) -> RougeScores {
    RougeScores {
        rouge1: rouge_n(reference, hypothesis, 1),
        rouge2: rouge_n(reference, hypothesis, 2),
        rouge_l: rouge_l(reference, hypothesis),
        rouge_lsum: rouge_lsum(reference, hypothesis),
    }
}

/// ROUGE-N F1: n-gram overlap between reference and hypothesis.
pub fn rouge_n(reference: &str, hypothesis: &str, n: usize) -> f64 {
    let ref_tokens: Vec<&str> = reference.split_whitespace().collect();
    let hyp_tokens: Vec<&str> = hypothesis.split_whitespace().collect();

    if ref_tokens.len() < n || hyp_tokens.len() < n {
        return 0.0;
    }

    let ref_ngrams = extract_ngrams(&ref_tokens, n);
    let hyp_ngrams = extract_ngrams(&hyp_tokens, n);

    let mut overlap = 0usize;
    for (ngram, &hyp_count) in &hyp_ngrams {
        let ref_count = ref_ngrams.get(ngram).copied().unwrap_or(0);
        overlap += hyp_count.min(ref_count);
    }

    let ref_total: usize = ref_ngrams.values().sum();
    let hyp_total: usize = hyp_ngrams.values().sum();

    f1(overlap, hyp_total, overlap, ref_total)
}

/// ROUGE-L F1: longest common subsequence of word tokens.
pub fn rouge_l(reference: &str, hypothesis: &str) -> f64 {
    let ref_tokens: Vec<&str> = reference.split_whitespace().collect();
    let hyp_tokens: Vec<&str> = hypothesis.split_whitespace().collect();

    if ref_tokens.is_empty() || hyp_tokens.is_empty() {
        return 0.0;
    }

    let lcs = lcs_length(&ref_tokens, &hyp_tokens);
    f1(lcs, hyp_tokens.len(), lcs, ref_tokens.len())
}

/// ROUGE-Lsum F1: sentence-level LCS hits pooled over the segment.
pub fn rouge_lsum(reference: &str, hypothesis: &str) -> f64 {
    let ref_sentences = split_sentences(reference);
    let hyp_sentences = split_sentences(hypothesis);

    if ref_sentences.is_empty() || hyp_sentences.is_empty() {
        return 0.0;
    }

    let hyp_tokenized: Vec<Vec<&str>> = hyp_sentences
        .iter()
        .map(|s| s.split_whitespace().collect())
        .collect();

    let mut hits = 0usize;
    let mut ref_total = 0usize;
    for sentence in &ref_sentences {
        let ref_tokens: Vec<&str> = sentence.split_whitespace().collect();
        ref_total += ref_tokens.len();
        hits += hyp_tokenized
            .iter()
            .map(|hyp| lcs_length(&ref_tokens, hyp))
            .max()
            .unwrap_or(0);
    }

    let hyp_total: usize = hyp_tokenized.iter().map(Vec::len).sum();
    f1(hits, hyp_total, hits, ref_total)
}

fn f1(p_hits: usize, p_total: usize, r_hits: usize, r_total: usize) -> f64 {
    if p_total == 0 || r_total == 0 {
        return 0.0;
    }
    let precision = p_hits as f64 / p_total as f64;
    let recall = r_hits as f64 / r_total as f64;
    if precision + recall == 0.0 {
        return 0.0;
    }
    2.0 * precision * recall / (precision + recall)
}

/// Length of the longest common subsequence.
fn lcs_length(a: &[&str], b: &[&str]) -> usize {
    let n = a.len();
    let m = b.len();
    let mut dp = vec![vec![0usize; m + 1]; n + 1];

    for i in 1..=n {
        for j in 1..=m {
            if a[i - 1] == b[j - 1] {
                dp[i][j] = dp[i - 1][j - 1] + 1;
            } else {
                dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
            }
        }
    }

    dp[n][m]
}

fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
