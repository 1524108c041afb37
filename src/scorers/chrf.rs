//! chrF: character n-gram F-score (Popovic, 2015).

use std::collections::HashMap;

/// Harmonic-mean weight: recall counts beta^2 times as much as precision.
const BETA: f64 = 2.0;

/// Compute chrF over character n-grams of order 1..=`max_order`.
///
/// Whitespace is removed before counting, precisions and recalls are
/// averaged across orders, and the F-beta (beta=2) of the averages is
/// scaled to [0, 100]. Orders longer than both inputs are skipped.
pub fn chrf_score(reference: &str, hypothesis: &str, max_order: usize) -> f64 {
    let ref_chars: Vec<char> = reference.chars().filter(|c| !c.is_whitespace()).collect();
    let hyp_chars: Vec<char> = hypothesis.chars().filter(|c| !c.is_whitespace()).collect();

    if ref_chars.is_empty() || hyp_chars.is_empty() {
        return 0.0;
    }

    let mut precision_sum = 0.0;
    let mut recall_sum = 0.0;
    let mut orders = 0usize;

    for n in 1..=max_order {
        if ref_chars.len() < n && hyp_chars.len() < n {
            break;
        }

        let ref_ngrams = char_ngrams(&ref_chars, n);
        let hyp_ngrams = char_ngrams(&hyp_chars, n);

        let ref_total: usize = ref_ngrams.values().sum();
        let hyp_total: usize = hyp_ngrams.values().sum();

        let mut overlap = 0usize;
        for (ngram, &hyp_count) in &hyp_ngrams {
            let ref_count = ref_ngrams.get(ngram).copied().unwrap_or(0);
            overlap += hyp_count.min(ref_count);
        }

        precision_sum += if hyp_total > 0 {
            overlap as f64 / hyp_total as f64
        } else {
            0.0
        };
        recall_sum += if ref_total > 0 {
            overlap as f64 / ref_total as f64
        } else {
            0.0
        };
        orders += 1;
    }

    if orders == 0 {
        return 0.0;
    }

    let precision = precision_sum / orders as f64;
    let recall = recall_sum / orders as f64;

    if precision + recall == 0.0 {
        return 0.0;
    }

    let beta_sq = BETA * BETA;
    100.0 * (1.0 + beta_sq) * precision * recall / (beta_sq * precision + recall)
}

fn char_ngrams(chars: &[char], n: usize) -> HashMap<&[char], usize> {
    let mut counts = HashMap::new();
    if chars.len() >= n {
        for window in chars.windows(n) {
            *counts.entry(window).or_insert(0) += 1;
        }
    }
    counts
}
