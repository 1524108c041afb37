//! BLEU score with modified n-gram precision and brevity penalty.

use std::collections::HashMap;

/// Compute sentence-level BLEU (Papineni et al., 2002).
///
/// Geometric mean of clipped n-gram precisions up to `max_n`, scaled by
/// a brevity penalty. Returns a value in [0, 1]; 1.0 is a perfect match.
/// Any n-gram order with zero overlap makes the whole score 0.
pub fn bleu_score(reference: &str, hypothesis: &str, max_n: usize) -> f64 {
    let ref_tokens: Vec<&str> = reference.split_whitespace().collect();
    let hyp_tokens: Vec<&str> = hypothesis.split_whitespace().collect();
    bleu_from_tokens(&ref_tokens, &hyp_tokens, max_n)
}

/// BLEU over pre-tokenized input. Shared with the sacreBLEU variant,
/// which differs only in tokenization, smoothing, and scale.
pub(crate) fn bleu_from_tokens(ref_tokens: &[&str], hyp_tokens: &[&str], max_n: usize) -> f64 {
    if ref_tokens.is_empty() || hyp_tokens.is_empty() {
        return 0.0;
    }

    let mut log_precisions = Vec::with_capacity(max_n);
    for n in 1..=max_n {
        let (clipped, total) = modified_precision(ref_tokens, hyp_tokens, n);
        if total == 0 {
            return 0.0;
        }
        let precision = clipped as f64 / total as f64;
        if precision == 0.0 {
            return 0.0;
        }
        log_precisions.push(precision.ln());
    }

    let avg_log_precision: f64 =
        log_precisions.iter().sum::<f64>() / log_precisions.len().max(1) as f64;

    brevity_penalty(ref_tokens.len(), hyp_tokens.len()) * avg_log_precision.exp()
}

/// Brevity penalty: 1.0 when the hypothesis is at least as long as the
/// reference, exp(1 - r/c) otherwise.
pub(crate) fn brevity_penalty(ref_len: usize, hyp_len: usize) -> f64 {
    if hyp_len >= ref_len {
        1.0
    } else if hyp_len == 0 {
        0.0
    } else {
        (1.0 - ref_len as f64 / hyp_len as f64).exp()
    }
}

/// Modified n-gram precision: hypothesis counts clipped by reference counts.
pub(crate) fn modified_precision(
    reference: &[&str],
    hypothesis: &[&str],
    n: usize,
) -> (usize, usize) {
    let ref_ngrams = extract_ngrams(reference, n);
    let hyp_ngrams = extract_ngrams(hypothesis, n);
    let total: usize = hyp_ngrams.values().sum();

    let mut clipped = 0usize;
    for (ngram, &hyp_count) in &hyp_ngrams {
        let ref_count = ref_ngrams.get(ngram).copied().unwrap_or(0);
        clipped += hyp_count.min(ref_count);
    }

    (clipped, total)
}

/// Extract n-grams from a token sequence and count occurrences.
pub(crate) fn extract_ngrams<'a>(tokens: &[&'a str], n: usize) -> HashMap<Vec<&'a str>, usize> {
    let mut counts = HashMap::new();
    if n > 0 && tokens.len() >= n {
        for window in tokens.windows(n) {
            *counts.entry(window.to_vec()).or_insert(0) += 1;
        }
    }
    counts
}
