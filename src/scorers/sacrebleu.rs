//! sacreBLEU-style sentence score: 13a-style tokenization, floor
//! smoothing, 0-100 scale.

use super::bleu::{brevity_penalty, modified_precision};

/// Compute a sacreBLEU-style score in [0, 100].
///
/// Differs from [`super::bleu_score`] in three ways: punctuation is
/// split into separate tokens (13a-style), zero-overlap n-gram orders
/// are floor-smoothed to half a count instead of zeroing the score, and
/// the result is scaled to 0-100.
pub fn sacrebleu_score(reference: &str, hypothesis: &str, max_n: usize) -> f64 {
    let ref_owned = tokenize_13a(reference);
    let hyp_owned = tokenize_13a(hypothesis);
    let ref_tokens: Vec<&str> = ref_owned.iter().map(String::as_str).collect();
    let hyp_tokens: Vec<&str> = hyp_owned.iter().map(String::as_str).collect();

    if ref_tokens.is_empty() || hyp_tokens.is_empty() {
        return 0.0;
    }

    let mut log_precisions = Vec::with_capacity(max_n);
    for n in 1..=max_n {
        let (clipped, total) = modified_precision(&ref_tokens, &hyp_tokens, n);
        if total == 0 {
            // Hypothesis shorter than n: no counts at this order.
            continue;
        }
        let precision = if clipped == 0 {
            0.5 / total as f64
        } else {
            clipped as f64 / total as f64
        };
        log_precisions.push(precision.ln());
    }

    if log_precisions.is_empty() {
        return 0.0;
    }

    let avg_log_precision: f64 = log_precisions.iter().sum::<f64>() / log_precisions.len() as f64;

    100.0 * brevity_penalty(ref_tokens.len(), hyp_tokens.len()) * avg_log_precision.exp()
}

/// Split punctuation from words, collapse whitespace. A simplified form
/// of the WMT "13a" tokenizer: every non-alphanumeric, non-space char
/// becomes its own token.
pub(crate) fn tokenize_13a(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else if ch.is_alphanumeric() {
            current.push(ch);
        } else {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            tokens.push(ch.to_string());
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
