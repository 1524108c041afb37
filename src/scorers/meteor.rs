//! METEOR with exact unigram alignment and fragmentation penalty.

/// Compute a METEOR score in [0, 1] (Banerjee & Lavie, 2005).
///
/// Lowercased unigrams are aligned in order (each hypothesis token to
/// the earliest unused matching reference token); the recall-weighted
/// harmonic mean of precision and recall is discounted by a
/// fragmentation penalty based on the number of contiguous matched
/// chunks. Exact matching only; no stemming or synonym tables.
pub fn meteor_score(reference: &str, hypothesis: &str) -> f64 {
    let ref_tokens: Vec<String> = reference
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();
    let hyp_tokens: Vec<String> = hypothesis
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();

    if ref_tokens.is_empty() || hyp_tokens.is_empty() {
        return 0.0;
    }

    // (hyp_index, ref_index) pairs in hypothesis order.
    let alignment = align(&ref_tokens, &hyp_tokens);
    let matches = alignment.len();
    if matches == 0 {
        return 0.0;
    }

    let precision = matches as f64 / hyp_tokens.len() as f64;
    let recall = matches as f64 / ref_tokens.len() as f64;
    let f_mean = 10.0 * precision * recall / (recall + 9.0 * precision);

    let chunks = count_chunks(&alignment);
    let penalty = 0.5 * (chunks as f64 / matches as f64).powi(3);

    f_mean * (1.0 - penalty)
}

fn align(ref_tokens: &[String], hyp_tokens: &[String]) -> Vec<(usize, usize)> {
    let mut used = vec![false; ref_tokens.len()];
    let mut pairs = Vec::new();

    for (h, token) in hyp_tokens.iter().enumerate() {
        for (r, candidate) in ref_tokens.iter().enumerate() {
            if !used[r] && candidate == token {
                used[r] = true;
                pairs.push((h, r));
                break;
            }
        }
    }

    pairs
}

/// A chunk is a maximal run of matches adjacent in both sentences.
fn count_chunks(alignment: &[(usize, usize)]) -> usize {
    let mut chunks = 0usize;
    let mut prev: Option<(usize, usize)> = None;

    for &(h, r) in alignment {
        let adjacent = matches!(prev, Some((ph, pr)) if h == ph + 1 && r == pr + 1);
        if !adjacent {
            chunks += 1;
        }
        prev = Some((h, r));
    }

    chunks
}
