//! BaryScore: entropy-regularized Wasserstein distance between the
//! token-embedding clouds of a reference and a candidate.

use ndarray::{Array1, Array2};

/// Compute an entropy-regularized Wasserstein distance via Sinkhorn
/// iterations.
///
/// Token masses come from the supplied weights (typically IDF), each
/// side normalized to sum to one; uniform mass is used when a weight
/// vector sums to zero. The ground cost between tokens is cosine
/// distance. Lower is better; 0 means the clouds coincide (up to the
/// entropic regularization `epsilon`).
pub fn bary_score(
    ref_embeddings: &[Vec<f32>],
    cand_embeddings: &[Vec<f32>],
    ref_weights: &[f64],
    cand_weights: &[f64],
    epsilon: f64,
    max_iter: usize,
) -> f64 {
    let n = ref_embeddings.len();
    let m = cand_embeddings.len();
    if n == 0 || m == 0 {
        return if n == m { 0.0 } else { 1.0 };
    }

    let a = normalized_mass(ref_weights, n);
    let b = normalized_mass(cand_weights, m);

    let cost = Array2::from_shape_fn((n, m), |(i, j)| {
        1.0 - super::cosine_similarity(&ref_embeddings[i], &cand_embeddings[j])
    });

    let kernel = cost.mapv(|c| (-c / epsilon).exp());

    let mut u = Array1::from_elem(n, 1.0 / n as f64);
    let mut v = Array1::from_elem(m, 1.0 / m as f64);

    for _ in 0..max_iter {
        let kv = kernel.dot(&v);
        u = Array1::from_shape_fn(n, |i| a[i] / kv[i].max(f64::MIN_POSITIVE));
        let ktu = kernel.t().dot(&u);
        v = Array1::from_shape_fn(m, |j| b[j] / ktu[j].max(f64::MIN_POSITIVE));
    }

    // Transport cost of the (approximate) optimal plan P = diag(u) K diag(v).
    let mut total = 0.0;
    for i in 0..n {
        for j in 0..m {
            total += u[i] * kernel[(i, j)] * v[j] * cost[(i, j)];
        }
    }

    total.max(0.0)
}

fn normalized_mass(weights: &[f64], len: usize) -> Array1<f64> {
    debug_assert_eq!(weights.len(), len);
    let sum: f64 = weights.iter().filter(|w| w.is_finite() && **w > 0.0).sum();
    if sum <= 0.0 {
        return Array1::from_elem(len, 1.0 / len as f64);
    }
    Array1::from_shape_fn(len, |i| weights[i].max(0.0) / sum)
}
