//! DepthScore: random-projection Tukey depth of candidate tokens
//! within the reference embedding cloud.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Compute a depth-based dissimilarity in [0, 1].
///
/// Each candidate token's Tukey (halfspace) depth with respect to the
/// reference cloud is approximated as the minimum, over `directions`
/// seeded random projections, of the smaller tail fraction of projected
/// reference tokens. The score is `1 - 2 * mean(depth)`: lower means
/// the candidate's tokens sit more centrally in the reference
/// distribution. Deterministic for a fixed seed.
pub fn depth_score(
    ref_embeddings: &[Vec<f32>],
    cand_embeddings: &[Vec<f32>],
    directions: usize,
    seed: u64,
) -> f64 {
    if ref_embeddings.is_empty() || cand_embeddings.is_empty() {
        return 1.0;
    }

    let dim = ref_embeddings[0].len();
    let mut rng = StdRng::seed_from_u64(seed);
    let dirs: Vec<Vec<f64>> = (0..directions.max(1))
        .map(|_| random_direction(&mut rng, dim))
        .collect();

    // Project the reference cloud once per direction.
    let ref_projections: Vec<Vec<f64>> = dirs
        .iter()
        .map(|d| ref_embeddings.iter().map(|e| project(e, d)).collect())
        .collect();

    let n_ref = ref_embeddings.len() as f64;
    let mut depth_sum = 0.0;

    for cand in cand_embeddings {
        let mut depth = f64::INFINITY;
        for (d, ref_proj) in dirs.iter().zip(&ref_projections) {
            let x = project(cand, d);
            let below = ref_proj.iter().filter(|&&r| r <= x).count() as f64;
            let above = ref_proj.iter().filter(|&&r| r >= x).count() as f64;
            depth = depth.min(below.min(above) / n_ref);
        }
        depth_sum += depth;
    }

    let mean_depth = depth_sum / cand_embeddings.len() as f64;
    (1.0 - 2.0 * mean_depth).clamp(0.0, 1.0)
}

fn random_direction(rng: &mut StdRng, dim: usize) -> Vec<f64> {
    loop {
        let v: Vec<f64> = (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let norm: f64 = v.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 1e-9 {
            return v.iter().map(|x| x / norm).collect();
        }
    }
}

fn project(embedding: &[f32], direction: &[f64]) -> f64 {
    embedding
        .iter()
        .zip(direction)
        .map(|(e, d)| *e as f64 * d)
        .sum()
}
