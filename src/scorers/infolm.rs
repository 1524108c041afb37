//! InfoLM-style information measures between smoothed, IDF-weighted
//! unigram token distributions.

use super::idf::Idf;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Order parameter for the alpha and AB divergences.
const ALPHA: f64 = 0.5;
const BETA: f64 = 0.5;

/// The named variant measures of the InfoLM family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoMeasure {
    KlDivergence,
    AlphaDivergence,
    AbDivergence,
    L1,
    L2,
    #[serde(rename = "linf")]
    LInf,
    #[default]
    FisherRao,
}

impl InfoMeasure {
    pub fn name(&self) -> &'static str {
        match self {
            InfoMeasure::KlDivergence => "kl_divergence",
            InfoMeasure::AlphaDivergence => "alpha_divergence",
            InfoMeasure::AbDivergence => "ab_divergence",
            InfoMeasure::L1 => "l1",
            InfoMeasure::L2 => "l2",
            InfoMeasure::LInf => "linf",
            InfoMeasure::FisherRao => "fisher_rao",
        }
    }
}

impl fmt::Display for InfoMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Build a smoothed, IDF-weighted unigram distribution over `vocab`.
///
/// `vocab` maps a token ID to its index in the output vector (the union
/// vocabulary of the pair being compared). Token mass is its count
/// scaled by `1 + idf`, plus `gamma` additive smoothing so every
/// measure below is defined; the result sums to one.
pub fn token_distribution(
    token_ids: &[u32],
    vocab: &HashMap<u32, usize>,
    idf: &Idf,
    gamma: f64,
) -> Vec<f64> {
    let mut mass = vec![gamma; vocab.len()];
    for id in token_ids {
        if let Some(&index) = vocab.get(id) {
            mass[index] += 1.0 + idf.weight(*id);
        }
    }

    let total: f64 = mass.iter().sum();
    if total > 0.0 {
        for m in &mut mass {
            *m /= total;
        }
    }
    mass
}

/// Evaluate one variant measure between two distributions of equal
/// support.
///
/// All variants are non-negative and zero when `p == q`. Distributions
/// are assumed smoothed (strictly positive), which `token_distribution`
/// guarantees.
pub fn info_measure(measure: InfoMeasure, p: &[f64], q: &[f64]) -> f64 {
    debug_assert_eq!(p.len(), q.len());
    match measure {
        InfoMeasure::KlDivergence => p
            .iter()
            .zip(q)
            .filter(|(pi, _)| **pi > 0.0)
            .map(|(pi, qi)| pi * (pi / qi).ln())
            .sum::<f64>()
            .max(0.0),
        InfoMeasure::AlphaDivergence => {
            let inner: f64 = p
                .iter()
                .zip(q)
                .map(|(pi, qi)| pi.powf(ALPHA) * qi.powf(1.0 - ALPHA))
                .sum();
            ((inner - 1.0) / (ALPHA * (ALPHA - 1.0))).max(0.0)
        }
        InfoMeasure::AbDivergence => {
            let ab = ALPHA + BETA;
            let p_term: f64 = p.iter().map(|pi| pi.powf(ab)).sum();
            let q_term: f64 = q.iter().map(|qi| qi.powf(ab)).sum();
            let cross: f64 = p
                .iter()
                .zip(q)
                .map(|(pi, qi)| pi.powf(ALPHA) * qi.powf(BETA))
                .sum();
            (p_term / (BETA * ab) + q_term / (ALPHA * ab) - cross / (ALPHA * BETA)).max(0.0)
        }
        InfoMeasure::L1 => p.iter().zip(q).map(|(pi, qi)| (pi - qi).abs()).sum(),
        InfoMeasure::L2 => p
            .iter()
            .zip(q)
            .map(|(pi, qi)| (pi - qi) * (pi - qi))
            .sum::<f64>()
            .sqrt(),
        InfoMeasure::LInf => p
            .iter()
            .zip(q)
            .map(|(pi, qi)| (pi - qi).abs())
            .fold(0.0, f64::max),
        InfoMeasure::FisherRao => {
            let bc: f64 = p.iter().zip(q).map(|(pi, qi)| (pi * qi).sqrt()).sum();
            2.0 * bc.clamp(0.0, 1.0).acos()
        }
    }
}
