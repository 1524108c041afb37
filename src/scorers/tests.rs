//! Property tests for the scoring functions
//!
//! Ensures every scorer satisfies its documented invariants:
//! - Scores bounded to their documented ranges
//! - No NaN on non-empty token inputs
//! - Identity inputs score at the similar end of the range

use super::*;
use proptest::prelude::*;
use std::collections::HashMap;

// ─── BLEU tests ──────────────────────────────────────────────────────

#[test]
fn test_bleu_identical() {
    let score = bleu_score("the cat sat on the mat", "the cat sat on the mat", 4);
    assert!(
        score > 0.99,
        "BLEU of identical strings should be ~1.0, got {score}"
    );
}

#[test]
fn test_bleu_empty_hypothesis() {
    assert_eq!(bleu_score("the cat", "", 4), 0.0);
}

#[test]
fn test_bleu_no_overlap() {
    assert_eq!(bleu_score("the cat sat", "a dog ran", 4), 0.0);
}

#[test]
fn test_bleu_partial_match() {
    let score = bleu_score(
        "the cat sat on the mat by the door",
        "the cat sat on the mat by the window",
        4,
    );
    assert!(
        score > 0.0 && score < 1.0,
        "Expected BLEU in (0, 1), got {score}"
    );
}

proptest! {
    #[test]
    fn prop_bleu_bounds(
        reference in "[a-z]{1,5}( [a-z]{1,5}){2,9}",
        hypothesis in "[a-z]{1,5}( [a-z]{1,5}){2,9}"
    ) {
        let score = bleu_score(&reference, &hypothesis, 4);
        prop_assert!((0.0..=1.0).contains(&score), "BLEU must be in [0,1], got {}", score);
    }
}

// ─── sacreBLEU tests ─────────────────────────────────────────────────

#[test]
fn test_sacrebleu_identical() {
    let score = sacrebleu_score("The cat sat on the mat.", "The cat sat on the mat.", 4);
    assert!(
        score > 99.0,
        "sacreBLEU of identical strings should be ~100, got {score}"
    );
}

#[test]
fn test_sacrebleu_splits_punctuation() {
    // "cakes!" and "cakes !" tokenize identically under 13a-style rules.
    let a = sacrebleu_score("I hate these cakes!", "I hate these cakes !", 4);
    assert!(a > 99.0, "expected punctuation-insensitive match, got {a}");
}

#[test]
fn test_sacrebleu_smoothing_keeps_score_finite() {
    // No 4-gram overlap, but smoothing avoids collapsing to zero.
    let score = sacrebleu_score("I like my cakes very much", "I adore my cakes", 4);
    assert!(score.is_finite() && score > 0.0, "got {score}");
}

proptest! {
    #[test]
    fn prop_sacrebleu_bounds(
        reference in "[a-z]{1,5}( [a-z]{1,5}){2,9}",
        hypothesis in "[a-z]{1,5}( [a-z]{1,5}){2,9}"
    ) {
        let score = sacrebleu_score(&reference, &hypothesis, 4);
        prop_assert!((0.0..=100.0).contains(&score), "sacreBLEU must be in [0,100], got {}", score);
    }
}

// ─── chrF tests ──────────────────────────────────────────────────────

#[test]
fn test_chrf_identical() {
    let score = chrf_score("the cat sat", "the cat sat", 6);
    assert!(
        (score - 100.0).abs() < 1e-9,
        "chrF of identical strings should be 100, got {score}"
    );
}

#[test]
fn test_chrf_empty() {
    assert_eq!(chrf_score("", "hello", 6), 0.0);
    assert_eq!(chrf_score("hello", "", 6), 0.0);
}

#[test]
fn test_chrf_partial() {
    let score = chrf_score("the cat sat", "the dog sat", 6);
    assert!(score > 0.0 && score < 100.0, "got {score}");
}

proptest! {
    #[test]
    fn prop_chrf_bounds(
        reference in "[a-z]{1,6}( [a-z]{1,6}){0,8}",
        hypothesis in "[a-z]{1,6}( [a-z]{1,6}){0,8}"
    ) {
        let score = chrf_score(&reference, &hypothesis, 6);
        prop_assert!((0.0..=100.0).contains(&score), "chrF must be in [0,100], got {}", score);
    }
}

// ─── METEOR tests ────────────────────────────────────────────────────

#[test]
fn test_meteor_identical() {
    let score = meteor_score("the cat sat on the mat", "the cat sat on the mat");
    assert!(score > 0.99, "got {score}");
}

#[test]
fn test_meteor_no_overlap() {
    assert_eq!(meteor_score("aaa bbb", "ccc ddd"), 0.0);
}

#[test]
fn test_meteor_case_insensitive() {
    let upper = meteor_score("The Cat", "the cat");
    let lower = meteor_score("the cat", "the cat");
    assert!((upper - lower).abs() < 1e-12);
}

#[test]
fn test_meteor_fragmentation_penalty() {
    // Same unigram matches, but scrambled order costs fragmentation.
    let ordered = meteor_score("a b c d e f", "a b c d e f");
    let scrambled = meteor_score("a b c d e f", "f e d c b a");
    assert!(
        scrambled < ordered,
        "scrambled {scrambled} should score below ordered {ordered}"
    );
}

proptest! {
    #[test]
    fn prop_meteor_bounds(
        reference in "[a-z]{1,4}( [a-z]{1,4}){0,9}",
        hypothesis in "[a-z]{1,4}( [a-z]{1,4}){0,9}"
    ) {
        let score = meteor_score(&reference, &hypothesis);
        prop_assert!((0.0..=1.0).contains(&score), "METEOR must be in [0,1], got {}", score);
    }
}

// ─── TER tests ───────────────────────────────────────────────────────

#[test]
fn test_ter_identical() {
    assert_eq!(ter_score("hello world", "hello world"), 0.0);
}

#[test]
fn test_ter_completely_wrong() {
    // 2 substitutions over 2 reference words = 100%.
    assert!((ter_score("hello world", "foo bar") - 100.0).abs() < 1e-10);
}

#[test]
fn test_ter_insertion() {
    // "the cat" vs "the big cat": one insertion over 2 words = 50%.
    assert!((ter_score("the cat", "the big cat") - 50.0).abs() < 1e-10);
}

#[test]
fn test_ter_empty_reference() {
    assert_eq!(ter_score("", ""), 0.0);
    assert!(ter_score("", "hello").is_infinite());
}

proptest! {
    #[test]
    fn prop_ter_non_negative(
        reference in "[a-z]{1,5}( [a-z]{1,5}){0,9}",
        hypothesis in "[a-z]{1,5}( [a-z]{1,5}){0,9}"
    ) {
        let score = ter_score(&reference, &hypothesis);
        prop_assert!(score >= 0.0 && score.is_finite(), "TER must be finite and >= 0, got {}", score);
    }
}

// ─── ROUGE tests ─────────────────────────────────────────────────────

#[test]
fn test_rouge_identical() {
    let scores = rouge_scores("the cat sat on the mat", "the cat sat on the mat");
    assert!((scores.rouge1 - 1.0).abs() < 1e-10);
    assert!((scores.rouge2 - 1.0).abs() < 1e-10);
    assert!((scores.rouge_l - 1.0).abs() < 1e-10);
    assert!((scores.rouge_lsum - 1.0).abs() < 1e-10);
}

#[test]
fn test_rouge_no_overlap() {
    let scores = rouge_scores("aaa bbb", "ccc ddd");
    assert_eq!(scores.rouge1, 0.0);
    assert_eq!(scores.rouge_l, 0.0);
}

#[test]
fn test_rouge_lsum_equals_l_for_single_sentence() {
    let scores = rouge_scores("the cat sat on the mat", "the cat on the mat");
    assert!((scores.rouge_lsum - scores.rouge_l).abs() < 1e-10);
}

proptest! {
    #[test]
    fn prop_rouge_bounds(
        reference in "[a-z]{1,4}( [a-z]{1,4}){1,8}",
        hypothesis in "[a-z]{1,4}( [a-z]{1,4}){1,8}"
    ) {
        let scores = rouge_scores(&reference, &hypothesis);
        for (name, s) in [
            ("rouge1", scores.rouge1),
            ("rouge2", scores.rouge2),
            ("rougeL", scores.rouge_l),
            ("rougeLsum", scores.rouge_lsum),
        ] {
            prop_assert!((0.0..=1.0).contains(&s), "{} must be in [0,1], got {}", name, s);
        }
    }
}

// ─── IDF tests ───────────────────────────────────────────────────────

#[test]
fn test_idf_common_token_is_zero() {
    let docs = vec![vec![1, 2], vec![1, 3], vec![1, 4]];
    let idf = Idf::prepare(&docs);
    assert_eq!(idf.weight(1), 0.0);
}

#[test]
fn test_idf_rare_above_common() {
    let docs = vec![vec![1, 2], vec![1, 3], vec![1, 2]];
    let idf = Idf::prepare(&docs);
    assert!(idf.weight(3) > idf.weight(2));
    assert!(idf.weight(2) > idf.weight(1));
}

#[test]
fn test_idf_unseen_token_highest() {
    let docs = vec![vec![1, 2], vec![1, 3]];
    let idf = Idf::prepare(&docs);
    assert!(idf.weight(99) > idf.weight(3));
}

#[test]
fn test_idf_duplicates_count_once_per_doc() {
    let docs = vec![vec![5, 5, 5], vec![6]];
    let idf = Idf::prepare(&docs);
    // Token 5 appears in one of two docs: idf = ln(2).
    assert!((idf.weight(5) - 2.0f64.ln()).abs() < 1e-12);
}

// ─── BERTScore tests ─────────────────────────────────────────────────

#[test]
fn test_bert_score_identical_embeddings() {
    let emb = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
    let s = bert_score(&emb, &emb);
    assert!((s.precision - 1.0).abs() < 1e-9);
    assert!((s.recall - 1.0).abs() < 1e-9);
    assert!((s.f1 - 1.0).abs() < 1e-9);
}

#[test]
fn test_bert_score_orthogonal_embeddings() {
    let a = vec![vec![1.0, 0.0]];
    let b = vec![vec![0.0, 1.0]];
    let s = bert_score(&a, &b);
    assert!(s.f1.abs() < 1e-9, "orthogonal tokens should score 0, got {}", s.f1);
}

#[test]
fn test_bert_score_empty() {
    let s = bert_score(&[], &[vec![1.0]]);
    assert_eq!(s.f1, 0.0);
}

// ─── BaryScore tests ─────────────────────────────────────────────────

#[test]
fn test_bary_identical_clouds_near_zero() {
    let emb = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
    let w = vec![1.0, 1.0];
    let d = bary_score(&emb, &emb, &w, &w, 0.1, 50);
    assert!(d >= 0.0 && d < 0.6, "identical clouds should be near 0, got {d}");
}

#[test]
fn test_bary_disjoint_above_identical() {
    let a = vec![vec![1.0, 0.0]];
    let b = vec![vec![-1.0, 0.0]];
    let w = vec![1.0];
    let same = bary_score(&a, &a, &w, &w, 0.1, 50);
    let opposite = bary_score(&a, &b, &w, &w, 0.1, 50);
    assert!(opposite > same, "opposite {opposite} should exceed identical {same}");
}

#[test]
fn test_bary_zero_weights_fall_back_to_uniform() {
    let emb = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
    let d = bary_score(&emb, &emb, &[0.0, 0.0], &[0.0, 0.0], 0.1, 50);
    assert!(d.is_finite());
}

// ─── DepthScore tests ────────────────────────────────────────────────

#[test]
fn test_depth_deterministic() {
    let r = vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![2.0, 2.0]];
    let c = vec![vec![1.0, 1.0]];
    let a = depth_score(&r, &c, 32, 7);
    let b = depth_score(&r, &c, 32, 7);
    assert_eq!(a, b);
}

#[test]
fn test_depth_central_below_outlier() {
    let r = vec![
        vec![0.0, 0.0],
        vec![1.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 1.0],
        vec![0.5, 0.5],
    ];
    let central = vec![vec![0.5, 0.5]];
    let outlier = vec![vec![50.0, 50.0]];
    let d_central = depth_score(&r, &central, 64, 7);
    let d_outlier = depth_score(&r, &outlier, 64, 7);
    assert!(
        d_central < d_outlier,
        "central {d_central} should score below outlier {d_outlier}"
    );
}

#[test]
fn test_depth_bounds() {
    let r = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
    let c = vec![vec![3.0, 3.0], vec![0.5, 0.5]];
    let d = depth_score(&r, &c, 16, 1);
    assert!((0.0..=1.0).contains(&d));
}

// ─── InfoLM tests ────────────────────────────────────────────────────

fn pair_distributions(p_ids: &[u32], q_ids: &[u32]) -> (Vec<f64>, Vec<f64>) {
    let idf = Idf::prepare(&[p_ids.to_vec(), q_ids.to_vec()]);
    let mut vocab = HashMap::new();
    for id in p_ids.iter().chain(q_ids) {
        let next = vocab.len();
        vocab.entry(*id).or_insert(next);
    }
    let p = token_distribution(p_ids, &vocab, &idf, 0.1);
    let q = token_distribution(q_ids, &vocab, &idf, 0.1);
    (p, q)
}

#[test]
fn test_info_measure_self_is_zero() {
    let (p, _) = pair_distributions(&[1, 2, 3], &[4, 5]);
    for measure in [
        InfoMeasure::KlDivergence,
        InfoMeasure::AlphaDivergence,
        InfoMeasure::AbDivergence,
        InfoMeasure::L1,
        InfoMeasure::L2,
        InfoMeasure::LInf,
        InfoMeasure::FisherRao,
    ] {
        let d = info_measure(measure, &p, &p);
        assert!(d.abs() < 1e-6, "{measure} of p against itself should be 0, got {d}");
    }
}

#[test]
fn test_info_measure_non_negative() {
    let (p, q) = pair_distributions(&[1, 2, 2, 3], &[3, 4, 5]);
    for measure in [
        InfoMeasure::KlDivergence,
        InfoMeasure::AlphaDivergence,
        InfoMeasure::AbDivergence,
        InfoMeasure::L1,
        InfoMeasure::L2,
        InfoMeasure::LInf,
        InfoMeasure::FisherRao,
    ] {
        let d = info_measure(measure, &p, &q);
        assert!(d >= 0.0 && d.is_finite(), "{measure} must be finite and >= 0, got {d}");
    }
}

#[test]
fn test_token_distribution_sums_to_one() {
    let (p, q) = pair_distributions(&[1, 1, 2], &[2, 3]);
    assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    assert!((q.iter().sum::<f64>() - 1.0).abs() < 1e-9);
}

#[test]
fn test_info_measure_default_is_fisher_rao() {
    assert_eq!(InfoMeasure::default(), InfoMeasure::FisherRao);
    assert_eq!(InfoMeasure::default().name(), "fisher_rao");
}

// ─── Cosine similarity tests ─────────────────────────────────────────

#[test]
fn test_cosine_similarity() {
    let e1 = [1.0, 0.0, 0.0];
    let e2 = [1.0, 0.0, 0.0];
    assert!((cosine_similarity(&e1, &e2) - 1.0).abs() < 1e-6);

    let e3 = [0.0, 1.0, 0.0];
    assert!(cosine_similarity(&e1, &e3).abs() < 1e-6);
}

#[test]
fn test_cosine_similarity_zero_vector() {
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
}
