//! Corpus loading tests over tempdir fixtures.

use super::*;
use std::fs;

const STEM: &str = "newstest2015";

fn write_pair(root: &Path, pair: &str, scores: &[&str], candidates: &[&str], references: &[&str]) {
    let dir = root.join(pair);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{STEM}.human.{pair}")), scores.join("\n")).unwrap();
    fs::write(
        dir.join(format!("{STEM}.mt-system.{pair}")),
        candidates.join("\n"),
    )
    .unwrap();
    fs::write(
        dir.join(format!("{STEM}.reference.{pair}")),
        references.join("\n"),
    )
    .unwrap();
}

#[test]
fn test_load_aligned_fixture() {
    let dir = tempfile::tempdir().unwrap();
    write_pair(
        dir.path(),
        "cs-en",
        &["0.5", "-1.25", "2"],
        &["a cat", "a dog", "a bird"],
        &["the cat", "the dog", "the bird"],
    );

    let dataset = WmtCorpus::new(dir.path().to_path_buf(), STEM)
        .load(true)
        .unwrap();
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.human_scores, vec![0.5, -1.25, 2.0]);
    assert_eq!(dataset.candidates[0], "a cat");
    assert_eq!(dataset.references[2], "the bird");
}

#[test]
fn test_load_trims_whitespace() {
    let dir = tempfile::tempdir().unwrap();
    write_pair(
        dir.path(),
        "de-en",
        &[" 1.0 "],
        &["  padded candidate  "],
        &["padded reference\t"],
    );

    let dataset = WmtCorpus::new(dir.path().to_path_buf(), STEM)
        .load(true)
        .unwrap();
    assert_eq!(dataset.candidates[0], "padded candidate");
    assert_eq!(dataset.references[0], "padded reference");
    assert_eq!(dataset.human_scores[0], 1.0);
}

#[test]
fn test_misaligned_pair_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_pair(
        dir.path(),
        "cs-en",
        &["0.5", "1.0", "1.5"],
        &["a", "b"],
        &["x", "y", "z"],
    );

    let err = WmtCorpus::new(dir.path().to_path_buf(), STEM)
        .load(true)
        .unwrap_err();
    match err {
        DatasetError::Misaligned {
            pair,
            human,
            candidates,
            references,
        } => {
            assert_eq!(pair, "cs-en");
            assert_eq!((human, candidates, references), (3, 2, 3));
        }
        other => panic!("expected Misaligned, got {other:?}"),
    }
}

#[test]
fn test_only_english_filters_pairs() {
    let dir = tempfile::tempdir().unwrap();
    write_pair(dir.path(), "cs-en", &["1.0"], &["a"], &["b"]);
    write_pair(dir.path(), "en-de", &["2.0"], &["c"], &["d"]);

    let corpus = WmtCorpus::new(dir.path().to_path_buf(), STEM);
    assert_eq!(corpus.load(true).unwrap().len(), 1);
    assert_eq!(corpus.load(false).unwrap().len(), 2);
}

#[test]
fn test_pairs_concatenate_in_sorted_order() {
    let dir = tempfile::tempdir().unwrap();
    write_pair(dir.path(), "fi-en", &["2.0"], &["second"], &["second ref"]);
    write_pair(dir.path(), "cs-en", &["1.0"], &["first"], &["first ref"]);

    let dataset = WmtCorpus::new(dir.path().to_path_buf(), STEM)
        .load(true)
        .unwrap();
    assert_eq!(dataset.candidates, vec!["first", "second"]);
    assert_eq!(dataset.human_scores, vec![1.0, 2.0]);
}

#[test]
fn test_bad_score_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_pair(dir.path(), "ru-en", &["0.5", "not-a-number"], &["a", "b"], &["x", "y"]);

    let err = WmtCorpus::new(dir.path().to_path_buf(), STEM)
        .load(true)
        .unwrap_err();
    match err {
        DatasetError::BadScore { value, line, .. } => {
            assert_eq!(value, "not-a-number");
            assert_eq!(line, 2);
        }
        other => panic!("expected BadScore, got {other:?}"),
    }
}

#[test]
fn test_missing_corpus_root_is_io_error() {
    let err = WmtCorpus::new("does/not/exist".into(), STEM)
        .load(true)
        .unwrap_err();
    assert!(matches!(err, DatasetError::Io { .. }));
}

#[test]
fn test_dataset_constructor_checks_alignment() {
    let err = EvaluationDataset::new(
        vec!["a".to_string()],
        vec!["b".to_string(), "c".to_string()],
        vec![1.0],
    )
    .unwrap_err();
    assert!(matches!(err, DatasetError::Misaligned { .. }));
}
