//! CLI command tests
//!
//! Argument parsing and the score command's file handling.

use crate::cli::{parse_args, Command};
use std::path::PathBuf;

#[test]
fn test_parse_run_defaults() {
    let cli = parse_args(["cotejar", "run"]).unwrap();
    match cli.command {
        Command::Run(args) => {
            assert_eq!(args.data_dir, PathBuf::from("data"));
            assert_eq!(args.results_dir, PathBuf::from("results"));
            assert!(!args.fast);
            assert!(!args.all_languages);
            assert!(!args.download);
            assert!(args.model_dir.is_none());
        }
        other => panic!("expected run, got {other:?}"),
    }
}

#[test]
fn test_parse_run_overrides() {
    let cli = parse_args([
        "cotejar",
        "run",
        "--fast",
        "--all-languages",
        "--data-dir",
        "/tmp/corpora",
        "--model-dir",
        "/tmp/bert",
    ])
    .unwrap();
    match cli.command {
        Command::Run(args) => {
            assert!(args.fast);
            assert!(args.all_languages);
            assert_eq!(args.data_dir, PathBuf::from("/tmp/corpora"));
            assert_eq!(args.model_dir, Some(PathBuf::from("/tmp/bert")));
        }
        other => panic!("expected run, got {other:?}"),
    }
}

#[test]
fn test_parse_score_demo_mode() {
    let cli = parse_args(["cotejar", "score"]).unwrap();
    match cli.command {
        Command::Score(args) => {
            assert!(args.references.is_none());
            assert!(args.predictions.is_none());
        }
        other => panic!("expected score, got {other:?}"),
    }
}

#[test]
fn test_parse_score_requires_both_files() {
    assert!(parse_args(["cotejar", "score", "--references", "refs.txt"]).is_err());
    assert!(parse_args([
        "cotejar",
        "score",
        "--references",
        "refs.txt",
        "--predictions",
        "preds.txt",
    ])
    .is_ok());
}

#[test]
fn test_global_flags() {
    let cli = parse_args(["cotejar", "--quiet", "run"]).unwrap();
    assert!(cli.quiet);
    let cli = parse_args(["cotejar", "run", "--verbose"]).unwrap();
    assert!(cli.verbose);
}
