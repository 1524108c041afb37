//! WMT segment-level evaluation corpora.
//!
//! A corpus is a directory of per-language-pair subdirectories, each
//! holding three line-aligned files: human judgment scores, system
//! output, and references. Loading concatenates the selected pairs into
//! one flat, immutable triple.

mod download;
mod error;

#[cfg(test)]
mod tests;

pub use download::{fetch_wmt16, WMT16_DIR, WMT16_URL};
pub use error::DatasetError;

use std::fs;
use std::path::{Path, PathBuf};

/// Aligned references, candidates, and human scores.
///
/// The three sequences always have equal length; construction fails
/// otherwise. Immutable after load.
#[derive(Clone, Debug)]
pub struct EvaluationDataset {
    pub references: Vec<String>,
    pub candidates: Vec<String>,
    pub human_scores: Vec<f64>,
}

impl EvaluationDataset {
    /// Build a dataset, validating alignment.
    pub fn new(
        references: Vec<String>,
        candidates: Vec<String>,
        human_scores: Vec<f64>,
    ) -> Result<Self, DatasetError> {
        if references.len() != candidates.len() || candidates.len() != human_scores.len() {
            return Err(DatasetError::Misaligned {
                pair: "corpus".to_string(),
                human: human_scores.len(),
                candidates: candidates.len(),
                references: references.len(),
            });
        }
        Ok(Self {
            references,
            candidates,
            human_scores,
        })
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}

/// A WMT-style corpus rooted at a directory of language-pair
/// subdirectories, with files named `{stem}.human.{pair}`,
/// `{stem}.mt-system.{pair}`, `{stem}.reference.{pair}`.
#[derive(Clone, Debug)]
pub struct WmtCorpus {
    root: PathBuf,
    stem: String,
}

impl WmtCorpus {
    pub fn new(root: PathBuf, stem: impl Into<String>) -> Self {
        Self {
            root,
            stem: stem.into(),
        }
    }

    /// The WMT16 segment-level dev corpus (its files carry the
    /// `newstest2015` stem).
    pub fn wmt16_dev(data_dir: &Path) -> Self {
        Self::new(data_dir.join(WMT16_DIR), "newstest2015")
    }

    /// Load every selected language pair, concatenated in sorted pair
    /// order. `only_english` restricts to `*en` target pairs.
    pub fn load(&self, only_english: bool) -> Result<EvaluationDataset, DatasetError> {
        let mut pairs = self.language_pairs()?;
        pairs.retain(|pair| !only_english || pair.ends_with("en"));
        pairs.sort();

        let mut references = Vec::new();
        let mut candidates = Vec::new();
        let mut human_scores = Vec::new();

        for pair in &pairs {
            let pair_dir = self.root.join(pair);
            let scores = self.read_scores(&pair_dir, pair)?;
            let pair_candidates = read_lines(&pair_dir.join(self.file_name("mt-system", pair)))?;
            let pair_references = read_lines(&pair_dir.join(self.file_name("reference", pair)))?;

            if scores.len() != pair_candidates.len() || pair_candidates.len() != pair_references.len()
            {
                return Err(DatasetError::Misaligned {
                    pair: pair.clone(),
                    human: scores.len(),
                    candidates: pair_candidates.len(),
                    references: pair_references.len(),
                });
            }

            human_scores.extend(scores);
            candidates.extend(pair_candidates);
            references.extend(pair_references);
        }

        EvaluationDataset::new(references, candidates, human_scores)
    }

    fn language_pairs(&self) -> Result<Vec<String>, DatasetError> {
        let entries = fs::read_dir(&self.root).map_err(|source| DatasetError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut pairs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| DatasetError::Io {
                path: self.root.clone(),
                source,
            })?;
            if entry.path().is_dir() {
                pairs.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(pairs)
    }

    fn file_name(&self, kind: &str, pair: &str) -> String {
        format!("{}.{kind}.{pair}", self.stem)
    }

    fn read_scores(&self, pair_dir: &Path, pair: &str) -> Result<Vec<f64>, DatasetError> {
        let path = pair_dir.join(self.file_name("human", pair));
        let lines = read_lines(&path)?;

        let mut scores = Vec::with_capacity(lines.len());
        for (index, line) in lines.iter().enumerate() {
            let score = line.parse::<f64>().map_err(|_| DatasetError::BadScore {
                value: line.clone(),
                path: path.clone(),
                line: index + 1,
            })?;
            scores.push(score);
        }
        Ok(scores)
    }
}

/// Read a newline-delimited file, trimming each line.
fn read_lines(path: &Path) -> Result<Vec<String>, DatasetError> {
    let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.lines().map(|line| line.trim().to_string()).collect())
}
