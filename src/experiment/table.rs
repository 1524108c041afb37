//! Column-oriented result table with atomic CSV persistence.

use std::fs;
use std::path::Path;

use super::error::ExperimentError;

/// The `human_scores` column every table starts with.
pub const HUMAN_SCORES: &str = "human_scores";

/// Named `f64` columns, row-aligned with the dataset's example order.
///
/// Built incrementally — one metric's columns inserted per driver
/// iteration — and persisted after every insertion. [`finalize`] puts
/// `human_scores` first and the rest in alphabetical order.
///
/// [`finalize`]: ResultTable::finalize
#[derive(Clone, Debug)]
pub struct ResultTable {
    columns: Vec<(String, Vec<f64>)>,
    rows: usize,
}

impl ResultTable {
    /// Start a table from the human-score column.
    pub fn new(human_scores: &[f64]) -> Self {
        Self {
            rows: human_scores.len(),
            columns: vec![(HUMAN_SCORES.to_string(), human_scores.to_vec())],
        }
    }

    /// Add a column, overwriting any existing column of the same name.
    pub fn insert(&mut self, name: &str, values: Vec<f64>) -> Result<(), ExperimentError> {
        if values.len() != self.rows {
            return Err(ExperimentError::ColumnLength {
                name: name.to_string(),
                expected: self.rows,
                actual: values.len(),
            });
        }
        match self.columns.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = values,
            None => self.columns.push((name.to_string(), values)),
        }
        Ok(())
    }

    /// Reorder to the canonical column order: `human_scores` first,
    /// remaining columns alphabetical.
    pub fn finalize(&mut self) {
        self.columns
            .sort_by(|(a, _), (b, _)| (a != HUMAN_SCORES, a).cmp(&(b != HUMAN_SCORES, b)));
    }

    pub fn n_rows(&self) -> usize {
        self.rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Persist as CSV via write-temp-then-rename, so a crash mid-write
    /// never leaves a partial file at `path`.
    pub fn write_csv(&self, path: &Path) -> Result<(), ExperimentError> {
        let tmp = path.with_extension("csv.tmp");

        {
            let mut writer = csv::Writer::from_path(&tmp)?;
            writer.write_record(self.columns.iter().map(|(name, _)| name.as_str()))?;
            for row in 0..self.rows {
                writer.write_record(
                    self.columns
                        .iter()
                        .map(|(_, values)| values[row].to_string()),
                )?;
            }
            writer.flush().map_err(|source| ExperimentError::Io {
                path: tmp.clone(),
                source,
            })?;
        }

        fs::rename(&tmp, path).map_err(|source| ExperimentError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read a table back from CSV (checkpoint inspection and tests).
    pub fn read_csv(path: &Path) -> Result<Self, ExperimentError> {
        let mut reader = csv::Reader::from_path(path)?;
        let names: Vec<String> = reader
            .headers()?
            .iter()
            .map(|name| name.to_string())
            .collect();

        let mut columns: Vec<(String, Vec<f64>)> =
            names.into_iter().map(|name| (name, Vec::new())).collect();
        let mut rows = 0usize;
        for record in reader.records() {
            let record = record?;
            for (column, field) in columns.iter_mut().zip(record.iter()) {
                column.1.push(field.parse::<f64>().unwrap_or(f64::NAN));
            }
            rows += 1;
        }

        Ok(Self { columns, rows })
    }
}
