//! Correlation matrices over result-table columns.

use std::fs;
use std::path::Path;

use super::error::ExperimentError;
use super::table::ResultTable;

/// The three correlation methods computed for every run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CorrMethod {
    Pearson,
    Spearman,
    Kendall,
}

impl CorrMethod {
    pub const ALL: [CorrMethod; 3] = [CorrMethod::Pearson, CorrMethod::Spearman, CorrMethod::Kendall];

    pub fn name(&self) -> &'static str {
        match self {
            CorrMethod::Pearson => "pearson",
            CorrMethod::Spearman => "spearman",
            CorrMethod::Kendall => "kendall",
        }
    }

    fn correlate(&self, x: &[f64], y: &[f64]) -> f64 {
        match self {
            CorrMethod::Pearson => pearson(x, y),
            CorrMethod::Spearman => spearman(x, y),
            CorrMethod::Kendall => kendall(x, y),
        }
    }
}

/// A symmetric, unit-diagonal matrix over column names.
#[derive(Clone, Debug)]
pub struct CorrelationMatrix {
    labels: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Correlate every column pair of the table. Diagonals are 1.0 by
    /// definition; entries involving a zero-variance column are NaN.
    pub fn compute(table: &ResultTable, method: CorrMethod) -> Self {
        let columns: Vec<(&str, &[f64])> = table.columns().collect();
        let n = columns.len();
        let mut values = vec![vec![1.0; n]; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let r = method.correlate(columns[i].1, columns[j].1);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Self {
            labels: columns.iter().map(|(name, _)| name.to_string()).collect(),
            values,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    /// Persist with a leading label column, matching the layout of a
    /// labeled square-matrix CSV.
    pub fn write_csv(&self, path: &Path) -> Result<(), ExperimentError> {
        let tmp = path.with_extension("csv.tmp");

        {
            let mut writer = csv::Writer::from_path(&tmp)?;
            let mut header = vec![String::new()];
            header.extend(self.labels.iter().cloned());
            writer.write_record(&header)?;

            for (label, row) in self.labels.iter().zip(&self.values) {
                let mut record = vec![label.clone()];
                record.extend(row.iter().map(|v| v.to_string()));
                writer.write_record(&record)?;
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
}

/// Pearson product-moment correlation. NaN when either input has zero
/// variance or fewer than two points.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return f64::NAN;
    }

    let mean_x = x[..n].iter().sum::<f64>() / n as f64;
    let mean_y = y[..n].iter().sum::<f64>() / n as f64;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..n {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 {
        return f64::NAN;
    }
    covariance / denominator
}

/// Spearman rank correlation: Pearson over average ranks, so ties are
/// handled the way statistics packages do.
pub fn spearman(x: &[f64], y: &[f64]) -> f64 {
    pearson(&average_ranks(x), &average_ranks(y))
}

/// Kendall rank correlation, tau-b (tie-corrected).
pub fn kendall(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return f64::NAN;
    }

    let mut concordant = 0i64;
    let mut discordant = 0i64;
    let mut ties_x = 0i64;
    let mut ties_y = 0i64;

    for i in 0..n {
        for j in (i + 1)..n {
            let dx = x[i] - x[j];
            let dy = y[i] - y[j];
            if dx == 0.0 && dy == 0.0 {
                continue;
            } else if dx == 0.0 {
                ties_x += 1;
            } else if dy == 0.0 {
                ties_y += 1;
            } else if (dx > 0.0) == (dy > 0.0) {
                concordant += 1;
            } else {
                discordant += 1;
            }
        }
    }

    let pairs = concordant + discordant;
    let denominator = (((pairs + ties_x) as f64) * ((pairs + ties_y) as f64)).sqrt();
    if denominator == 0.0 {
        return f64::NAN;
    }
    (concordant - discordant) as f64 / denominator
}

/// Ranks starting at 1, tied values sharing their average rank.
fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        let average = (i + j) as f64 / 2.0 + 1.0;
        for &index in &order[i..=j] {
            ranks[index] = average;
        }
        i = j + 1;
    }

    ranks
}
