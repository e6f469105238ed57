//! Pearson correlation between numeric columns

use polars::prelude::*;

use super::columns::{GLOBAL_SALES, NUMERIC_COLUMNS, SCORE_SALES_COLUMNS};
use super::describe::column_as_f64;
use super::error::Result;

/// Square correlation matrix with its column labels
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// Row-major coefficients; NaN where the correlation is undefined
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Coefficient between two named columns
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.values[i][j])
    }

    /// Correlations of every column against `column`, in matrix order
    pub fn row(&self, column: &str) -> Option<Vec<(String, f64)>> {
        let i = self.columns.iter().position(|c| c == column)?;
        Some(
            self.columns
                .iter()
                .cloned()
                .zip(self.values[i].iter().copied())
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Pearson correlation matrix over the given numeric columns.
///
/// Each pair uses only the rows where both values are present. The diagonal
/// is 1.0 unless the column is constant or has fewer than two values.
pub fn correlation_matrix(df: &DataFrame, columns: &[&str]) -> Result<CorrelationMatrix> {
    let data: Vec<Vec<Option<f64>>> = columns
        .iter()
        .map(|column| column_as_f64(df, column))
        .collect::<Result<_>>()?;

    let n = columns.len();
    let mut values = vec![vec![f64::NAN; n]; n];

    // Upper triangle, mirrored
    for i in 0..n {
        for j in i..n {
            let corr = pearson_correlation(&data[i], &data[j]).unwrap_or(f64::NAN);
            values[i][j] = corr;
            values[j][i] = corr;
        }
    }

    Ok(CorrelationMatrix {
        columns: columns.iter().map(|c| c.to_string()).collect(),
        values,
    })
}

/// Correlation among all ten numeric columns
pub fn numeric_correlation_matrix(df: &DataFrame) -> Result<CorrelationMatrix> {
    correlation_matrix(df, &NUMERIC_COLUMNS)
}

/// Correlation among global sales, critic score and user score
pub fn score_sales_correlation(df: &DataFrame) -> Result<CorrelationMatrix> {
    correlation_matrix(df, &SCORE_SALES_COLUMNS)
}

/// Global sales row of a matrix that contains it, empty otherwise
pub fn global_sales_correlations(matrix: &CorrelationMatrix) -> Vec<(String, f64)> {
    matrix.row(GLOBAL_SALES).unwrap_or_default()
}

/// Compute Pearson correlation using Welford's algorithm over complete pairs
///
/// Single pass for numerical stability. Returns `None` with fewer than two
/// complete pairs or when either side has zero variance.
pub fn pearson_correlation(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    if xs.len() != ys.len() {
        return None;
    }

    let mut n = 0.0;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;

    for (x, y) in xs.iter().zip(ys.iter()) {
        if let (Some(x), Some(y)) = (x, y) {
            n += 1.0;
            let dx = x - mean_x;
            let dy = y - mean_y;
            mean_x += dx / n;
            mean_y += dy / n;
            var_x += dx * (x - mean_x);
            var_y += dy * (y - mean_y);
            cov_xy += dx * (y - mean_y);
        }
    }

    if n < 2.0 || var_x <= 0.0 || var_y <= 0.0 {
        return None;
    }

    Some((cov_xy / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}
