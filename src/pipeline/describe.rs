//! Descriptive statistics for the numeric columns

use polars::prelude::*;

use super::columns::NUMERIC_COLUMNS;
use super::error::Result;

/// Row labels of the descriptive statistics table, in output order
pub const STATISTIC_NAMES: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Summary of one numeric column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Summarise a set of values. Undefined statistics are NaN.
    pub fn from_values(column: &str, values: &[f64]) -> Self {
        let n = values.len();
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mean = if n == 0 {
            f64::NAN
        } else {
            values.iter().sum::<f64>() / n as f64
        };

        // Sample standard deviation (ddof = 1)
        let std = if n > 1 {
            let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            variance.sqrt()
        } else {
            f64::NAN
        };

        Self {
            column: column.to_string(),
            count: n,
            mean,
            std,
            min: sorted.first().copied().unwrap_or(f64::NAN),
            q25: percentile(&sorted, 25.0).unwrap_or(f64::NAN),
            median: percentile(&sorted, 50.0).unwrap_or(f64::NAN),
            q75: percentile(&sorted, 75.0).unwrap_or(f64::NAN),
            max: sorted.last().copied().unwrap_or(f64::NAN),
        }
    }

    /// Values in [`STATISTIC_NAMES`] order
    pub fn as_row(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.median,
            self.q75,
            self.max,
        ]
    }
}

/// Percentile of pre-sorted values using linear interpolation (NumPy compatible).
pub fn percentile(sorted_values: &[f64], p: f64) -> Option<f64> {
    let n = sorted_values.len();
    if n == 0 {
        return None;
    }
    if n == 1 {
        return Some(sorted_values[0]);
    }

    let rank = (p / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;

    if lower == upper {
        Some(sorted_values[lower])
    } else {
        Some(sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac)
    }
}

/// Median of unsorted values, `None` when empty
pub fn median(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    percentile(&sorted, 50.0)
}

/// Present (non-missing) values of a numeric column as f64
pub fn present_values(df: &DataFrame, column: &str) -> Result<Vec<f64>> {
    let values = df.column(column)?.cast(&DataType::Float64)?;
    Ok(values.f64()?.into_iter().flatten().collect())
}

/// Values of a numeric column as f64, `None` where missing
pub fn column_as_f64(df: &DataFrame, column: &str) -> Result<Vec<Option<f64>>> {
    let values = df.column(column)?.cast(&DataType::Float64)?;
    Ok(values.f64()?.into_iter().collect())
}

/// Describe every numeric column of the sales table.
///
/// Missing values are excluded per column, so `count` may differ between
/// columns (sales are never imputed).
pub fn describe(df: &DataFrame) -> Result<Vec<ColumnSummary>> {
    NUMERIC_COLUMNS
        .iter()
        .map(|column| {
            let values = present_values(df, column)?;
            Ok(ColumnSummary::from_values(column, &values))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&sorted, 50.0), Some(2.5));
        assert_eq!(percentile(&sorted, 25.0), Some(1.75));
        assert_eq!(percentile(&sorted, 100.0), Some(4.0));
    }

    #[test]
    fn test_percentile_empty_and_single() {
        assert_eq!(percentile(&[], 50.0), None);
        assert_eq!(percentile(&[7.0], 25.0), Some(7.0));
    }

    #[test]
    fn test_median_unsorted_input() {
        assert_eq!(median(&[5.0, 1.0, 3.0]), Some(3.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_summary_of_single_value_has_undefined_std() {
        let summary = ColumnSummary::from_values("x", &[3.0]);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.mean, 3.0);
        assert!(summary.std.is_nan());
        assert_eq!(summary.min, 3.0);
        assert_eq!(summary.max, 3.0);
    }

    #[test]
    fn test_summary_of_empty_is_nan() {
        let summary = ColumnSummary::from_values("x", &[]);
        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_nan());
        assert!(summary.min.is_nan());
        assert!(summary.median.is_nan());
    }
}
