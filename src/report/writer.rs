//! CSV outputs: the cleaned table and the descriptive statistics table

use std::fs::{self, File};
use std::path::Path;

use log::info;
use polars::prelude::*;

use crate::pipeline::{ColumnSummary, EdaError, Result, STATISTIC_NAMES};

/// Header of the statistic-name column in the statistics table
pub const STATISTIC_COLUMN: &str = "statistic";

/// Write the cleaned table as CSV with a header row and no index column.
///
/// An existing file at `path` is overwritten.
pub fn write_cleaned_table(df: &DataFrame, path: &Path) -> Result<()> {
    let mut df = df.clone();
    write_csv(&mut df, path)?;
    info!("Wrote {} cleaned rows to {}", df.height(), path.display());
    Ok(())
}

/// Write the descriptive statistics table: one row per statistic, one column
/// per numeric field.
pub fn write_descriptive_statistics(stats: &[ColumnSummary], path: &Path) -> Result<()> {
    let mut df = statistics_frame(stats)?;
    write_csv(&mut df, path)
}

/// Lay out column summaries as a statistics-by-column DataFrame
pub fn statistics_frame(stats: &[ColumnSummary]) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(stats.len() + 1);
    columns.push(Column::new(
        STATISTIC_COLUMN.into(),
        STATISTIC_NAMES.to_vec(),
    ));

    for summary in stats {
        columns.push(Column::new(
            summary.column.as_str().into(),
            summary.as_row().to_vec(),
        ));
    }

    Ok(DataFrame::new(columns)?)
}

fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let write_error = |message: String| EdaError::Write {
        path: path.to_path_buf(),
        message,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
    }

    let mut file = File::create(path).map_err(|e| write_error(e.to_string()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .map_err(|e| write_error(e.to_string()))
}
