//! Dataset loader for the video game sales CSV

use std::fs::File;
use std::path::Path;

use log::debug;
use polars::prelude::*;

use super::columns::{column_dtype, EXPECTED_COLUMNS, NULL_TOKENS};
use super::error::{EdaError, Result};

/// Load the sales dataset into a typed DataFrame.
///
/// Every cell is first read as text, the header is checked against
/// [`EXPECTED_COLUMNS`], and each numeric column is then strictly cast to its
/// target type. A cell that does not parse fails the whole load with
/// [`EdaError::Parse`]; nothing is coerced to missing.
pub fn load_dataset(path: &Path) -> Result<DataFrame> {
    ensure_readable(path)?;

    let raw = raw_reader(path)
        .finish()
        .and_then(|lf| lf.collect())
        .map_err(|e| EdaError::Parse {
            column: "<file>".to_string(),
            message: e.to_string(),
        })?;

    let found: Vec<String> = raw
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    validate_header(&found)?;

    let df = cast_columns(&raw)?;
    debug!(
        "Loaded {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );

    Ok(df)
}

/// Read only the header row of a CSV file.
pub fn read_header(path: &Path) -> Result<Vec<String>> {
    ensure_readable(path)?;

    let mut lf = raw_reader(path).finish()?;
    let schema = lf.collect_schema()?;

    Ok(schema.iter_names().map(|name| name.to_string()).collect())
}

/// Rows, columns and estimated memory footprint (MB) of a loaded table
pub fn dataset_shape(df: &DataFrame) -> (usize, usize, f64) {
    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);
    (rows, cols, memory_mb)
}

fn ensure_readable(path: &Path) -> Result<()> {
    File::open(path).map(|_| ()).map_err(|source| EdaError::File {
        path: path.to_path_buf(),
        source,
    })
}

/// CSV reader producing all-text columns; typing happens in [`cast_columns`]
fn raw_reader(path: &Path) -> LazyCsvReader {
    let null_values = NULL_TOKENS.iter().map(|token| (*token).into()).collect();

    LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_null_values(Some(NullValues::AllColumns(null_values)))
}

fn validate_header(found: &[String]) -> Result<()> {
    let matches = found.len() == EXPECTED_COLUMNS.len()
        && found
            .iter()
            .zip(EXPECTED_COLUMNS.iter())
            .all(|(actual, expected)| actual == expected);

    if matches {
        Ok(())
    } else {
        Err(EdaError::Header {
            expected: EXPECTED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            found: found.to_vec(),
        })
    }
}

fn cast_columns(raw: &DataFrame) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(EXPECTED_COLUMNS.len());

    for name in EXPECTED_COLUMNS {
        let column = raw.column(name)?;
        let dtype = column_dtype(name);

        let typed = if dtype == DataType::String {
            column.clone()
        } else {
            column
                .strict_cast(&dtype)
                .map_err(|e| EdaError::Parse {
                    column: name.to_string(),
                    message: e.to_string(),
                })?
        };
        columns.push(typed);
    }

    Ok(DataFrame::new(columns)?)
}
