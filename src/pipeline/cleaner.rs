//! Missing value analysis and cleaning of the sales table

use log::{debug, info};
use polars::prelude::*;

use super::columns::{
    CRITIC_COUNT, CRITIC_SCORE, RATING, UNKNOWN_RATING, USER_COUNT, USER_SCORE, YEAR,
};
use super::describe::{median, present_values};
use super::error::{EdaError, Result};

/// User scores at or below this maximum are on the 0-10 scale
pub const USER_SCORE_SCALE_LIMIT: f64 = 10.0;

/// Outcome of median-filling a single column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFill {
    pub column: String,
    /// Median written into missing cells (`None` when nothing was missing)
    pub fill_value: Option<f64>,
    pub filled: usize,
}

/// Record of everything the cleaner changed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleaningReport {
    pub user_score_rescaled: bool,
    pub fills: Vec<ColumnFill>,
    pub ratings_filled: usize,
    pub rows_dropped: usize,
}

/// Count missing values in every column, in table order.
pub fn analyze_missing_values(df: &DataFrame) -> Vec<(String, usize)> {
    df.get_columns()
        .iter()
        .map(|column| (column.name().to_string(), column.null_count()))
        .collect()
}

/// Clean the sales table.
///
/// Steps run in a fixed order: user score rescale, median fill of the two
/// scores, median fill of the two counts, rating placeholder, and finally
/// removal of rows without a release year. Medians are therefore taken over
/// the full table, before any row is dropped.
pub fn clean_dataset(mut df: DataFrame) -> Result<(DataFrame, CleaningReport)> {
    let mut report = CleaningReport {
        user_score_rescaled: rescale_user_score(&mut df)?,
        ..Default::default()
    };

    for column in [USER_SCORE, CRITIC_SCORE, USER_COUNT, CRITIC_COUNT] {
        report.fills.push(median_fill(&mut df, column)?);
    }

    report.ratings_filled = fill_missing_rating(&mut df)?;

    let (df, rows_dropped) = drop_missing_year(df)?;
    report.rows_dropped = rows_dropped;

    info!(
        "Cleaning complete: {} rows kept, {} dropped",
        df.height(),
        rows_dropped
    );

    Ok((df, report))
}

/// Bring user scores onto the 0-100 scale.
///
/// The decision is made once for the whole column from its maximum present
/// value: if that maximum is at most 10 every present value is multiplied by
/// 10, otherwise the column is left as is. A column without present values
/// has no maximum and is not touched. Returns whether rescaling happened.
pub fn rescale_user_score(df: &mut DataFrame) -> Result<bool> {
    let rescaled: Vec<Option<f64>> = {
        let scores = df.column(USER_SCORE)?.f64()?;
        match scores.max() {
            Some(max) if max <= USER_SCORE_SCALE_LIMIT => {
                debug!("{} max is {}, rescaling to 0-100", USER_SCORE, max);
                scores.into_iter().map(|v| v.map(|x| x * 10.0)).collect()
            }
            _ => return Ok(false),
        }
    };

    df.with_column(Column::new(USER_SCORE.into(), rescaled))?;
    Ok(true)
}

/// Replace missing values of a numeric column with the median of its present values.
///
/// Integer columns receive the median rounded half away from zero. A column
/// with no missing values is returned unchanged; a column with missing values
/// but no present ones has no median and fails with [`EdaError::Data`].
pub fn median_fill(df: &mut DataFrame, column: &str) -> Result<ColumnFill> {
    let missing = df.column(column)?.null_count();
    if missing == 0 {
        return Ok(ColumnFill {
            column: column.to_string(),
            fill_value: None,
            filled: 0,
        });
    }

    let values = present_values(df, column)?;
    let fill_value = median(&values).ok_or_else(|| {
        EdaError::data(column, "every value is missing, median is undefined")
    })?;

    let filled = {
        let source = df.column(column)?;
        match source.dtype() {
            DataType::Float64 => {
                let values: Vec<f64> = source
                    .f64()?
                    .into_iter()
                    .map(|v| v.unwrap_or(fill_value))
                    .collect();
                Column::new(column.into(), values)
            }
            DataType::Int64 => {
                let rounded = fill_value.round() as i64;
                let values: Vec<i64> = source
                    .i64()?
                    .into_iter()
                    .map(|v| v.unwrap_or(rounded))
                    .collect();
                Column::new(column.into(), values)
            }
            other => {
                return Err(EdaError::data(
                    column,
                    format!("median fill needs a Float64 or Int64 column, found {}", other),
                ))
            }
        }
    };
    df.with_column(filled)?;

    debug!("Filled {} missing {} with median {}", missing, column, fill_value);

    Ok(ColumnFill {
        column: column.to_string(),
        fill_value: Some(fill_value),
        filled: missing,
    })
}

/// Replace missing ratings with [`UNKNOWN_RATING`]. Returns the number filled.
pub fn fill_missing_rating(df: &mut DataFrame) -> Result<usize> {
    let (filled, missing) = {
        let ratings = df.column(RATING)?.str()?;
        let missing = ratings.null_count();
        let values: Vec<&str> = ratings
            .into_iter()
            .map(|v| v.unwrap_or(UNKNOWN_RATING))
            .collect();
        (Column::new(RATING.into(), values), missing)
    };

    df.with_column(filled)?;
    Ok(missing)
}

/// Remove every row without a release year. Returns the kept table and the
/// number of rows removed.
pub fn drop_missing_year(df: DataFrame) -> Result<(DataFrame, usize)> {
    let before = df.height();
    let mask = df.column(YEAR)?.is_not_null();
    let kept = df.filter(&mask)?;
    let dropped = before - kept.height();

    Ok((kept, dropped))
}
