//! All aggregates of one analysis run, computed from the cleaned table

use log::debug;
use polars::prelude::*;

use super::aggregate::{
    distinct_count, regional_sales, releases_per_year, sales_by_year_and_genre, sales_totals,
    top_sales_by, top_values, SalesTotal, YearGenreSales, TOP_CATEGORIES, TOP_SALES_GROUPS,
};
use super::columns::{GENRE, PLATFORM, PUBLISHER, RATING};
use super::correlation::{numeric_correlation_matrix, score_sales_correlation, CorrelationMatrix};
use super::describe::{describe, ColumnSummary};
use super::error::Result;

/// Categorical columns reported with distinct counts and most common values
pub const CATEGORY_COLUMNS: [&str; 4] = [PLATFORM, GENRE, PUBLISHER, RATING];

/// Distinct count and most common values of one categorical column
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryProfile {
    pub column: String,
    pub distinct: usize,
    pub top: Vec<(String, usize)>,
}

/// Everything the reporter consumes
#[derive(Debug, Clone)]
pub struct AnalysisResults {
    pub statistics: Vec<ColumnSummary>,
    pub categories: Vec<CategoryProfile>,
    pub sales_totals: Vec<SalesTotal>,
    pub regional_sales: Vec<(String, f64)>,
    pub releases_per_year: Vec<(i32, usize)>,
    pub top_platforms: Vec<(String, f64)>,
    pub top_genres: Vec<(String, f64)>,
    pub top_publishers: Vec<(String, f64)>,
    pub genre_trends: Vec<YearGenreSales>,
    pub correlation: CorrelationMatrix,
    pub score_sales_correlation: CorrelationMatrix,
}

impl AnalysisResults {
    /// Run every aggregation over the cleaned table.
    pub fn compute(df: &DataFrame) -> Result<Self> {
        let categories = CATEGORY_COLUMNS
            .iter()
            .map(|column| {
                Ok(CategoryProfile {
                    column: column.to_string(),
                    distinct: distinct_count(df, column)?,
                    top: top_values(df, column, TOP_CATEGORIES)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let results = Self {
            statistics: describe(df)?,
            categories,
            sales_totals: sales_totals(df)?,
            regional_sales: regional_sales(df)?,
            releases_per_year: releases_per_year(df)?,
            top_platforms: top_sales_by(df, PLATFORM, TOP_SALES_GROUPS)?,
            top_genres: top_sales_by(df, GENRE, TOP_SALES_GROUPS)?,
            top_publishers: top_sales_by(df, PUBLISHER, TOP_SALES_GROUPS)?,
            genre_trends: sales_by_year_and_genre(df)?,
            correlation: numeric_correlation_matrix(df)?,
            score_sales_correlation: score_sales_correlation(df)?,
        };

        debug!(
            "Computed aggregates: {} year/genre groups, {} release years",
            results.genre_trends.len(),
            results.releases_per_year.len()
        );

        Ok(results)
    }
}
