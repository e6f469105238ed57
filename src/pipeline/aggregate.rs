//! Grouped sums, counts and rankings over the cleaned sales table.
//!
//! Every function here only reads the table. Missing group keys are skipped;
//! missing sales figures contribute nothing to a sum but do not remove the
//! row's group. Empty tables produce empty results.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::ops::AddAssign;

use polars::prelude::*;

use super::columns::{GENRE, GLOBAL_SALES, REGIONAL_SALES_COLUMNS, SALES_COLUMNS, YEAR};
use super::describe::{column_as_f64, present_values};
use super::error::Result;

/// Number of entries in the "most common" console tables
pub const TOP_CATEGORIES: usize = 5;

/// Number of entries in the top-sales charts
pub const TOP_SALES_GROUPS: usize = 10;

/// Total and mean of one sales column
#[derive(Debug, Clone, PartialEq)]
pub struct SalesTotal {
    pub column: String,
    pub total: f64,
    /// `None` when the column has no present values
    pub mean: Option<f64>,
}

/// Global sales of one genre in one release year
#[derive(Debug, Clone, PartialEq)]
pub struct YearGenreSales {
    pub year: i32,
    pub genre: String,
    pub global_sales: f64,
}

/// Accumulator keyed by first appearance, so a stable sort keeps ties in
/// source order.
struct Tally<T> {
    index: HashMap<String, usize>,
    entries: Vec<(String, T)>,
}

impl<T: Copy + Default + AddAssign + PartialOrd> Tally<T> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    fn add(&mut self, key: &str, amount: T) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += amount,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), amount));
            }
        }
    }

    /// Entries sorted by value descending, ties in first-seen order, truncated to `n`
    fn top(mut self, n: usize) -> Vec<(String, T)> {
        self.entries
            .sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        self.entries.truncate(n);
        self.entries
    }
}

/// Total and mean of each of the five sales columns.
pub fn sales_totals(df: &DataFrame) -> Result<Vec<SalesTotal>> {
    SALES_COLUMNS
        .iter()
        .map(|column| {
            let values = present_values(df, column)?;
            let total: f64 = values.iter().sum();
            let mean = if values.is_empty() {
                None
            } else {
                Some(total / values.len() as f64)
            };
            Ok(SalesTotal {
                column: column.to_string(),
                total,
                mean,
            })
        })
        .collect()
}

/// Totals of the four regional sales columns (global excluded).
pub fn regional_sales(df: &DataFrame) -> Result<Vec<(String, f64)>> {
    REGIONAL_SALES_COLUMNS
        .iter()
        .map(|column| {
            let total: f64 = present_values(df, column)?.iter().sum();
            Ok((column.to_string(), total))
        })
        .collect()
}

/// Number of distinct present values in a text column.
pub fn distinct_count(df: &DataFrame, column: &str) -> Result<usize> {
    let values = df.column(column)?.str()?;
    let distinct: HashSet<&str> = values.into_iter().flatten().collect();
    Ok(distinct.len())
}

/// The `n` most frequent present values of a text column.
///
/// Ordered by descending frequency; equal frequencies keep the order in
/// which the values first appear in the table.
pub fn top_values(df: &DataFrame, column: &str, n: usize) -> Result<Vec<(String, usize)>> {
    let values = df.column(column)?.str()?;
    let mut tally = Tally::new();
    for value in values.into_iter().flatten() {
        tally.add(value, 1usize);
    }
    Ok(tally.top(n))
}

/// Global sales summed per value of a text column, top `n` by sum.
pub fn top_sales_by(df: &DataFrame, column: &str, n: usize) -> Result<Vec<(String, f64)>> {
    let keys = df.column(column)?.str()?;
    let sales = column_as_f64(df, GLOBAL_SALES)?;

    let mut tally = Tally::new();
    for (key, amount) in keys.into_iter().zip(sales) {
        if let Some(key) = key {
            tally.add(key, amount.unwrap_or(0.0));
        }
    }
    Ok(tally.top(n))
}

/// Global sales summed per (year, genre), every combination present in the
/// table, ordered by year then genre.
pub fn sales_by_year_and_genre(df: &DataFrame) -> Result<Vec<YearGenreSales>> {
    let years = df.column(YEAR)?.cast(&DataType::Int32)?;
    let genres = df.column(GENRE)?.str()?;
    let sales = column_as_f64(df, GLOBAL_SALES)?;

    let mut groups: BTreeMap<(i32, String), f64> = BTreeMap::new();
    for ((year, genre), amount) in years.i32()?.into_iter().zip(genres).zip(sales) {
        if let (Some(year), Some(genre)) = (year, genre) {
            *groups.entry((year, genre.to_string())).or_insert(0.0) += amount.unwrap_or(0.0);
        }
    }

    Ok(groups
        .into_iter()
        .map(|((year, genre), global_sales)| YearGenreSales {
            year,
            genre,
            global_sales,
        })
        .collect())
}

/// Number of releases per year, ordered by year.
pub fn releases_per_year(df: &DataFrame) -> Result<Vec<(i32, usize)>> {
    let years = df.column(YEAR)?.cast(&DataType::Int32)?;

    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for year in years.i32()?.into_iter().flatten() {
        *counts.entry(year).or_insert(0) += 1;
    }
    Ok(counts.into_iter().collect())
}

/// Distinct genres in first-seen order (series order for the trends chart)
pub fn genres_in_order(trends: &[YearGenreSales]) -> Vec<String> {
    let mut seen = HashSet::new();
    trends
        .iter()
        .filter(|entry| seen.insert(entry.genre.as_str()))
        .map(|entry| entry.genre.clone())
        .collect()
}
