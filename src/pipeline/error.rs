//! Error types for the analysis pipeline.
//!
//! Nothing in the pipeline recovers from these: every variant propagates to
//! `main` and terminates the run.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while loading, cleaning, aggregating or reporting.
#[derive(Error, Debug)]
pub enum EdaError {
    /// Input path is missing or cannot be read.
    #[error("Cannot read input file {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header row differs from the expected column list.
    #[error("Unexpected header: expected {expected:?}, found {found:?}")]
    Header {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A cell could not be parsed as its column's type.
    #[error("Failed to parse column '{column}': {message}")]
    Parse { column: String, message: String },

    /// Data makes an operation undefined (e.g. median of an all-missing column).
    #[error("Data error in column '{column}': {message}")]
    Data { column: String, message: String },

    /// Writing an output file failed.
    #[error("Failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// Chart rendering failed or was given an empty aggregate.
    #[error("Failed to render chart '{chart}': {message}")]
    Chart { chart: String, message: String },

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

impl EdaError {
    pub fn data(column: &str, message: impl Into<String>) -> Self {
        EdaError::Data {
            column: column.to_string(),
            message: message.into(),
        }
    }

    pub fn chart(chart: &str, message: impl ToString) -> Self {
        EdaError::Chart {
            chart: chart.to_string(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EdaError>;
