//! VGEDA: video game sales exploratory analysis
//!
//! Loads the sales table, cleans it (score rescaling, median imputation,
//! rating placeholder, dropping rows without a release year), aggregates it
//! and writes the cleaned table, a statistics table and a set of charts.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
