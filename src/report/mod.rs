//! Report module - tables, charts and console summaries

pub mod charts;
pub mod summary;
pub mod writer;

pub use summary::*;
pub use writer::*;
