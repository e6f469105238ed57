//! Pipeline module - load, clean and aggregate the sales table

pub mod aggregate;
pub mod analysis;
pub mod cleaner;
pub mod columns;
pub mod correlation;
pub mod describe;
pub mod error;
pub mod loader;

pub use aggregate::*;
pub use analysis::*;
pub use cleaner::*;
pub use correlation::*;
pub use describe::*;
pub use error::{EdaError, Result};
pub use loader::*;
