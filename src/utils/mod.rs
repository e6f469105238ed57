//! Terminal helpers shared by the binary

mod progress;
mod styling;

pub use progress::*;
pub use styling::*;
