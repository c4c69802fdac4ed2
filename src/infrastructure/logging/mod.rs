//! Log sinks: line format and size-capped rotating file.

mod format;
mod rotating;

pub use format::{LineFormat, TIMESTAMP_FORMAT};
pub use rotating::{RotatingFile, RotatingWriter};
