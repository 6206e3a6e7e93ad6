//! Delimited measurement file reading.

mod options;
mod reader;

pub use options::{DEFAULT_MISSING_TOKENS, LoadOptions};
pub use reader::{load_table, load_table_with_options};
