//! Inflammation data ingestion.
//!
//! Reads delimited measurement files (one patient per line, one day per
//! column, no header) into [`infl_model::Table`]s.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use infl_ingest::load_table;
//!
//! let table = load_table(Path::new("data/inflammation-01.csv"))?;
//! println!("{} patients over {} days", table.row_count(), table.column_count());
//! ```

mod delimited;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === Table Loading ===
pub use delimited::{DEFAULT_MISSING_TOKENS, LoadOptions, load_table, load_table_with_options};
