//! Error types for table analysis.

use infl_model::TableError;
use thiserror::Error;

/// Errors raised when a table is not valid input for an analysis.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// Statistics need at least one patient and one day.
    #[error("table is empty ({rows} rows x {columns} columns)")]
    EmptyTable { rows: usize, columns: usize },

    /// Normalisation found a negative measurement.
    #[error("inflammation values should not be negative (row {row}, column {column}: {value})")]
    NegativeValue { row: usize, column: usize, value: f64 },

    /// A patient index past the end of the table.
    #[error("patient {index} out of range: table has {patients} patients")]
    PatientOutOfRange { index: usize, patients: usize },

    /// A column index with no `u32` day.
    #[error("column {column} has no representable day")]
    DayOutOfRange { column: usize },

    /// A derived table could not be assembled.
    #[error(transparent)]
    Table(#[from] TableError),
}

impl AnalysisError {
    /// True for errors caused by the caller passing an unusable table.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyTable { .. }
                | Self::NegativeValue { .. }
                | Self::PatientOutOfRange { .. }
                | Self::DayOutOfRange { .. }
        )
    }
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
