//! Inflammation table analysis.
//!
//! Pure functions over [`infl_model::Table`]:
//!
//! - **Daily statistics**: per-day mean, maximum and minimum across patients
//! - **Normalisation**: each patient's series scaled by its own maximum
//! - **Patient records**: one table row as a [`infl_model::Patient`]

mod error;
mod normalise;
mod record;
mod stats;

pub use error::{AnalysisError, Result};
pub use normalise::normalise;
pub use record::patient_record;
pub use stats::{DailySummary, daily_max, daily_mean, daily_min, daily_summary};
