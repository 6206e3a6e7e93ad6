//! Column-wise (per-day) statistics across all patients.
//!
//! Missing cells are skipped. A day on which every patient is missing has no
//! statistic and yields `None`.

use infl_model::Table;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Mean, maximum and minimum for every day of a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub mean: Vec<Option<f64>>,
    pub max: Vec<Option<f64>>,
    pub min: Vec<Option<f64>>,
}

impl DailySummary {
    /// Number of days summarised.
    pub fn days(&self) -> usize {
        self.mean.len()
    }
}

/// Arithmetic mean of each day across all patients.
pub fn daily_mean(table: &Table) -> Result<Vec<Option<f64>>> {
    per_column(table, |values| {
        let (sum, count) = values.fold((0.0, 0usize), |(sum, count), value| {
            (sum + value, count + 1)
        });
        (count > 0).then(|| sum / count as f64)
    })
}

/// Maximum of each day across all patients.
pub fn daily_max(table: &Table) -> Result<Vec<Option<f64>>> {
    per_column(table, |values| values.reduce(f64::max))
}

/// Minimum of each day across all patients.
pub fn daily_min(table: &Table) -> Result<Vec<Option<f64>>> {
    per_column(table, |values| values.reduce(f64::min))
}

/// All three daily statistics in one pass over the input checks.
pub fn daily_summary(table: &Table) -> Result<DailySummary> {
    Ok(DailySummary {
        mean: daily_mean(table)?,
        max: daily_max(table)?,
        min: daily_min(table)?,
    })
}

fn per_column<F>(table: &Table, aggregate: F) -> Result<Vec<Option<f64>>>
where
    F: Fn(&mut dyn Iterator<Item = f64>) -> Option<f64>,
{
    ensure_not_empty(table)?;
    Ok((0..table.column_count())
        .map(|column| aggregate(&mut table.column(column).flatten()))
        .collect())
}

fn ensure_not_empty(table: &Table) -> Result<()> {
    if table.is_empty() {
        let (rows, columns) = table.shape();
        return Err(AnalysisError::EmptyTable { rows, columns });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> Table {
        Table::from_values([[1.0, 2.0], [3.0, 4.0]]).unwrap()
    }

    #[test]
    fn test_daily_mean() {
        assert_eq!(daily_mean(&two_by_two()).unwrap(), vec![Some(2.0), Some(3.0)]);
    }

    #[test]
    fn test_daily_mean_zeros() {
        let table = Table::from_values([[0.0, 0.0], [0.0, 0.0], [0.0, 0.0]]).unwrap();
        assert_eq!(daily_mean(&table).unwrap(), vec![Some(0.0), Some(0.0)]);
    }

    #[test]
    fn test_daily_max() {
        assert_eq!(daily_max(&two_by_two()).unwrap(), vec![Some(3.0), Some(4.0)]);
    }

    #[test]
    fn test_daily_min() {
        assert_eq!(daily_min(&two_by_two()).unwrap(), vec![Some(1.0), Some(2.0)]);
    }

    #[test]
    fn test_missing_cells_are_skipped() {
        let table = Table::from_rows([[Some(1.0), None], [Some(3.0), None], [None, None]]).unwrap();
        assert_eq!(daily_mean(&table).unwrap(), vec![Some(2.0), None]);
        assert_eq!(daily_max(&table).unwrap(), vec![Some(3.0), None]);
        assert_eq!(daily_min(&table).unwrap(), vec![Some(1.0), None]);
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let err = daily_mean(&Table::empty()).unwrap_err();
        assert_eq!(err, AnalysisError::EmptyTable { rows: 0, columns: 0 });
        assert!(daily_max(&Table::empty()).is_err());
        assert!(daily_min(&Table::empty()).is_err());
    }

    #[test]
    fn test_daily_summary() {
        let summary = daily_summary(&two_by_two()).unwrap();
        assert_eq!(summary.days(), 2);
        assert_eq!(summary.max, vec![Some(3.0), Some(4.0)]);
    }
}
