//! Per-patient normalisation.

use infl_model::Table;

use crate::error::{AnalysisError, Result};

/// Scale each patient's series by that patient's own maximum.
///
/// The input is validated first: any negative measurement fails with
/// [`AnalysisError::NegativeValue`] before anything is computed. The row
/// maximum ignores missing cells.
///
/// # Collapse policy
///
/// Dividing by a zero or absent row maximum is not an error and is not
/// reported. The resulting NaN, like a missing input cell, is rewritten to
/// `0.0`; after that, any negative result (`-0.0` included) is rewritten to
/// `0.0`. Every cell of the returned table is therefore present, finite for
/// finite input, and within `0.0..=1.0`.
///
/// The input table is left untouched; a new table of the same shape is
/// returned.
pub fn normalise(table: &Table) -> Result<Table> {
    ensure_non_negative(table)?;
    tracing::debug!(
        patients = table.row_count(),
        days = table.column_count(),
        "normalising table"
    );

    let rows = table.rows().map(|row| {
        let max = row_max(row);
        row.iter()
            .map(|cell| Some(collapse(divide(*cell, max))))
            .collect::<Vec<_>>()
    });
    Ok(Table::from_rows(rows.collect::<Vec<_>>())?)
}

fn ensure_non_negative(table: &Table) -> Result<()> {
    let negative = table
        .cells()
        .find_map(|(row, column, cell)| match cell {
            Some(value) if value < 0.0 => Some((row, column, value)),
            _ => None,
        });
    match negative {
        Some((row, column, value)) => Err(AnalysisError::NegativeValue { row, column, value }),
        None => Ok(()),
    }
}

fn row_max(row: &[Option<f64>]) -> Option<f64> {
    row.iter().flatten().copied().reduce(f64::max)
}

/// Raw quotient; NaN or infinity pass through.
fn divide(cell: Option<f64>, max: Option<f64>) -> f64 {
    match (cell, max) {
        (Some(value), Some(max)) => value / max,
        _ => f64::NAN,
    }
}

fn collapse(value: f64) -> f64 {
    let value = if value.is_nan() { 0.0 } else { value };
    if value.is_sign_negative() { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &Table, expected: &[&[f64]]) {
        assert_eq!(actual.row_count(), expected.len());
        for (row, expected_row) in actual.rows().zip(expected) {
            assert_eq!(row.len(), expected_row.len());
            for (cell, expected) in row.iter().zip(expected_row.iter()) {
                let cell = cell.expect("normalised cell present");
                assert!((cell - expected).abs() < 1e-9, "{cell} != {expected}");
            }
        }
    }

    #[test]
    fn test_normalise_divides_by_row_max() {
        let table = Table::from_values([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let normalised = normalise(&table).unwrap();
        assert_close(
            &normalised,
            &[&[1.0 / 3.0, 2.0 / 3.0, 1.0], &[4.0 / 6.0, 5.0 / 6.0, 1.0]],
        );
    }

    #[test]
    fn test_normalise_zero_row() {
        let table = Table::from_values([[0.0, 0.0, 0.0]]).unwrap();
        let normalised = normalise(&table).unwrap();
        assert_eq!(normalised.row(0).unwrap(), &[Some(0.0), Some(0.0), Some(0.0)]);
    }

    #[test]
    fn test_normalise_missing_cells_become_zero() {
        let table = Table::from_rows([[Some(2.0), None, Some(4.0)], [None, None, None]]).unwrap();
        let normalised = normalise(&table).unwrap();
        assert_close(&normalised, &[&[0.5, 0.0, 1.0], &[0.0, 0.0, 0.0]]);
    }

    #[test]
    fn test_normalise_rejects_negative() {
        let table = Table::from_values([[1.0, 2.0], [3.0, -4.0]]).unwrap();
        let err = normalise(&table).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::NegativeValue {
                row: 1,
                column: 1,
                value: -4.0
            }
        );
        assert!(err.to_string().starts_with("inflammation values should not be negative"));
    }

    #[test]
    fn test_normalise_negative_zero_is_not_rejected() {
        let table = Table::from_values([[-0.0, 2.0]]).unwrap();
        let normalised = normalise(&table).unwrap();
        let first = normalised.get(0, 0).unwrap();
        assert_eq!(first, 0.0);
        assert!(first.is_sign_positive());
    }

    #[test]
    fn test_normalise_leaves_input_untouched() {
        let table = Table::from_values([[1.0, 2.0]]).unwrap();
        let before = table.clone();
        let _ = normalise(&table).unwrap();
        assert_eq!(table, before);
    }

    #[test]
    fn test_normalise_empty_table() {
        let normalised = normalise(&Table::empty()).unwrap();
        assert!(normalised.is_empty());
    }

    #[test]
    fn test_collapse_policy() {
        assert_eq!(collapse(f64::NAN), 0.0);
        assert!(collapse(-0.0).is_sign_positive());
        assert_eq!(collapse(-1e-12), 0.0);
        assert_eq!(collapse(0.25), 0.25);
    }
}
