//! Patient-by-day measurement table.
//!
//! Rows are patients, columns are days. A cell is either a measurement or
//! missing (`None`); NaN handed to a constructor is stored as missing so the
//! rest of the workspace never has to reason about float sentinels.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// An immutable, rectangular table of inflammation measurements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Option<f64>>>", into = "Vec<Vec<Option<f64>>>")]
pub struct Table {
    rows: usize,
    columns: usize,
    cells: Vec<Option<f64>>,
}

impl Table {
    /// Build a table from rows of optional cells.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::RaggedRow`] when a row length differs from the
    /// first row.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: IntoIterator<Item = Option<f64>>,
    {
        let mut cells = Vec::new();
        let mut columns = None;
        let mut row_count = 0usize;
        for (row_idx, row) in rows.into_iter().enumerate() {
            let start = cells.len();
            cells.extend(row.into_iter().map(|cell| cell.filter(|value| !value.is_nan())));
            let found = cells.len() - start;
            match columns {
                None => columns = Some(found),
                Some(expected) if expected != found => {
                    return Err(TableError::RaggedRow {
                        row: row_idx,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            row_count += 1;
        }
        let columns = columns.unwrap_or(0);
        // A table of empty rows has no days; keep the shape canonical.
        let rows = if columns == 0 { 0 } else { row_count };
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Build a table from plain floats, reading NaN as a missing cell.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::RaggedRow`] when rows differ in length.
    pub fn from_values<R>(rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: IntoIterator<Item = f64>,
    {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Some).collect::<Vec<_>>()),
        )
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of patients.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of days.
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells[row * self.columns + column]
    }

    pub fn row(&self, row: usize) -> Option<&[Option<f64>]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        Some(&self.cells[start..start + self.columns])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<f64>]> {
        // `chunks` rejects a zero size, and a zero-column table has no rows.
        self.cells.chunks(self.columns.max(1)).take(self.rows)
    }

    /// Cells of one day, top to bottom.
    pub fn column(&self, column: usize) -> impl Iterator<Item = Option<f64>> + '_ {
        let valid = column < self.columns;
        self.rows()
            .filter(move |_| valid)
            .map(move |row| row[column])
    }

    /// Cells in row-major order, with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Option<f64>)> + '_ {
        let columns = self.columns.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (idx / columns, idx % columns, *cell))
    }

    pub fn to_rows(&self) -> Vec<Vec<Option<f64>>> {
        self.rows().map(<[Option<f64>]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<Option<f64>>>> for Table {
    type Error = TableError;

    fn try_from(rows: Vec<Vec<Option<f64>>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Table> for Vec<Vec<Option<f64>>> {
    fn from(table: Table) -> Self {
        table.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_rectangular_table() {
        let table = Table::from_values([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(table.shape(), (2, 3));
        assert_eq!(table.get(1, 2), Some(6.0));
        assert_eq!(table.get(2, 0), None);
        assert_eq!(table.column(1).collect::<Vec<_>>(), vec![Some(2.0), Some(5.0)]);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Table::from_values(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            TableError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn nan_is_stored_as_missing() {
        let table = Table::from_values([[f64::NAN, 1.0]]).unwrap();
        assert_eq!(table.row(0).unwrap(), &[None, Some(1.0)]);
    }

    #[test]
    fn empty_rows_collapse_to_empty_shape() {
        let table = Table::from_rows(vec![Vec::<Option<f64>>::new(), Vec::new()]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.shape(), (0, 0));
        assert_eq!(table.rows().count(), 0);
    }

    #[test]
    fn cells_report_coordinates() {
        let table = Table::from_values([[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let coords: Vec<_> = table.cells().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}
