//! One patient's row viewed as an observation history.

use infl_model::{Patient, Table};

use crate::error::{AnalysisError, Result};

/// Build a [`Patient`] from row `index` of a table.
///
/// Each present cell becomes an observation on its column's day; missing
/// cells are left out, so the history may have gaps. A present cell in a
/// column past `u32::MAX` has no representable day and fails with
/// [`AnalysisError::DayOutOfRange`].
pub fn patient_record(table: &Table, index: usize, name: &str) -> Result<Patient> {
    let row = table.row(index).ok_or(AnalysisError::PatientOutOfRange {
        index,
        patients: table.row_count(),
    })?;
    let mut patient = Patient::new(name);
    for (day, value) in row.iter().enumerate() {
        if let Some(value) = value {
            patient.add_observation(*value, Some(column_day(day)?));
        }
    }
    tracing::trace!(
        index,
        observations = patient.observations().len(),
        "built patient record"
    );
    Ok(patient)
}

fn column_day(column: usize) -> Result<u32> {
    u32::try_from(column).map_err(|_| AnalysisError::DayOutOfRange { column })
}
