//! Measurement file reading into a [`Table`].

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use infl_model::{Table, TableError};

use crate::error::{IngestError, Result};

use super::options::LoadOptions;

/// Load a comma-separated measurement file with default options.
///
/// Each line is one patient and each column one day; there is no header row.
pub fn load_table(path: &Path) -> Result<Table> {
    load_table_with_options(path, &LoadOptions::default())
}

/// Load a delimited measurement file.
///
/// Blank and whitespace-only lines are skipped and tokens are trimmed. Tokens listed in
/// [`LoadOptions::missing_tokens`] load as missing cells.
pub fn load_table_with_options(path: &Path, options: &LoadOptions) -> Result<Table> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(options.delimiter)
        .from_reader(file);

    let mut rows: Vec<Vec<Option<f64>>> = Vec::new();
    let mut expected: Option<usize> = None;
    for record in reader.records() {
        let record = record.map_err(|e| record_error(path, e))?;
        if is_blank_line(&record) {
            continue;
        }
        let line = record
            .position()
            .map_or(rows.len() as u64 + 1, csv::Position::line);
        let row = parse_row(path, line, &record, options)?;
        match expected {
            None => expected = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(IngestError::RaggedRow {
                    path: path.to_path_buf(),
                    line,
                    expected,
                    found: row.len(),
                });
            }
            Some(_) => {}
        }
        tracing::trace!(line, columns = row.len(), "read measurement row");
        rows.push(row);
    }

    let table = Table::from_rows(rows).map_err(|e| match e {
        TableError::RaggedRow {
            row,
            expected,
            found,
        } => IngestError::RaggedRow {
            path: path.to_path_buf(),
            line: row as u64 + 1,
            expected,
            found,
        },
    })?;
    tracing::debug!(
        path = %path.display(),
        patients = table.row_count(),
        days = table.column_count(),
        "loaded measurement table"
    );
    Ok(table)
}

fn parse_row(
    path: &Path,
    line: u64,
    record: &StringRecord,
    options: &LoadOptions,
) -> Result<Vec<Option<f64>>> {
    record
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let token = clean_token(field);
            if options.is_missing(token) {
                return Ok(None);
            }
            token
                .parse::<f64>()
                .map(Some)
                .map_err(|_| IngestError::InvalidNumber {
                    path: path.to_path_buf(),
                    line,
                    column: idx + 1,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Whitespace-only line. Lines holding delimiters are rows of missing cells
/// and still go through the width check.
fn is_blank_line(record: &StringRecord) -> bool {
    record.len() == 1 && clean_token(&record[0]).is_empty()
}

fn clean_token(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

fn open_error(path: &Path, source: std::io::Error) -> IngestError {
    if source.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn record_error(path: &Path, source: csv::Error) -> IngestError {
    if source.is_io_error() {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: source.into(),
        }
    } else {
        IngestError::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}
