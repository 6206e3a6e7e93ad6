use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use infl_analysis::{daily_summary, normalise, patient_record};
use infl_ingest::load_table;

use crate::logging::redact_value;
use crate::render::{RenderOptions, render_record, render_summaries, render_table};

/// Daily mean, max and min for each input file.
pub fn run_stats(files: &[PathBuf], options: &RenderOptions) -> Result<String> {
    let mut summaries = Vec::with_capacity(files.len());
    for path in files {
        let span = info_span!("stats", file = %path.display());
        let _guard = span.enter();
        let table = load_table(path).with_context(|| format!("load {}", path.display()))?;
        let summary = daily_summary(&table)
            .with_context(|| format!("daily statistics for {}", path.display()))?;
        info!(
            patients = table.row_count(),
            days = summary.days(),
            "computed daily statistics"
        );
        summaries.push((path.display().to_string(), summary));
    }
    render_summaries(&summaries, options)
}

/// Per-patient normalised table for one input file.
pub fn run_normalise(path: &Path, options: &RenderOptions) -> Result<String> {
    let span = info_span!("normalise", file = %path.display());
    let _guard = span.enter();
    let table = load_table(path).with_context(|| format!("load {}", path.display()))?;
    let normalised =
        normalise(&table).with_context(|| format!("normalise {}", path.display()))?;
    info!(patients = normalised.row_count(), "normalised table");
    render_table(&normalised, options)
}

/// One patient's row shown as an observation history.
pub fn run_record(
    path: &Path,
    index: usize,
    name: Option<&str>,
    options: &RenderOptions,
) -> Result<String> {
    let span = info_span!("record", file = %path.display(), index);
    let _guard = span.enter();
    let table = load_table(path).with_context(|| format!("load {}", path.display()))?;
    let default_name = format!("Patient {index}");
    let name = name.unwrap_or(&default_name);
    let patient = patient_record(&table, index, name)
        .with_context(|| format!("patient record from {}", path.display()))?;
    debug!(
        patient = redact_value(name),
        observations = patient.observations().len(),
        "built patient record"
    );
    render_record(&patient, options)
}
