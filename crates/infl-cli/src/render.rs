//! Text rendering of analysis results.
//!
//! `Table` output is meant for terminals; `Csv` output is plain
//! comma-separated text that other tools (or the loader) can read back.

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement};

use infl_analysis::DailySummary;
use infl_model::{Patient, Person, Table};

/// Output style for rendered results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    #[default]
    Table,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub style: OutputStyle,
    /// Digits after the decimal point.
    pub precision: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: OutputStyle::Table,
            precision: 3,
        }
    }
}

/// Render daily summaries, one per labelled input.
///
/// CSV output is a single document with a leading `file` column so several
/// inputs stay machine-readable together.
pub fn render_summaries(
    summaries: &[(String, DailySummary)],
    options: &RenderOptions,
) -> Result<String> {
    match options.style {
        OutputStyle::Csv => {
            let mut records = vec![vec![
                "file".to_string(),
                "day".to_string(),
                "mean".to_string(),
                "max".to_string(),
                "min".to_string(),
            ]];
            for (label, summary) in summaries {
                for day in 0..summary.days() {
                    records.push(vec![
                        label.clone(),
                        day.to_string(),
                        csv_value(summary.mean[day], options.precision),
                        csv_value(summary.max[day], options.precision),
                        csv_value(summary.min[day], options.precision),
                    ]);
                }
            }
            write_csv(&records)
        }
        OutputStyle::Table => {
            let mut blocks = Vec::with_capacity(summaries.len());
            for (label, summary) in summaries {
                let mut table = styled_table();
                table.set_header(vec![
                    header_cell("Day"),
                    header_cell("Mean"),
                    header_cell("Max"),
                    header_cell("Min"),
                ]);
                for day in 0..summary.days() {
                    table.add_row(vec![
                        Cell::new(day),
                        value_cell(summary.mean[day], options.precision),
                        value_cell(summary.max[day], options.precision),
                        value_cell(summary.min[day], options.precision),
                    ]);
                }
                align_numeric_columns(&mut table, 0..4);
                blocks.push(format!("{label}\n{table}"));
            }
            Ok(blocks.join("\n\n"))
        }
    }
}

/// Render a measurement table. CSV output has no header, matching the
/// input file format.
pub fn render_table(table: &Table, options: &RenderOptions) -> Result<String> {
    match options.style {
        OutputStyle::Csv => {
            let records: Vec<Vec<String>> = table
                .rows()
                .map(|row| {
                    row.iter()
                        .map(|cell| csv_value(*cell, options.precision))
                        .collect()
                })
                .collect();
            write_csv(&records)
        }
        OutputStyle::Table => {
            let mut rendered = styled_table();
            let mut header = vec![header_cell("Patient")];
            header.extend(
                (0..table.column_count()).map(|day| header_cell(&format!("Day {day}"))),
            );
            rendered.set_header(header);
            for (index, row) in table.rows().enumerate() {
                let mut cells = vec![Cell::new(index)];
                cells.extend(row.iter().map(|cell| value_cell(*cell, options.precision)));
                rendered.add_row(cells);
            }
            align_numeric_columns(&mut rendered, 0..table.column_count() + 1);
            Ok(rendered.to_string())
        }
    }
}

/// Render one patient's observation history in entry order.
pub fn render_record(patient: &Patient, options: &RenderOptions) -> Result<String> {
    match options.style {
        OutputStyle::Csv => {
            let mut records = vec![vec!["day".to_string(), "value".to_string()]];
            records.extend(patient.observations().iter().map(|observation| {
                vec![
                    observation.day.to_string(),
                    format_value(observation.value, options.precision),
                ]
            }));
            write_csv(&records)
        }
        OutputStyle::Table => {
            let mut table = styled_table();
            table.set_header(vec![header_cell("Day"), header_cell("Value")]);
            for observation in patient.observations() {
                table.add_row(vec![
                    Cell::new(observation.day),
                    Cell::new(format_value(observation.value, options.precision)),
                ]);
            }
            align_numeric_columns(&mut table, 0..2);
            Ok(format!("Patient: {}\n{table}", patient.describe()))
        }
    }
}

pub fn format_value(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

fn csv_value(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(String::new, |value| format_value(value, precision))
}

fn write_csv(records: &[Vec<String>]) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        for record in records {
            writer.write_record(record).context("write csv record")?;
        }
        writer.flush().context("flush csv output")?;
    }
    String::from_utf8(buffer).context("csv output is not utf-8")
}

fn styled_table() -> comfy_table::Table {
    let mut table = comfy_table::Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Disabled);
    table
}

fn align_numeric_columns(table: &mut comfy_table::Table, columns: std::ops::Range<usize>) {
    for index in columns {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: Option<f64>, precision: usize) -> Cell {
    match value {
        Some(value) => Cell::new(format_value(value, precision)),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}
