//! CLI argument definitions for the inflammation analysis tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "infl",
    version,
    about = "Inflammation data analysis",
    long_about = "Summarise and normalise patient inflammation measurements.\n\n\
                  Input files are comma-separated, one patient per line and\n\
                  one day per column, with no header row."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Result format (table for humans, csv for other tools).
    #[arg(long = "output", value_enum, default_value = "table", global = true)]
    pub output: OutputArg,

    /// Digits after the decimal point in results.
    #[arg(long = "precision", default_value_t = 3, global = true)]
    pub precision: usize,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Allow patient names and measurement values in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Daily mean, max and min across patients.
    Stats(StatsArgs),

    /// Scale each patient's measurements by their own maximum.
    Normalise(NormaliseArgs),

    /// Show one patient's measurements as an observation history.
    Record(RecordArgs),
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Measurement files to summarise.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Parser)]
pub struct NormaliseArgs {
    /// Measurement file to normalise.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct RecordArgs {
    /// Measurement file to read.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Zero-based row of the patient.
    #[arg(long = "patient", value_name = "INDEX")]
    pub patient: usize,

    /// Display name for the patient (default: "Patient <INDEX>").
    #[arg(long = "name")]
    pub name: Option<String>,
}

/// CLI result format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Table,
    Csv,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
