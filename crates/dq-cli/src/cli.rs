//! CLI argument definitions for the Data Quality Auditor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dq",
    version,
    about = "Data Quality Auditor - profile tabular datasets and audit training readiness",
    long_about = "Profile a CSV dataset before model training.\n\n\
                  Computes per-column statistics (missingness, cardinality, ranges,\n\
                  top values, target correlation) and can forward the summary to the\n\
                  Gemini API for a structured data quality audit covering leakage,\n\
                  imbalance, and generalization risks."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Profile a CSV file and print the dataset summary. No network use.
    Summarize(SummarizeArgs),

    /// Profile a CSV file and request an audit report from the Gemini API.
    Audit(AuditArgs),
}

#[derive(Parser)]
pub struct SummarizeArgs {
    /// Path to the CSV file (first line must be the header row).
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,

    /// Target column (default: the last column of the file).
    #[arg(long = "target", value_name = "COLUMN")]
    pub target: Option<String>,

    /// Feature columns, comma separated (default: every non-target column).
    #[arg(long = "features", value_name = "COLUMNS", value_delimiter = ',')]
    pub features: Option<Vec<String>>,

    /// Emit the summary as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct AuditArgs {
    /// Path to the CSV file (first line must be the header row).
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,

    /// Target column (default: the last column of the file).
    #[arg(long = "target", value_name = "COLUMN")]
    pub target: Option<String>,

    /// Feature columns, comma separated (default: every non-target column).
    #[arg(long = "features", value_name = "COLUMNS", value_delimiter = ',')]
    pub features: Option<Vec<String>>,

    /// Gemini API key (default: the GEMINI_API_KEY environment variable).
    #[arg(long = "api-key", value_name = "KEY")]
    pub api_key: Option<String>,

    /// Model to request the audit from.
    #[arg(long = "model", value_name = "NAME")]
    pub model: Option<String>,

    /// Override the API base URL (useful for testing).
    #[arg(long = "api-base", value_name = "URL", hide = true)]
    pub api_base: Option<String>,

    /// Emit summary and report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
