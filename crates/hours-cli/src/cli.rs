//! CLI argument definitions for the business-hours standardizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use hours_model::{DEFAULT_AVAILABILITY_COLUMN, DEFAULT_DELIMITER, DEFAULT_QUOTE};

#[derive(Parser)]
#[command(
    name = "hours",
    version,
    about = "Standardize free-text business hours in CSV files",
    long_about = "Split a free-text availability column into structured fields.\n\n\
                  Adds Day From, Day To, Time From, Time To (24-hour HH:MM) and Notes\n\
                  columns to a semicolon-delimited CSV file."
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
    /// Read a CSV file and write it back with the derived columns appended.
    Standardize(StandardizeArgs),

    /// Parse availability strings and print the derived fields.
    Parse(ParseArgs),
}

#[derive(Parser)]
pub struct StandardizeArgs {
    /// Input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV file (overwritten if present).
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Header name of the availability column.
    #[arg(long = "column", value_name = "NAME", default_value = DEFAULT_AVAILABILITY_COLUMN)]
    pub column: String,

    /// Field delimiter for input and output.
    #[arg(long = "delimiter", value_name = "CHAR", default_value_t = DEFAULT_DELIMITER as char)]
    pub delimiter: char,

    /// Quote character for input and output.
    #[arg(long = "quote", value_name = "CHAR", default_value_t = DEFAULT_QUOTE as char)]
    pub quote: char,

    /// Parse and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Availability strings, e.g. "Mon-Fri 9am-5pm".
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ParseFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ParseFormatArg {
    Table,
    Json,
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
