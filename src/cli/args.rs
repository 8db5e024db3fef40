//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::billing::AggregationMode;
use crate::output::OutputFormat;

/// Report file written when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "sample.txt";

/// Usage line printed when the argument count is wrong.
pub const USAGE: &str = "Usage: fairbill <input-file>";

/// Fairbill - per-user session counts and durations from Start/End logs.
#[derive(Debug, Parser)]
#[command(name = "fairbill")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log file with `HH:MM:SS <user> <Start|End>` lines
    pub input: PathBuf,

    /// Report file to write (truncated if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Write the report to standard output instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// How Start and End events are paired into sessions
    #[arg(long, value_enum, default_value_t = AggregationMode::Literal)]
    pub mode: AggregationMode,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
