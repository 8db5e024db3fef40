//! Report output formatters.
//!
//! This module provides formatters for writing a [`UsageReport`] in
//! different formats (the plain billing listing and JSON).

pub mod json;
pub mod text;

use crate::billing::UsageReport;
use std::io::Write;

/// Output format for usage reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `<user> <sessions> <total_time>` line per user.
    #[default]
    Text,
    Json,
}

/// Trait for formatting a usage report.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &UsageReport, writer: &mut W) -> std::io::Result<()>;
}

/// Write `report` to `writer` in the requested format.
pub fn write_report<W: Write>(
    format: OutputFormat,
    report: &UsageReport,
    writer: &mut W,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => TextFormatter::new().format(report, writer),
        OutputFormat::Json => JsonFormatter::new().format(report, writer),
    }
}

pub use json::JsonFormatter;
pub use text::TextFormatter;
