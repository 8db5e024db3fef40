//! JSON output formatter.
//!
//! Formats a usage report as machine-readable JSON for downstream billing
//! tools.

use super::ReportFormatter;
use crate::billing::UsageReport;
use std::io::Write;

/// Formats a report as pretty-printed JSON.
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &UsageReport, writer: &mut W) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, report).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
