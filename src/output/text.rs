//! Plain billing listing.

use super::ReportFormatter;
use crate::billing::UsageReport;
use std::io::Write;

/// Formats a report as `<user> <sessions> <total_time>` lines.
#[derive(Debug, Default)]
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for TextFormatter {
    fn format<W: Write>(&self, report: &UsageReport, writer: &mut W) -> std::io::Result<()> {
        for usage in report.iter() {
            writeln!(
                writer,
                "{} {} {}",
                usage.user, usage.stats.sessions, usage.stats.total_time
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(report: &UsageReport) -> String {
        let mut buf = Vec::new();
        TextFormatter::new().format(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn one_line_per_user_in_order() {
        let mut report = UsageReport::new();
        report.entry("ALICE99").add_session(240);
        report.entry("CHARLIE").add_session(37);

        assert_eq!(render(&report), "ALICE99 1 240\nCHARLIE 1 37\n");
    }

    #[test]
    fn negative_totals_are_written_as_is() {
        let mut report = UsageReport::new();
        report.entry("bob").add_session(-300);

        assert_eq!(render(&report), "bob 1 -300\n");
    }

    #[test]
    fn empty_report_writes_nothing() {
        assert_eq!(render(&UsageReport::new()), "");
    }
}
