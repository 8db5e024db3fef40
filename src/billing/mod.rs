//! Session aggregation for fair billing.
//!
//! Raw log lines are parsed into [`LogRecord`]s (malformed lines are
//! dropped) and folded, in file order, into a [`UsageReport`] holding
//! each user's session count and total seconds.
//!
//! Two folding strategies are available through [`AggregationMode`]:
//!
//! - [`AggregationMode::Literal`] - one shared Start/End slot for the whole
//!   log, see [`SessionAggregator`]. This is the default.
//! - [`AggregationMode::PerUser`] - Starts and Ends paired per user, see
//!   [`PerUserAggregator`].
//!
//! # Example
//!
//! ```
//! use fairbill::billing::{aggregate, AggregationMode};
//!
//! let report = aggregate(
//!     ["08:00:00 alice Start", "08:05:00 alice End"],
//!     AggregationMode::Literal,
//! );
//! let alice = report.get("alice").unwrap();
//! assert_eq!((alice.sessions, alice.total_time), (1, 300));
//! ```

mod aggregator;
mod per_user;
mod record;
mod stats;

use std::io::BufRead;

use tracing::debug;

pub use aggregator::SessionAggregator;
pub use per_user::PerUserAggregator;
pub use record::{parse_line, Action, LogRecord, TIMESTAMP_FORMAT};
pub use stats::{UsageReport, UserStats, UserUsage};

/// A strategy for folding records into a report.
pub trait SessionFold {
    /// Consume the next record in log order.
    fn observe(&mut self, record: &LogRecord);

    /// Apply end-of-log adjustments and return the report.
    fn finish(self) -> UsageReport;
}

/// How Start and End events are matched into sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum AggregationMode {
    /// Pair each End with the latest Start anywhere in the log.
    #[default]
    Literal,
    /// Pair each End with the same user's earliest open Start.
    PerUser,
}

/// Aggregate an in-memory sequence of lines.
pub fn aggregate<I, S>(lines: I, mode: AggregationMode) -> UsageReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines = lines.into_iter().map(Ok::<S, std::convert::Infallible>);
    match fold_lines(lines, mode) {
        Ok(report) => report,
        Err(never) => match never {},
    }
}

/// Aggregate a reader line by line without buffering the whole input.
///
/// Stops at the first read error, including a line that is not valid
/// UTF-8.
pub fn aggregate_reader<R: BufRead>(
    reader: R,
    mode: AggregationMode,
) -> std::io::Result<UsageReport> {
    fold_lines(reader.lines(), mode)
}

fn fold_lines<I, S, E>(lines: I, mode: AggregationMode) -> Result<UsageReport, E>
where
    I: Iterator<Item = Result<S, E>>,
    S: AsRef<str>,
{
    match mode {
        AggregationMode::Literal => fold_with(SessionAggregator::new(), lines),
        AggregationMode::PerUser => fold_with(PerUserAggregator::new(), lines),
    }
}

fn fold_with<F, I, S, E>(mut fold: F, lines: I) -> Result<UsageReport, E>
where
    F: SessionFold,
    I: Iterator<Item = Result<S, E>>,
    S: AsRef<str>,
{
    let mut records = 0usize;
    for line in lines {
        if let Some(record) = parse_line(line?.as_ref()) {
            fold.observe(&record);
            records += 1;
        }
    }

    let report = fold.finish();
    debug!(
        "Aggregated {} records into {} users",
        records,
        report.len()
    );
    Ok(report)
}
