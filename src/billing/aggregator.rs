//! Literal session aggregation.
//!
//! Start and End events are not paired per user. The aggregator keeps a
//! single "last Start" and "last End" slot for the whole log; every End
//! closes a session spanning from the most recent Start anywhere in the
//! log, billed to the user named on the End line.
//!
//! After the last record, if the log contained Starts but no End (or Ends
//! but no Start) the gap between that boundary and the last timestamp in
//! the log is added to every user's total.

use chrono::NaiveTime;
use tracing::debug;

use super::record::{Action, LogRecord};
use super::stats::UsageReport;
use super::SessionFold;

/// Folds records into a [`UsageReport`] using one shared Start/End slot.
#[derive(Debug, Default)]
pub struct SessionAggregator {
    users: UsageReport,
    last_start: Option<NaiveTime>,
    last_end: Option<NaiveTime>,
    last_seen: Option<NaiveTime>,
}

impl SessionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds to add to every user once the log is exhausted, if any.
    fn boundary_correction(&self) -> Option<i64> {
        let last_seen = self.last_seen?;
        match (self.last_start, self.last_end) {
            (Some(start), None) => Some(seconds_between(start, last_seen)),
            (None, Some(end)) => Some(seconds_between(last_seen, end)),
            _ => None,
        }
    }
}

impl SessionFold for SessionAggregator {
    fn observe(&mut self, record: &LogRecord) {
        self.last_seen = Some(record.timestamp);

        match record.action {
            Action::Start => self.last_start = Some(record.timestamp),
            Action::End => {
                self.last_end = Some(record.timestamp);
                // An End with no Start anywhere before it contributes no time
                // of its own; the boundary correction accounts for it.
                let duration = self
                    .last_start
                    .map_or(0, |start| seconds_between(start, record.timestamp));
                self.users.entry(&record.user).add_session(duration);
            }
            Action::Other(_) => {}
        }
    }

    fn finish(mut self) -> UsageReport {
        if let Some(correction) = self.boundary_correction() {
            debug!(
                "Applying boundary correction of {}s to {} users",
                correction,
                self.users.len()
            );
            for stats in self.users.stats_mut() {
                stats.add_time(correction);
            }
        }
        self.users
    }
}

/// Whole seconds from `start` to `end`, negative when `end` is earlier.
pub(crate) fn seconds_between(start: NaiveTime, end: NaiveTime) -> i64 {
    end.signed_duration_since(start).num_seconds()
}
