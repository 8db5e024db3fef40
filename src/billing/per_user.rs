//! Per-user session aggregation.
//!
//! Each user keeps a queue of open Starts and an End closes that user's
//! earliest open Start. Boundary events are resolved against the edges of
//! the observed log window: an End with nothing open is taken to have
//! started at the first timestamp in the log, and any Start still open at
//! the end is closed at the last timestamp.

use std::collections::{HashMap, VecDeque};

use chrono::NaiveTime;
use tracing::debug;

use super::aggregator::seconds_between;
use super::record::{Action, LogRecord};
use super::stats::UsageReport;
use super::SessionFold;

#[derive(Debug, Default)]
pub struct PerUserAggregator {
    users: UsageReport,
    open: HashMap<String, VecDeque<NaiveTime>>,
    first_seen: Option<NaiveTime>,
    last_seen: Option<NaiveTime>,
}

impl PerUserAggregator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionFold for PerUserAggregator {
    fn observe(&mut self, record: &LogRecord) {
        let first_seen = *self.first_seen.get_or_insert(record.timestamp);
        self.last_seen = Some(record.timestamp);

        match record.action {
            Action::Start => {
                self.users.entry(&record.user);
                self.open
                    .entry(record.user.clone())
                    .or_default()
                    .push_back(record.timestamp);
            }
            Action::End => {
                let start = self
                    .open
                    .get_mut(&record.user)
                    .and_then(VecDeque::pop_front)
                    .unwrap_or(first_seen);
                self.users
                    .entry(&record.user)
                    .add_session(seconds_between(start, record.timestamp));
            }
            Action::Other(_) => {}
        }
    }

    fn finish(mut self) -> UsageReport {
        let Some(last_seen) = self.last_seen else {
            return self.users;
        };

        for (user, starts) in self.open.drain() {
            if starts.is_empty() {
                continue;
            }
            debug!(
                "Closing {} open sessions for {} at {}",
                starts.len(),
                user,
                last_seen
            );
            let stats = self.users.entry(&user);
            for start in starts {
                stats.add_session(seconds_between(start, last_seen));
            }
        }
        self.users
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::parse_line;

    fn run(lines: &[&str]) -> UsageReport {
        let mut aggregator = PerUserAggregator::new();
        for record in lines.iter().filter_map(|line| parse_line(line)) {
            aggregator.observe(&record);
        }
        aggregator.finish()
    }

    fn totals(report: &UsageReport) -> Vec<(String, u64, i64)> {
        report
            .iter()
            .map(|u| (u.user.clone(), u.stats.sessions, u.stats.total_time))
            .collect()
    }

    #[test]
    fn pairs_sessions_by_user() {
        let report = run(&[
            "08:00:00 alice Start",
            "08:01:00 bob Start",
            "08:02:00 alice End",
            "08:03:00 bob End",
        ]);
        assert_eq!(
            totals(&report),
            [("alice".to_string(), 1, 120), ("bob".to_string(), 1, 120)]
        );
    }

    #[test]
    fn end_closes_earliest_open_start() {
        let report = run(&[
            "08:00:00 alice Start",
            "08:10:00 alice Start",
            "08:20:00 alice End",
            "08:30:00 alice End",
        ]);
        // 08:00 -> 08:20 and 08:10 -> 08:30.
        assert_eq!(totals(&report), [("alice".to_string(), 2, 2400)]);
    }

    #[test]
    fn unmatched_end_starts_at_first_timestamp() {
        let report = run(&[
            "14:02:03 ALICE99 Start",
            "14:02:05 CHARLIE End",
            "14:02:34 ALICE99 End",
        ]);
        assert_eq!(
            totals(&report),
            [("ALICE99".to_string(), 1, 31), ("CHARLIE".to_string(), 1, 2)]
        );
    }

    #[test]
    fn open_start_closes_at_last_timestamp() {
        let report = run(&[
            "14:02:03 ALICE99 Start",
            "14:02:34 ALICE99 End",
            "14:02:58 CHARLIE Start",
            "14:03:02 ALICE99 Pause",
        ]);
        assert_eq!(
            totals(&report),
            [("ALICE99".to_string(), 1, 31), ("CHARLIE".to_string(), 1, 4)]
        );
    }

    #[test]
    fn users_ordered_by_first_reference() {
        let report = run(&[
            "08:00:00 bob Start",
            "08:01:00 alice End",
            "08:02:00 bob End",
        ]);
        let users: Vec<_> = report.iter().map(|u| u.user.as_str()).collect();
        assert_eq!(users, ["bob", "alice"]);
    }

    #[test]
    fn full_sample_log() {
        let report = run(&[
            "14:02:03 ALICE99 Start",
            "14:02:05 CHARLIE End",
            "14:02:34 ALICE99 End",
            "14:02:58 ALICE99 Start",
            "14:03:02 CHARLIE Start",
            "14:03:33 ALICE99 Start",
            "14:03:35 ALICE99 End",
            "14:03:37 CHARLIE End",
            "14:04:05 ALICE99 End",
            "14:04:23 ALICE99 End",
            "14:04:41 CHARLIE Start",
        ]);
        assert_eq!(
            totals(&report),
            [
                ("ALICE99".to_string(), 4, 240),
                ("CHARLIE".to_string(), 3, 37),
            ]
        );
    }

    #[test]
    fn empty_input_is_empty_report() {
        assert!(run(&[]).is_empty());
    }
}
