//! Log line parsing.
//!
//! Each input line is `HH:MM:SS <user> <action>`. Lines that do not split
//! into exactly three whitespace-separated fields, or whose first field is
//! not a 24-hour time of day, are rejected with `None`.

use std::fmt;

use chrono::NaiveTime;

/// Timestamp format of the first field.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// What a log line says happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A session boundary opening.
    Start,
    /// A session boundary closing.
    End,
    /// Any other token in the action field. Kept so the record still
    /// moves the observed time window.
    Other(String),
}

impl Action {
    /// Classify an action token. Matching is case-sensitive.
    pub fn from_token(token: &str) -> Self {
        match token {
            "Start" => Action::Start,
            "End" => Action::End,
            other => Action::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Start => f.write_str("Start"),
            Action::End => f.write_str("End"),
            Action::Other(token) => f.write_str(token),
        }
    }
}

/// One parsed log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: NaiveTime,
    pub user: String,
    pub action: Action,
}

impl LogRecord {
    pub fn new(timestamp: NaiveTime, user: impl Into<String>, action: Action) -> Self {
        Self {
            timestamp,
            user: user.into(),
            action,
        }
    }
}

/// Parse a single log line into a [`LogRecord`].
///
/// Returns `None` for lines that should be skipped: a field count other
/// than three, or a first field that is not a valid `HH:MM:SS` time.
///
/// # Example
///
/// ```
/// use fairbill::billing::{parse_line, Action};
///
/// let record = parse_line("14:02:03 ALICE99 Start").unwrap();
/// assert_eq!(record.user, "ALICE99");
/// assert_eq!(record.action, Action::Start);
///
/// assert!(parse_line("14:02:03 ALICE99").is_none());
/// assert!(parse_line("2pm ALICE99 Start").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let mut fields = line.split_whitespace();
    let (Some(time), Some(user), Some(action), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return None;
    };

    let timestamp = NaiveTime::parse_from_str(time, TIMESTAMP_FORMAT).ok()?;

    Some(LogRecord::new(timestamp, user, Action::from_token(action)))
}
