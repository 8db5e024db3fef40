//! Fairbill - per-user session usage from Start/End event logs.
//!
//! Fairbill reads a chronologically ordered log of `HH:MM:SS <user>
//! <Start|End>` lines and reports, for each user, how many sessions were
//! seen and their total duration in seconds.
//!
//! # Modules
//!
//! - [`billing`] - Line parsing and session aggregation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`output`] - Report formatters
//!
//! # Example
//!
//! ```
//! use fairbill::billing::{aggregate, AggregationMode};
//! use fairbill::output::{write_report, OutputFormat};
//!
//! let report = aggregate(
//!     ["08:00:00 alice Start", "08:05:00 bob End"],
//!     AggregationMode::Literal,
//! );
//! let mut out = Vec::new();
//! write_report(OutputFormat::Text, &report, &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "bob 1 300\n");
//! ```

pub mod billing;
pub mod cli;
pub mod error;
pub mod output;

pub use error::{BillingError, Result};
