//! Command-line interface for fairbill.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`command`] - Command implementation

pub mod args;
pub mod command;

pub use args::{Cli, DEFAULT_OUTPUT, USAGE};
pub use command::{BillCommand, Command, CommandResult, ReportTarget};
