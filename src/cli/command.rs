//! Command execution.
//!
//! - [`Command`] trait for runnable commands
//! - [`CommandResult`] for uniform result reporting
//! - [`BillCommand`], which reads a log and writes the usage report

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::billing::{aggregate_reader, AggregationMode, UsageReport};
use crate::cli::args::Cli;
use crate::error::{BillingError, Result};
use crate::output::{write_report, OutputFormat};

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Where the report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportTarget {
    File(PathBuf),
    Stdout,
}

/// Aggregates one log file into a usage report.
pub struct BillCommand {
    input: PathBuf,
    target: ReportTarget,
    mode: AggregationMode,
    format: OutputFormat,
}

impl BillCommand {
    /// Create a new bill command.
    pub fn new(
        input: impl Into<PathBuf>,
        target: ReportTarget,
        mode: AggregationMode,
        format: OutputFormat,
    ) -> Self {
        Self {
            input: input.into(),
            target,
            mode,
            format,
        }
    }

    /// Build the command from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        let target = if cli.stdout {
            ReportTarget::Stdout
        } else {
            ReportTarget::File(cli.output.clone())
        };
        Self::new(&cli.input, target, cli.mode, cli.format)
    }

    /// Get the input log path.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Read and aggregate the input log.
    pub fn aggregate(&self) -> Result<UsageReport> {
        let file = File::open(&self.input).map_err(|source| BillingError::InputOpen {
            path: self.input.clone(),
            source,
        })?;

        aggregate_reader(BufReader::new(file), self.mode).map_err(|source| {
            BillingError::InputRead {
                path: self.input.clone(),
                source,
            }
        })
    }

    fn write(&self, report: &UsageReport) -> Result<()> {
        match &self.target {
            ReportTarget::File(path) => {
                let wrap = |source| BillingError::OutputWrite {
                    path: path.clone(),
                    source,
                };
                let file = File::create(path).map_err(wrap)?;
                let mut writer = BufWriter::new(file);
                write_report(self.format, report, &mut writer).map_err(wrap)?;
                writer.flush().map_err(wrap)?;
                info!("Wrote {} users to {}", report.len(), path.display());
            }
            ReportTarget::Stdout => {
                let mut stdout = io::stdout().lock();
                write_report(self.format, report, &mut stdout)?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

impl Command for BillCommand {
    fn execute(&self) -> Result<CommandResult> {
        debug!(
            "Aggregating {} in {:?} mode",
            self.input.display(),
            self.mode
        );

        let report = self.aggregate()?;
        self.write(&report)?;

        Ok(CommandResult::success())
    }
}
