//! Fairbill CLI entry point.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use fairbill::cli::{BillCommand, Cli, Command, USAGE};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code for I/O failures while reading the log or writing the report.
const EXIT_RUNTIME_FAILURE: u8 = 2;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so `--stdout` reports stay clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("fairbill=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fairbill=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprint!("{}", e.render());
            println!("{}", USAGE);
            return ExitCode::from(1);
        }
    };
    init_tracing(cli.debug);

    tracing::debug!("Fairbill starting with args: {:?}", cli);

    match BillCommand::from_cli(&cli).execute() {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_RUNTIME_FAILURE)
        }
    }
}
