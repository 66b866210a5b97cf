//! Entry point for the `arterial` command-line tool.
//!
//! Parses arguments, runs the selected command, writes the rendered summary
//! to stdout and maps failures to a non-zero exit code. Logging is set up
//! before anything else so every later step can emit `tracing` events.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, field};

use arterial_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.format;
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, format, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err
            .downcast_ref::<CliError>()
            .and_then(CliError::graph_code)
            .map(|code| field::display(code.as_str()));
        let message = format!("{err:#}");
        error!(error = %message, code, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
