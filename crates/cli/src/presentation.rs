// crates/cli/src/presentation.rs
use crate::error::{AppError, Result};
use std::io::Write;
use std::process::ExitCode;
use wcv_engine::format::render_total;
use wcv_engine::{Config, Tally};

/// Per-source diagnostic on stderr, `wc` style.
pub fn report_error(err: &AppError) {
    eprintln!("wcv: {err}");
}

/// Handles a command line that did not parse.
///
/// An unknown option gets the short `wc` diagnostic and usage line. Anything
/// else (including `--help` and `--version`) is left to clap.
pub fn usage_error(err: &clap::Error) -> ExitCode {
    match crate::args::illegal_option(err) {
        Some(option) => {
            report_error(&AppError::IllegalOption(option));
            eprintln!("{}", crate::USAGE);
            ExitCode::FAILURE
        }
        None => err.exit(),
    }
}

/// Writes the summary line across all sources to stdout.
///
/// # Errors
///
/// Returns [`AppError::Io`] when stdout cannot be written.
pub fn print_total(total: &Tally, config: &Config) -> Result<()> {
    let line = render_total(total, &config.selection, config.format);
    let mut out = std::io::stdout().lock();
    writeln!(out, "{line}")?;
    out.flush()?;
    Ok(())
}
