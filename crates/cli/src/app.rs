// crates/cli/src/app.rs
use crate::config::RunConfig;
use crate::error::Result;
use crate::filesystem::open_source;
use crate::presentation::{print_total, report_error};
use std::io;
use wcv_engine::{Counts, SessionOutcome, Tally, TerminalSink};

/// What happened across all sources of one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: Tally,
    pub sources: usize,
    pub failures: usize,
}

impl Summary {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failures == 0
    }
}

/// Counts every source in order, one session at a time.
///
/// A source that cannot be opened or read is reported on stderr and skipped;
/// it never stops the remaining ones. Partial counts from a failed read still
/// go into the total.
///
/// # Errors
///
/// Returns an error for an unusable configuration or when the total line
/// cannot be written.
pub fn run(config: &RunConfig) -> Result<Summary> {
    config.engine.validate()?;

    if config.paths.is_empty() {
        let outcome = wcv_engine::run(
            io::stdin().lock(),
            &config.engine,
            "",
            TerminalSink::stdio(),
        );
        let failures = usize::from(report_outcome(&outcome));
        return Ok(Summary {
            total: outcome.tally(),
            sources: 1,
            failures,
        });
    }

    let total = Counts::new();
    let mut failures = 0;
    for path in &config.paths {
        let file = match open_source(path) {
            Ok(file) => file,
            Err(e) => {
                log::debug!("skipping {}: {e}", path.display());
                report_error(&e);
                failures += 1;
                continue;
            }
        };

        let name = path.to_string_lossy();
        let outcome = wcv_engine::run(file, &config.engine, &name, TerminalSink::stdio());
        total.add(&outcome.counts);
        if report_outcome(&outcome) {
            failures += 1;
        }
    }

    let total = total.snapshot();
    if config.paths.len() > 1 {
        print_total(&total, &config.engine)?;
    }

    Ok(Summary {
        total,
        sources: config.paths.len(),
        failures,
    })
}

/// Reports the session error, if any. Returns `true` when there was one.
fn report_outcome(outcome: &SessionOutcome) -> bool {
    match &outcome.error {
        Some(err) => {
            eprintln!("wcv: {err}");
            true
        }
        None => false,
    }
}

impl From<Summary> for std::process::ExitCode {
    fn from(summary: Summary) -> Self {
        if summary.is_success() {
            Self::SUCCESS
        } else {
            Self::FAILURE
        }
    }
}

