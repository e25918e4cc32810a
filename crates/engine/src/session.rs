//! One counting run over one source, from first read to final print.

use crate::config::Config;
use crate::counts::{Counts, Tally};
use crate::decode::count_into;
use crate::error::EngineError;
use crate::format::render_final;
use crate::reporter::{self, LiveReporter, Output, ReporterState, ReporterStatus};
use crate::shutdown;
use crate::sink::ReportSink;
use std::io::Read;
use std::sync::Mutex;
use std::thread;

/// Result of [`run`]: the completed counts, plus the error that ended the
/// session early, if any.
#[derive(Debug)]
pub struct SessionOutcome {
    pub counts: Counts,
    pub error: Option<EngineError>,
    /// Where the live reporter ended up. `Idle` if it was never started.
    pub reporter: ReporterState,
}

impl SessionOutcome {
    #[must_use]
    pub fn tally(&self) -> Tally {
        self.counts.snapshot()
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Counts `source`, showing live progress through `sink` while it runs and
/// writing one final line for it at the end.
///
/// The final line is always written, also after a read error, and carries
/// whatever was counted up to that point. It is written while holding the
/// output lock the reporter uses, right after shutdown is signalled under the
/// same lock, so no periodic line can follow it.
///
/// A read error takes precedence over a failure to write the final line.
pub fn run<R, S>(source: R, config: &Config, name: &str, sink: S) -> SessionOutcome
where
    R: Read,
    S: ReportSink,
{
    log::debug!("session started: {}", display_name(name));

    let counts = Counts::new();
    let output = Mutex::new(Output::new(sink));
    let status = ReporterStatus::default();
    let (mut shutdown, listener) = shutdown::channel();

    let (read_result, final_result) = thread::scope(|s| {
        if config.live {
            let reporter = LiveReporter::new(
                &counts,
                config.selection,
                name,
                config.interval,
                listener,
                &status,
            );
            let output = &output;
            s.spawn(move || reporter.run(output));
        } else {
            drop(listener);
        }

        let read_result = count_into(source, &counts);

        let mut out = reporter::lock(&output);
        shutdown.signal();
        if config.live {
            status.advance(ReporterState::Stopping);
        }
        let line = render_final(&counts.snapshot(), &config.selection, name, config.format);
        let final_result = out.finish(&line);
        log::debug!(
            "live lines for {}: {} written, {} suppressed",
            display_name(name),
            out.emitted(),
            out.suppressed()
        );
        drop(out);

        (read_result, final_result)
    });

    let error = match (read_result, final_result) {
        (Err(read), Err(write)) => {
            log::warn!("failed to write counts for {}: {write}", display_name(name));
            Some(EngineError::read(name, read))
        }
        (Err(read), Ok(())) => Some(EngineError::read(name, read)),
        (Ok(()), Err(write)) => Some(EngineError::Output(write)),
        (Ok(()), Ok(())) => None,
    };

    let outcome = SessionOutcome {
        reporter: status.get(),
        counts,
        error,
    };
    log::debug!(
        "session finished: {} {:?}",
        display_name(name),
        outcome.tally()
    );
    outcome
}

fn display_name(name: &str) -> &str {
    if name.is_empty() { "<stdin>" } else { name }
}
