//! Periodic progress line.

use crate::counts::Counts;
use crate::format::render_plain;
use crate::options::Selection;
use crate::shutdown::ShutdownListener;
use crate::sink::ReportSink;
use crossbeam_channel::{select, tick};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Lifecycle of a [`LiveReporter`]. States only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum ReporterState {
    Idle = 0,
    Running = 1,
    Stopping = 2,
    Stopped = 3,
}

impl ReporterState {
    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Idle,
            1 => Self::Running,
            2 => Self::Stopping,
            _ => Self::Stopped,
        }
    }
}

#[derive(Debug, Default)]
pub struct ReporterStatus(AtomicU8);

impl ReporterStatus {
    #[must_use]
    pub fn get(&self) -> ReporterState {
        ReporterState::from_u8(self.0.load(Ordering::Acquire))
    }

    /// Moves to `to` unless a later state was already reached.
    pub fn advance(&self, to: ReporterState) {
        self.0.fetch_max(to as u8, Ordering::AcqRel);
    }
}

/// Output shared by periodic and final prints. Always used behind a `Mutex`.
#[derive(Debug)]
pub struct Output<S> {
    sink: S,
    last_live: Option<String>,
    emitted: u64,
    suppressed: u64,
}

impl<S: ReportSink> Output<S> {
    pub const fn new(sink: S) -> Self {
        Self {
            sink,
            last_live: None,
            emitted: 0,
            suppressed: 0,
        }
    }

    /// Writes a live line unless it matches the previous one exactly.
    /// Failures are logged; the live line is best effort.
    fn live(&mut self, line: String) {
        if self.last_live.as_deref() == Some(line.as_str()) {
            self.suppressed += 1;
            return;
        }
        if let Err(e) = self.sink.live(&line) {
            log::warn!("failed to write progress line: {e}");
        }
        self.emitted += 1;
        self.last_live = Some(line);
    }

    pub fn finish(&mut self, line: &str) -> std::io::Result<()> {
        self.sink.finish(line)
    }

    pub const fn emitted(&self) -> u64 {
        self.emitted
    }

    pub const fn suppressed(&self) -> u64 {
        self.suppressed
    }
}

pub fn lock<S>(output: &Mutex<Output<S>>) -> MutexGuard<'_, Output<S>> {
    output.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Background task rendering in-progress counts on a fixed interval.
pub struct LiveReporter<'a> {
    counts: &'a Counts,
    selection: Selection,
    name: &'a str,
    interval: Duration,
    shutdown: ShutdownListener,
    status: &'a ReporterStatus,
}

impl<'a> LiveReporter<'a> {
    pub const fn new(
        counts: &'a Counts,
        selection: Selection,
        name: &'a str,
        interval: Duration,
        shutdown: ShutdownListener,
        status: &'a ReporterStatus,
    ) -> Self {
        Self {
            counts,
            selection,
            name,
            interval,
            shutdown,
            status,
        }
    }

    /// Runs until shutdown is signalled. The first line goes out immediately.
    pub fn run<S: ReportSink>(self, output: &Mutex<Output<S>>) {
        self.status.advance(ReporterState::Running);
        log::debug!("live reporter started, interval {:?}", self.interval);

        let ticker = tick(self.interval);
        while self.tick(output) {
            select! {
                recv(ticker) -> _ => {}
                recv(self.shutdown.receiver()) -> _ => break,
            }
        }

        self.status.advance(ReporterState::Stopped);
        log::debug!("live reporter stopped");
    }

    /// Emits one line. Returns `false` once shutdown has been observed, in
    /// which case nothing was written.
    fn tick<S: ReportSink>(&self, output: &Mutex<Output<S>>) -> bool {
        let mut out = lock(output);
        // The final print signals while holding this lock.
        if self.shutdown.is_signalled() {
            return false;
        }
        let line = render_plain(&self.counts.snapshot(), &self.selection, self.name);
        out.live(line);
        true
    }
}
