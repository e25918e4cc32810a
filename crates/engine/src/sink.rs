//! Output side of a counting session.

use std::io::{self, Write};

/// Destination for rendered lines.
///
/// The session serialises every call behind one lock, so implementations never
/// see a live write racing with the final write.
pub trait ReportSink: Send {
    /// Shows an in-progress line that the next write replaces.
    fn live(&mut self, line: &str) -> io::Result<()>;

    /// Writes the authoritative, newline-terminated line for a source.
    fn finish(&mut self, line: &str) -> io::Result<()>;
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn live(&mut self, line: &str) -> io::Result<()> {
        (**self).live(line)
    }

    fn finish(&mut self, line: &str) -> io::Result<()> {
        (**self).finish(line)
    }
}

/// Live lines on one stream, carriage-return terminated; final lines on
/// another.
///
/// Before a final line is written, any live line still showing is blanked out
/// so it does not linger when the two streams go to different places.
#[derive(Debug)]
pub struct TerminalSink<L, F> {
    live_out: L,
    final_out: F,
    shown: usize,
}

impl TerminalSink<io::Stderr, io::Stdout> {
    /// Live lines on stderr, final lines on stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stderr(), io::stdout())
    }
}

impl<L: Write, F: Write> TerminalSink<L, F> {
    pub const fn new(live_out: L, final_out: F) -> Self {
        Self {
            live_out,
            final_out,
            shown: 0,
        }
    }

    fn clear_live(&mut self) -> io::Result<()> {
        if self.shown > 0 {
            write!(self.live_out, "\r{:width$}\r", "", width = self.shown)?;
            self.live_out.flush()?;
            self.shown = 0;
        }
        Ok(())
    }

    pub fn into_inner(self) -> (L, F) {
        (self.live_out, self.final_out)
    }
}

impl<L: Write + Send, F: Write + Send> ReportSink for TerminalSink<L, F> {
    fn live(&mut self, line: &str) -> io::Result<()> {
        write!(self.live_out, "{line}\r")?;
        self.live_out.flush()?;
        self.shown = line.chars().count();
        Ok(())
    }

    fn finish(&mut self, line: &str) -> io::Result<()> {
        self.clear_live()?;
        writeln!(self.final_out, "{line}")?;
        self.final_out.flush()
    }
}
