//! One-shot shutdown broadcast.
//!
//! Nothing is ever sent on the channel. Signalling drops the only sender, and
//! every receiver sees the disconnection from then on, however many times it
//! checks.

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::convert::Infallible;

#[must_use]
pub fn channel() -> (Shutdown, ShutdownListener) {
    let (tx, rx) = crossbeam_channel::bounded(0);
    (Shutdown { tx: Some(tx) }, ShutdownListener { rx })
}

/// Owning side. Dropping it signals as well.
#[derive(Debug)]
pub struct Shutdown {
    tx: Option<Sender<Infallible>>,
}

impl Shutdown {
    /// Signals every listener. Calling it again does nothing.
    pub fn signal(&mut self) {
        if self.tx.take().is_some() {
            log::trace!("shutdown signalled");
        }
    }

    #[must_use]
    pub const fn is_signalled(&self) -> bool {
        self.tx.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct ShutdownListener {
    rx: Receiver<Infallible>,
}

impl ShutdownListener {
    /// Non-blocking check.
    #[must_use]
    pub fn is_signalled(&self) -> bool {
        matches!(self.rx.try_recv(), Err(TryRecvError::Disconnected))
    }

    /// Channel that becomes ready once signalled, for use in `select!`.
    #[must_use]
    pub const fn receiver(&self) -> &Receiver<Infallible> {
        &self.rx
    }
}
