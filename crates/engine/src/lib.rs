// crates/engine/src/lib.rs
//! Counting engine for `wcv`.
//!
//! A session decodes one source on the calling thread while a background
//! reporter shows the counts so far; see [`session::run`].

pub mod config;
pub mod counts;
pub mod decode;
pub mod error;
pub mod format;
pub mod options;
pub mod reporter;
pub mod session;
pub mod shutdown;
pub mod sink;

pub use config::{Config, ConfigBuilder};
pub use counts::{Counter, Counts, Tally};
pub use error::{EngineError, Result};
pub use options::{OutputFormat, Selection};
pub use session::{SessionOutcome, run};
pub use sink::{ReportSink, TerminalSink};
