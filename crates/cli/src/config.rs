// crates/cli/src/config.rs
use crate::args::{Args, LiveMode};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;
pub use wcv_engine::config::{Config, ConfigBuilder};
use wcv_engine::Selection;

/// Everything one invocation needs: the engine settings plus the sources.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub engine: Config,
    pub paths: Vec<PathBuf>,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        let engine = Config {
            selection: selection_from_args(&args),
            format: args.format.into(),
            live: resolve_live(args.live),
            interval: Duration::from_millis(args.interval),
        };
        Self {
            engine,
            paths: args.paths,
        }
    }
}

/// Counter flags replace the default selection as soon as one is given.
fn selection_from_args(args: &Args) -> Selection {
    if !args.has_counter_flags() {
        return Selection::default();
    }
    Selection {
        lines: args.lines,
        words: args.words,
        bytes: args.bytes,
        chars: args.chars,
    }
}

fn resolve_live(mode: LiveMode) -> bool {
    match mode {
        LiveMode::Always => true,
        LiveMode::Never => false,
        LiveMode::Auto => std::io::stderr().is_terminal(),
    }
}
