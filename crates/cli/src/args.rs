// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, ValueEnum, ValueHint};
use wcv_engine::OutputFormat;

/// When to show the live progress line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LiveMode {
    /// Only when stderr is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    #[default]
    Plain,
    Jsonl,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Plain => Self::Plain,
            CliOutputFormat::Jsonl => Self::Jsonl,
        }
    }
}

/// Print line, word and byte counts for each file, with a live progress line
/// while counting.
///
/// With no file, standard input is read. A total line follows when more than
/// one file is given.
#[derive(Parser, Debug)]
#[command(
    name = "wcv",
    version = crate::VERSION,
    override_usage = "wcv [-clmw] [file ...]",
    args_override_self = true
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Count bytes (cancels -m)
    #[arg(short = 'c', long = "bytes", overrides_with = "chars", help_heading = "Counters")]
    pub bytes: bool,

    /// Count characters (cancels -c)
    #[arg(short = 'm', long = "chars", overrides_with = "bytes", help_heading = "Counters")]
    pub chars: bool,

    /// Count lines
    #[arg(short = 'l', long = "lines", help_heading = "Counters")]
    pub lines: bool,

    /// Count words
    #[arg(short = 'w', long = "words", help_heading = "Counters")]
    pub words: bool,

    /// Live progress line on stderr
    #[arg(long, value_enum, default_value_t = LiveMode::Auto, help_heading = "Display")]
    pub live: LiveMode,

    /// Refresh period of the live line, in milliseconds
    #[arg(
        long,
        value_name = "MS",
        default_value_t = 250,
        value_parser = clap::value_parser!(u64).range(1..),
        help_heading = "Display"
    )]
    pub interval: u64,

    /// Format of the final lines
    #[arg(long, value_enum, default_value_t = CliOutputFormat::Plain, help_heading = "Display")]
    pub format: CliOutputFormat,

    /// Files to count. Everything after the first file is taken as a file.
    #[arg(trailing_var_arg = true, value_hint = ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,
}

impl Args {
    /// `true` when any of -c, -m, -l, -w was given.
    #[must_use]
    pub const fn has_counter_flags(&self) -> bool {
        self.bytes || self.chars || self.lines || self.words
    }
}

/// The option named by an unknown-argument error, without leading dashes.
#[must_use]
pub fn illegal_option(err: &clap::Error) -> Option<String> {
    if err.kind() != ErrorKind::UnknownArgument {
        return None;
    }
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => Some(arg.trim_start_matches('-').to_string()),
        _ => None,
    }
}
