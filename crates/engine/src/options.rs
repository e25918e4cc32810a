use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Final-line output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Right-justified columns, `wc` style.
    #[default]
    Plain,
    /// One JSON object per line.
    Jsonl,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "jsonl" => Ok(Self::Jsonl),
            other => Err(format!("Unknown output format: {other}")),
        }
    }
}

/// Which counters are displayed.
///
/// Every counter is tracked regardless of the selection; this only controls
/// the columns that get rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub lines: bool,
    pub words: bool,
    pub bytes: bool,
    pub chars: bool,
}

impl Selection {
    /// Nothing selected. Callers enable columns one by one.
    pub const NONE: Self = Self {
        lines: false,
        words: false,
        bytes: false,
        chars: false,
    };

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.lines || self.words || self.bytes || self.chars)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            lines: true,
            words: true,
            bytes: true,
            chars: false,
        }
    }
}
