use crate::error::{EngineError, Result};
use crate::options::{OutputFormat, Selection};
use derive_builder::Builder;
use std::time::Duration;

/// Four refreshes per second.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub selection: Selection,
    #[builder(default)]
    pub format: OutputFormat,
    /// Show the periodically refreshed progress line while counting.
    #[builder(default = "true")]
    pub live: bool,
    #[builder(default = "DEFAULT_INTERVAL")]
    pub interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selection: Selection::default(),
            format: OutputFormat::default(),
            live: true,
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl Config {
    /// Rejects settings the session cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] when the refresh interval is zero or no
    /// counter is selected.
    pub fn validate(&self) -> Result<()> {
        if self.live && self.interval.is_zero() {
            return Err(EngineError::Config(
                "refresh interval must be greater than zero".to_string(),
            ));
        }
        if self.selection.is_empty() {
            return Err(EngineError::Config("no counter selected".to_string()));
        }
        Ok(())
    }
}
