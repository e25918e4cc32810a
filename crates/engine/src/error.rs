use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{}", read_message(.name, .source))]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error: {0}")]
    Output(#[source] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Wraps a read failure for the named source. An empty name means stdin.
    pub fn read(name: impl Into<String>, source: std::io::Error) -> Self {
        Self::Read {
            name: name.into(),
            source,
        }
    }
}

fn read_message(name: &str, source: &std::io::Error) -> String {
    if name.is_empty() {
        source.to_string()
    } else {
        format!("{name}: {source}")
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
