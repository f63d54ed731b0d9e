use thiserror::Error;

/// Errors surfaced by the tracker core.
///
/// `Parse` and `Command` carry messages meant for the user verbatim. The
/// low-level variants come from stores and archives.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Malformed input: unknown command word, bad syntax or an invalid value.
    #[error("{0}")]
    Parse(String),

    /// A well-formed command that cannot be satisfied against the model.
    #[error("{0}")]
    Command(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TrackerError {
    pub fn parse(message: impl Into<String>) -> Self {
        TrackerError::Parse(message.into())
    }

    pub fn command(message: impl Into<String>) -> Self {
        TrackerError::Command(message.into())
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, TrackerError::Parse(_))
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
