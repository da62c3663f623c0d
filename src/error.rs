use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PollError>;

#[derive(Debug, Error)]
pub enum PollError {
    #[error("{0}")]
    Validation(String),

    #[error("No polls available")]
    NoPoll,

    #[error("Voting is closed for this poll")]
    ClosedPoll,

    #[error("No options available in this poll")]
    EmptyPoll,

    #[error("Unable to open file: {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    // Console read/write failures; the session cannot continue after one.
    #[error("Console I/O failed: {0}")]
    Input(#[from] std::io::Error),
}

impl PollError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, PollError::Input(_) | PollError::Config(_))
    }
}
