use std::io;
use thiserror::Error;

/// Custom error type for the ytblock application
#[derive(Error, Debug)]
pub enum YtBlockError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("No channels: {0}")]
    NoChannels(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),
}

/// Result type alias for the ytblock application
pub type Result<T> = std::result::Result<T, YtBlockError>;

impl YtBlockError {
    /// Create a missing input error
    pub fn missing_input<S: Into<String>>(msg: S) -> Self {
        YtBlockError::MissingInput(msg.into())
    }

    /// Create a no channels error
    pub fn no_channels<S: Into<String>>(msg: S) -> Self {
        YtBlockError::NoChannels(msg.into())
    }

    /// Create a tool not found error
    pub fn tool_not_found<S: Into<String>>(msg: S) -> Self {
        YtBlockError::ToolNotFound(msg.into())
    }
}
