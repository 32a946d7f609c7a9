use std::result;

use thiserror::Error;

/// A type alias for handling errors while the dashboard runs.
pub type Result<T> = result::Result<T, MonitorError>;

/// An error that can occur while the dashboard runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonitorError {
    /// An error when there is an IO exception.
    #[error("IO exception, {0}")]
    InvalidIo(String),
    /// An error when the terminal can't be set up or drawn to.
    #[error("Terminal error, {0}")]
    Terminal(String),
    /// An error to represent generic errors.
    #[error("Error, {0}")]
    GenericError(String),
}

impl From<std::io::Error> for MonitorError {
    fn from(err: std::io::Error) -> Self {
        MonitorError::InvalidIo(err.to_string())
    }
}
