//! Failure conditions raised while locating commands and constructing processes.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The locator could not map a logical command name to an executable.
    #[error("command not found: {name}")]
    CommandNotFound { name: String },

    /// A process was requested from arguments that cannot describe one.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// An argument was read outside `[0, count)`.
    #[error("argument index {index} out of range for {count} arguments")]
    IndexOutOfRange { index: usize, count: usize },

    /// A process timeout was negative or not a finite number.
    #[error("invalid timeout: {0} (expected a finite number of seconds >= 0)")]
    InvalidTimeout(f64),

    /// A required argument was given an empty value.
    #[error("missing required argument: {0}")]
    MissingArgument(String),
}

impl Error {
    pub fn command_not_found(name: impl Into<String>) -> Self {
        Self::CommandNotFound { name: name.into() }
    }
}
